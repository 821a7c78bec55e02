use tracing::{error, info};

use crate::clients::{CategoryClient, LegacyClient, ProductClient};
use crate::config::CatalogConfig;
use crate::migration::MigrationRunner;
use crate::normalize::Normalizer;
use crate::product_actor::ProductContext;

/// Runtime orchestrator for the catalog.
///
/// Owns one running actor per collection:
/// - **Category actor**: categories and their `product_count`
/// - **Product actor**: canonical products
/// - **Brazilian / foreign legacy actors**: the two migration sources
///
/// # Example
///
/// ```ignore
/// let system = CatalogSystem::new();
///
/// let report = system.migration_runner().migrate().await?;
/// let all = system.product_client.get_all().await?;
///
/// system.shutdown().await?;
/// ```
pub struct CatalogSystem {
    pub product_client: ProductClient,
    pub category_client: CategoryClient,
    pub brazilian_source: LegacyClient,
    pub foreign_source: LegacyClient,
    config: CatalogConfig,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl CatalogSystem {
    /// Starts every collection with [`CatalogConfig::default`].
    pub fn new() -> Self {
        Self::with_config(CatalogConfig::default())
    }

    /// Starts every collection. Must be called inside a Tokio runtime.
    pub fn with_config(config: CatalogConfig) -> Self {
        let buffer = config.channel_buffer;

        // 1. Create actors
        let (category_actor, category_inner) = crate::category_actor::new(buffer);
        let (product_actor, product_inner) = crate::product_actor::new(buffer);
        let (brazilian_actor, brazilian_inner) = crate::legacy_actor::new(buffer);
        let (foreign_actor, foreign_inner) = crate::legacy_actor::new(buffer);

        // 2. Start actors with their context
        let product_context = ProductContext {
            short_description_len: config.short_description_len,
        };
        let handles = vec![
            tokio::spawn(category_actor.run(())),
            tokio::spawn(product_actor.run(product_context)),
            tokio::spawn(brazilian_actor.run(())),
            tokio::spawn(foreign_actor.run(())),
        ];

        let category_client = CategoryClient::new(category_inner);
        info!(buffer, "Catalog system started");

        Self {
            product_client: ProductClient::new(product_inner, category_client.clone()),
            category_client,
            brazilian_source: LegacyClient::new(brazilian_inner),
            foreign_source: LegacyClient::new(foreign_inner),
            config,
            handles,
        }
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// A runner wired to this system's sources and product store.
    pub fn migration_runner(&self) -> MigrationRunner {
        MigrationRunner::new(
            self.brazilian_source.clone(),
            self.foreign_source.clone(),
            self.product_client.clone(),
            Normalizer::from_config(&self.config),
        )
    }

    /// Drops every client and waits for the actors to drain and stop.
    ///
    /// Clients cloned out of the system (including those held by a
    /// [`MigrationRunner`]) keep their actor alive, so drop them first.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down catalog system...");

        drop(self.product_client);
        drop(self.category_client);
        drop(self.brazilian_source);
        drop(self.foreign_source);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Actor task failed");
                return Err(format!("Actor task failed: {}", e));
            }
        }

        info!("Catalog system shut down");
        Ok(())
    }
}

impl Default for CatalogSystem {
    fn default() -> Self {
        Self::new()
    }
}
