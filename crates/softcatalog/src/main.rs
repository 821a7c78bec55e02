use resource_actor::ActorClient;
use softcatalog::config::CatalogConfig;
use softcatalog::lifecycle::{setup_tracing, CatalogSystem};
use softcatalog::model::{CategoryCreate, ProductUpdate};
use softcatalog::query::{query_products, ProductFilter, SortKey, SortSpec};
use softcatalog::stats::compute_stats;
use tracing::{info, warn, Instrument};

const BRAZILIAN_SEED: &[&str] = &[
    r#"{"name": "Conta Azul", "description": "Gestão financeira online para pequenas empresas", "location": "Joinville, SC, Brasil", "pricingModel": "Pago", "price": "89,90", "categoryId": "category_1", "tags": ["erp", "financeiro"], "foundedYear": 2011}"#,
    r#"{"name": "Pipefy", "description": "Automação de processos", "location": "Curitiba, PR, Brasil", "pricingModel": "Freemium", "categoryId": "category_2", "downloads": 2500000}"#,
    r#"{"name": "RD Station", "location": "Florianópolis, SC, Brasil", "price": 0, "categoryId": "category_2", "isFeatured": true}"#,
];

const FOREIGN_SEED: &[&str] = &[
    r#"{"name": "Trello", "description": "Quadros kanban", "location": "Nova York, NY, Estados Unidos", "pricingModel": "Freemium", "categoryId": "category_2", "substitutes": ["Pipefy"], "isUnicorn": true}"#,
    r#"{"name": "Xero", "location": "Wellington, Nova Zelândia", "pricingModel": "Enterprise", "categoryId": "category_1", "createdAt": 1262304000000}"#,
];

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = CatalogConfig::from_env();
    info!(?config, "Starting catalog");
    let system = CatalogSystem::with_config(config);

    for name in ["Gestão Empresarial", "Produtividade"] {
        system
            .category_client
            .create_category(CategoryCreate::new(name))
            .await
            .map_err(|e| e.to_string())?;
    }

    system
        .brazilian_source
        .insert_json(BRAZILIAN_SEED)
        .await
        .map_err(|e| e.to_string())?;
    system
        .foreign_source
        .insert_json(FOREIGN_SEED)
        .await
        .map_err(|e| e.to_string())?;

    let runner = system.migration_runner();
    let report = async { runner.migrate().await.map_err(|e| e.to_string()) }
        .instrument(tracing::info_span!("migration"))
        .await?;
    info!(?report, "Migration report");

    let span = tracing::info_span!("product_writes");
    async {
        let Some(pipefy) = system
            .product_client
            .get_by_slug("pipefy")
            .await
            .map_err(|e| e.to_string())?
        else {
            warn!("Migrated product not found");
            return Ok(());
        };

        system.product_client.increment_views(pipefy.id).await;
        system
            .product_client
            .update_product(
                pipefy.id,
                ProductUpdate {
                    category_id: Some("category_1".into()),
                    ..Default::default()
                },
            )
            .await
            .map_err(|e| e.to_string())?;
        system
            .product_client
            .toggle_featured(pipefy.id, true)
            .await
            .map_err(|e| e.to_string())?;
        Ok::<(), String>(())
    }
    .instrument(span)
    .await?;

    let all = system
        .product_client
        .get_all()
        .await
        .map_err(|e| e.to_string())?;
    let top_brazilian = query_products(
        &all,
        &ProductFilter::default().only_brazilian().active(),
        Some(SortSpec::new(SortKey::Rating)),
    );
    for product in &top_brazilian {
        info!(slug = %product.slug, category = ?product.category, "Brazilian product");
    }

    let stats = serde_json::to_string(&compute_stats(&all)).map_err(|e| e.to_string())?;
    info!(%stats, "Catalog stats");
    for category in system.category_client.list().await.map_err(|e| e.to_string())? {
        info!(id = %category.id, count = category.product_count, "Category counter");
    }

    let purged = runner
        .purge_legacy_sources()
        .await
        .map_err(|e| e.to_string())?;
    info!(?purged, "Legacy sources purged");

    drop(runner);
    system.shutdown().await?;

    info!("Catalog demo completed");
    Ok(())
}
