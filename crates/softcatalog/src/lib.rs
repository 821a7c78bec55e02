//! # Softcatalog
//!
//! Catalog engine for Brazilian and foreign software products.
//!
//! ## Core Components
//!
//! - **[model]**: [`Product`](model::Product), [`Category`](model::Category) and the
//!   loosely-typed [`LegacyProduct`](model::LegacyProduct)
//! - **[normalize]**: slug generator, legacy field extractor, record normalizer
//! - **[migration]**: moves both legacy sources into the product store in one batch
//! - **[clients]**: the product store, category and legacy source APIs
//! - **[query]** and **[stats]**: pure views over a product snapshot
//! - **[lifecycle]**: starts and stops all collections as a [`CatalogSystem`](lifecycle::CatalogSystem)
//!
//! ## Quick Start
//!
//! ```rust
//! use softcatalog::lifecycle::CatalogSystem;
//! use softcatalog::model::{CategoryCreate, ProductCreate};
//! use softcatalog::query::{query_products, ProductFilter, SortKey, SortSpec};
//! use resource_actor::ActorClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let system = CatalogSystem::new();
//!
//!     let erp = system
//!         .category_client
//!         .create_category(CategoryCreate::new("ERP"))
//!         .await?;
//!     system
//!         .product_client
//!         .create_product(ProductCreate::new("Omie").with_category(erp.clone()))
//!         .await?;
//!
//!     let category = system.category_client.get(erp).await?.unwrap();
//!     assert_eq!(category.product_count, 1);
//!
//!     let all = system.product_client.get_all().await?;
//!     let found = query_products(
//!         &all,
//!         &ProductFilter::default().search("omie"),
//!         Some(SortSpec::new(SortKey::Name)),
//!     );
//!     assert_eq!(found.len(), 1);
//!
//!     system.shutdown().await?;
//!     Ok(())
//! }
//! ```

pub mod category_actor;
pub mod clients;
pub mod config;
pub mod legacy_actor;
pub mod lifecycle;
pub mod migration;
pub mod model;
pub mod normalize;
pub mod product_actor;
pub mod query;
pub mod stats;
