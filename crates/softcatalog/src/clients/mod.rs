//! Domain clients wrapping the generic [`ResourceClient`](resource_actor::ResourceClient)s.

pub mod category_client;
pub mod legacy_client;
pub mod product_client;

pub use category_client::CategoryClient;
pub use legacy_client::LegacyClient;
pub use product_client::ProductClient;
