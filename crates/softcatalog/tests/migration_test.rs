use resource_actor::mock::MockClient;
use resource_actor::{ActorClient, FrameworkError};
use softcatalog::clients::{CategoryClient, LegacyClient, ProductClient};
use softcatalog::lifecycle::CatalogSystem;
use softcatalog::migration::MigrationRunner;
use softcatalog::model::{CategoryCreate, LegacyRecord};
use softcatalog::normalize::Normalizer;
use softcatalog::stats::compute_stats;
use softcatalog::{category_actor, legacy_actor, product_actor};

const BRAZILIAN: &[&str] = &[
    r#"{"name": "Conta Azul", "location": "Joinville, SC, Brasil", "categoryId": "category_1", "downloads": "1200"}"#,
    r#"{"name": "Pipefy", "location": "Curitiba, PR, Brasil", "categoryId": "category_1"}"#,
];
const FOREIGN: &[&str] = &[r#"{"name": "Trello", "location": "Nova York, NY, Estados Unidos"}"#];

/// Real product and category collections, scripted sources.
fn runner_with_sources(brazilian: LegacyClient, foreign: LegacyClient) -> (MigrationRunner, ProductClient) {
    let (category_actor, categories) = category_actor::new(16);
    let (product_actor, products) = product_actor::new(16);
    tokio::spawn(category_actor.run(()));
    tokio::spawn(product_actor.run(Default::default()));

    let products = ProductClient::new(products, CategoryClient::new(categories));
    let runner = MigrationRunner::new(brazilian, foreign, products.clone(), Normalizer::default());
    (runner, products)
}

async fn seeded_source(docs: &[&str]) -> LegacyClient {
    let (actor, client) = legacy_actor::new(16);
    tokio::spawn(actor.run(()));
    let source = LegacyClient::new(client);
    source.insert_json(docs).await.expect("Failed to seed source");
    source
}

#[tokio::test]
async fn test_full_migration() {
    let system = CatalogSystem::new();
    let cat = system
        .category_client
        .create_category(CategoryCreate::new("Gestão"))
        .await
        .unwrap();
    system.brazilian_source.insert_json(BRAZILIAN).await.unwrap();
    system.foreign_source.insert_json(FOREIGN).await.unwrap();

    let runner = system.migration_runner();
    let report = runner.migrate().await.expect("Migration failed");

    assert_eq!(report.brazilian_read, 2);
    assert_eq!(report.foreign_read, 1);
    assert_eq!(report.written, 3);
    assert_eq!(report.success_ratio, 1.0);

    let all = system.product_client.get_all().await.unwrap();
    let stats = compute_stats(&all);
    assert_eq!(stats.brazilian, 2);
    assert_eq!(stats.foreign, 1);
    assert_eq!(stats.by_category.get("Gestão"), Some(&2));

    let conta_azul = system
        .product_client
        .get_by_slug("conta-azul")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(conta_azul.views, 1200);
    assert_eq!(conta_azul.location.city.as_deref(), Some("Joinville"));
    assert_eq!(conta_azul.category_slug.as_deref(), Some("gestao"));

    let trello = system.product_client.get_by_slug("trello").await.unwrap().unwrap();
    assert_eq!(trello.location.country_code, "US");

    // Counters follow the migrated records
    let category = system.category_client.get(cat).await.unwrap().unwrap();
    assert_eq!(category.product_count, 2);

    // Sources are untouched until purged
    assert_eq!(system.brazilian_source.read_all().await.unwrap().len(), 2);
    let purged = runner.purge_legacy_sources().await.unwrap();
    assert_eq!(purged.brazilian_removed, 2);
    assert_eq!(purged.foreign_removed, 1);
    assert!(system.foreign_source.read_all().await.unwrap().is_empty());

    drop(runner);
    system.shutdown().await.unwrap();
}

/// One unreadable source: the other one still migrates.
#[tokio::test]
async fn test_unreachable_source_is_treated_as_empty() {
    let brazilian = seeded_source(BRAZILIAN).await;

    let mut foreign_mock = MockClient::<LegacyRecord>::new();
    foreign_mock
        .expect_list()
        .return_err(FrameworkError::ActorClosed);
    let foreign = LegacyClient::new(foreign_mock.client());

    let (runner, products) = runner_with_sources(brazilian, foreign);
    let report = runner.migrate().await.expect("Migration must tolerate a failed source");

    assert_eq!(report.brazilian_read, 2);
    assert_eq!(report.foreign_read, 0);
    assert_eq!(report.written, 2);
    assert_eq!(report.success_ratio, 1.0);
    assert_eq!(products.list().await.unwrap().len(), 2);
    foreign_mock.verify();
}

#[tokio::test]
async fn test_stopped_source_actor_is_treated_as_empty() {
    let brazilian = seeded_source(BRAZILIAN).await;
    let (stopped, client) = legacy_actor::new(4);
    drop(stopped);

    let (runner, _products) = runner_with_sources(brazilian, LegacyClient::new(client));
    let report = runner.migrate().await.unwrap();

    assert_eq!(report.written, 2);
    assert_eq!(report.foreign_read, 0);
}

#[tokio::test]
async fn test_nothing_to_migrate() {
    let (runner, products) = runner_with_sources(seeded_source(&[]).await, seeded_source(&[]).await);
    let report = runner.migrate().await.unwrap();

    assert_eq!(report.written, 0);
    assert_eq!(report.success_ratio, 0.0);
    assert!(products.list().await.unwrap().is_empty());
}

/// Documents with nothing but noise still migrate.
#[tokio::test]
async fn test_sparse_documents_migrate() {
    let brazilian = seeded_source(&["{}", r#"{"name": "", "tags": null}"#]).await;
    let foreign = seeded_source(&[r#"{"price": "abc", "location": ",,"}"#]).await;

    let (runner, products) = runner_with_sources(brazilian, foreign);
    let report = runner.migrate().await.unwrap();
    assert_eq!(report.written, 3);

    let slugs: Vec<String> = products
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.slug)
        .collect();
    assert_eq!(slugs, vec!["sem-nome", "sem-nome-2", "sem-nome-3"]);
}
