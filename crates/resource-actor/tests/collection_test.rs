use async_trait::async_trait;
use resource_actor::{ActorEntity, FrameworkError, ResourceActor};

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq)]
struct Listing {
    id: u32,
    title: String,
    hits: u64,
}

#[derive(Debug)]
struct ListingCreate {
    title: String,
}

#[derive(Debug)]
struct ListingUpdate {
    title: Option<String>,
}

#[derive(Debug)]
enum ListingAction {
    Hit,
}

#[derive(Debug, thiserror::Error)]
#[error("Listing title must not be empty")]
struct ListingError;

#[async_trait]
impl ActorEntity for Listing {
    type Id = u32;
    type Create = ListingCreate;
    type Update = ListingUpdate;
    type Action = ListingAction;
    type ActionResult = u64;
    type Context = ();
    type Error = ListingError;

    fn from_create_params(id: u32, params: ListingCreate) -> Result<Self, Self::Error> {
        if params.title.is_empty() {
            return Err(ListingError);
        }
        Ok(Self {
            id,
            title: params.title,
            hits: 0,
        })
    }

    async fn on_update(&mut self, update: ListingUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(title) = update.title {
            self.title = title;
        }
        Ok(())
    }

    async fn handle_action(&mut self, action: ListingAction, _ctx: &()) -> Result<u64, Self::Error> {
        match action {
            ListingAction::Hit => {
                self.hits += 1;
                Ok(self.hits)
            }
        }
    }
}

fn create(title: &str) -> ListingCreate {
    ListingCreate {
        title: title.to_string(),
    }
}

#[tokio::test]
async fn test_crud_lifecycle() {
    let (actor, client) = ResourceActor::<Listing>::new(10);
    let handle = tokio::spawn(actor.run(()));

    let id = client.create(create("Conta Azul")).await.unwrap();
    assert_eq!(id, 1);

    let updated = client
        .update(
            id,
            ListingUpdate {
                title: Some("ContaAzul".into()),
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.title, "ContaAzul");

    let removed = client.delete(id).await.unwrap();
    assert_eq!(removed.title, "ContaAzul");
    assert!(client.get(id).await.unwrap().is_none());

    let missing = client.delete(id).await;
    assert!(matches!(missing, Err(FrameworkError::NotFound(_))));

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_batch_is_all_or_nothing() {
    let (actor, client) = ResourceActor::<Listing>::new(10);
    tokio::spawn(actor.run(()));

    let rejected = client
        .create_batch(vec![create("Pipefy"), create(""), create("RD Station")])
        .await;
    match rejected {
        Err(FrameworkError::BatchRejected { index, .. }) => assert_eq!(index, 1),
        other => panic!("Expected BatchRejected, got {:?}", other),
    }
    assert!(client.list().await.unwrap().is_empty());

    let ids = client
        .create_batch(vec![create("Pipefy"), create("RD Station")])
        .await
        .unwrap();
    assert_eq!(ids.len(), 2);

    let listed: Vec<String> = client
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|l| l.title)
        .collect();
    assert_eq!(listed, vec!["Pipefy", "RD Station"]);
}

/// Concurrent actions on one record are serialized by the actor, so no hit is lost.
#[tokio::test]
async fn test_concurrent_actions_are_serialized() {
    let (actor, client) = ResourceActor::<Listing>::new(32);
    tokio::spawn(actor.run(()));

    let id = client.create(create("Nuvemshop")).await.unwrap();

    let mut handles = vec![];
    for _ in 0..50 {
        let client = client.clone();
        handles.push(tokio::spawn(async move {
            client.perform_action(id, ListingAction::Hit).await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    assert_eq!(client.get(id).await.unwrap().unwrap().hits, 50);
}

#[tokio::test]
async fn test_client_without_running_actor_is_unreachable() {
    let (actor, client) = ResourceActor::<Listing>::new(4);
    drop(actor);

    let err = client.list().await.unwrap_err();
    assert!(err.is_unreachable());
}
