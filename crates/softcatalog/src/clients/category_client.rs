//! # Category Client
//!
//! Typed access to the category collection, including the signed counter
//! adjustment the product store relies on.
use crate::category_actor::{CategoryAction, CategoryError};
use crate::model::{Category, CategoryCreate, CategoryId};
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct CategoryClient {
    inner: ResourceClient<Category>,
}

impl CategoryClient {
    pub fn new(inner: ResourceClient<Category>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Category> for CategoryClient {
    type Error = CategoryError;

    fn inner(&self) -> &ResourceClient<Category> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        CategoryError::from(e)
    }
}

impl CategoryClient {
    #[instrument(skip(self))]
    pub async fn create_category(&self, params: CategoryCreate) -> Result<CategoryId, CategoryError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Applies `max(0, product_count + delta)` atomically and returns the new count.
    #[instrument(skip(self))]
    pub async fn adjust_product_count(
        &self,
        id: CategoryId,
        delta: i64,
    ) -> Result<u64, CategoryError> {
        debug!("Adjusting product count");
        self.inner
            .perform_action(id, CategoryAction::AdjustProductCount(delta))
            .await
            .map_err(Self::map_error)
    }

    /// Overwrites the stored count. Not used by any product write path.
    #[instrument(skip(self))]
    pub async fn set_product_count(&self, id: CategoryId, count: u64) -> Result<u64, CategoryError> {
        debug!("Setting product count");
        self.inner
            .perform_action(id, CategoryAction::SetProductCount(count))
            .await
            .map_err(Self::map_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use resource_actor::mock::{create_mock_client, expect_action};

    #[tokio::test]
    async fn test_adjust_sends_signed_delta() {
        let (client, mut receiver) = create_mock_client::<Category>(10);
        let categories = CategoryClient::new(client);

        let task = tokio::spawn(async move {
            categories
                .adjust_product_count(CategoryId::from("cat1"), -1)
                .await
        });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, CategoryId::from("cat1"));
        assert_eq!(action, CategoryAction::AdjustProductCount(-1));
        responder.send(Ok(4)).unwrap();

        assert_eq!(task.await.unwrap().unwrap(), 4);
    }

    #[tokio::test]
    async fn test_missing_category_maps_to_not_found() {
        let mut mock = resource_actor::mock::MockClient::<Category>::new();
        let categories = CategoryClient::new(mock.client());
        mock.expect_action(CategoryId::from("cat9"))
            .return_err(FrameworkError::NotFound("cat9".into()));

        let err = categories
            .adjust_product_count(CategoryId::from("cat9"), 1)
            .await
            .unwrap_err();
        assert_eq!(err, CategoryError::NotFound("cat9".into()));
        mock.verify();
    }
}
