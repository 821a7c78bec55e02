//! # Product Client
//!
//! The product store's write and read API.
//!
//! Writes happen in two phases. The product write itself is the primary
//! operation and its outcome is what the caller sees. Category counter changes
//! it implies are collected as [`CounterAdjustment`]s and dispatched to the
//! category collection only after the primary write committed; a failed
//! adjustment is logged and never undoes or fails the write.
use std::collections::BTreeMap;

use crate::clients::CategoryClient;
use crate::model::{CategoryId, CounterAdjustment, Product, ProductCreate, ProductId, ProductUpdate};
use crate::product_actor::{ProductAction, ProductActionResult, ProductError};
use crate::query::{sort_products, SortKey, SortSpec};
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, info, instrument, warn};

#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
    categories: CategoryClient,
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>, categories: CategoryClient) -> Self {
        Self { inner, categories }
    }

    pub fn categories(&self) -> &CategoryClient {
        &self.categories
    }
}

#[async_trait]
impl ActorClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        ProductError::from(e)
    }
}

impl ProductClient {
    /// Stores a product and then increments its category's counter.
    ///
    /// Slugs are not checked for uniqueness here.
    #[instrument(skip(self, params), fields(name = %params.name))]
    pub async fn create_product(&self, mut params: ProductCreate) -> Result<ProductId, ProductError> {
        if let Some(category_id) = params.category_id.clone() {
            self.fill_category_fields(&category_id, &mut params.category_slug, &mut params.category)
                .await;
        }
        let category_id = params.category_id.clone();

        debug!("Sending request");
        let id = self.inner.create(params).await.map_err(Self::map_error)?;
        info!(%id, "Product created");

        if let Some(category_id) = category_id {
            self.apply_adjustments(&[CounterAdjustment::increment(category_id)])
                .await;
        }
        Ok(id)
    }

    /// Stores every product or none, then adjusts each category once by the
    /// number of products it received.
    #[instrument(skip(self, params), fields(count = params.len()))]
    pub async fn create_batch(
        &self,
        mut params: Vec<ProductCreate>,
    ) -> Result<Vec<ProductId>, ProductError> {
        let mut lookups: BTreeMap<CategoryId, (Option<String>, Option<String>)> = BTreeMap::new();
        for p in &params {
            if let Some(category_id) = &p.category_id {
                if p.category_slug.is_none() || p.category.is_none() {
                    lookups.entry(category_id.clone()).or_default();
                }
            }
        }
        for (category_id, (slug, name)) in lookups.iter_mut() {
            self.fill_category_fields(category_id, slug, name).await;
        }
        for p in params.iter_mut() {
            if let Some((slug, name)) = p.category_id.as_ref().and_then(|c| lookups.get(c)) {
                if p.category_slug.is_none() {
                    p.category_slug = slug.clone();
                }
                if p.category.is_none() {
                    p.category = name.clone();
                }
            }
        }

        let mut per_category: BTreeMap<CategoryId, i64> = BTreeMap::new();
        for category_id in params.iter().filter_map(|p| p.category_id.clone()) {
            *per_category.entry(category_id).or_default() += 1;
        }

        debug!("Sending request");
        let ids = self
            .inner
            .create_batch(params)
            .await
            .map_err(Self::map_error)?;
        info!(written = ids.len(), "Product batch committed");

        let adjustments: Vec<CounterAdjustment> = per_category
            .into_iter()
            .map(|(category_id, delta)| CounterAdjustment::new(category_id, delta))
            .collect();
        self.apply_adjustments(&adjustments).await;
        Ok(ids)
    }

    /// Applies a partial update. When the category changes, the old category is
    /// decremented and the new one incremented after the update is stored.
    /// The category slug and name come from the update or from the new category;
    /// when neither has them they are cleared.
    #[instrument(skip(self, update))]
    pub async fn update_product(
        &self,
        id: ProductId,
        mut update: ProductUpdate,
    ) -> Result<Product, ProductError> {
        let current = self
            .get(id)
            .await?
            .ok_or_else(|| ProductError::NotFound(id.to_string()))?;

        let mut adjustments = Vec::new();
        if let Some(new_category) = update.category_id.clone() {
            if current.category_id.as_ref() != Some(&new_category) {
                self.fill_category_fields(
                    &new_category,
                    &mut update.category_slug,
                    &mut update.category,
                )
                .await;
                if let Some(old_category) = current.category_id {
                    adjustments.push(CounterAdjustment::decrement(old_category));
                }
                adjustments.push(CounterAdjustment::increment(new_category));
            }
        }

        debug!("Sending request");
        let updated = self
            .inner
            .update(id, update)
            .await
            .map_err(Self::map_error)?;
        self.apply_adjustments(&adjustments).await;
        Ok(updated)
    }

    /// Removes a product and decrements its category's counter.
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: ProductId) -> Result<Product, ProductError> {
        debug!("Sending request");
        let removed = self.inner.delete(id).await.map_err(Self::map_error)?;
        info!(%id, "Product deleted");

        if let Some(category_id) = removed.category_id.clone() {
            self.apply_adjustments(&[CounterAdjustment::decrement(category_id)])
                .await;
        }
        Ok(removed)
    }

    /// Counts one page view. Never fails; problems are only logged.
    #[instrument(skip(self))]
    pub async fn increment_views(&self, id: ProductId) {
        match self
            .inner
            .perform_action(id, ProductAction::IncrementViews)
            .await
        {
            Ok(ProductActionResult::IncrementViews(views)) => debug!(views, "View counted"),
            Ok(other) => warn!(?other, "Unexpected action result"),
            Err(e) => warn!(error = %e, "Failed to count view"),
        }
    }

    #[instrument(skip(self))]
    pub async fn toggle_status(&self, id: ProductId, is_active: bool) -> Result<(), ProductError> {
        match self
            .inner
            .perform_action(id, ProductAction::SetActive(is_active))
            .await
        {
            Ok(ProductActionResult::SetActive(())) => Ok(()),
            Ok(other) => Err(unexpected(other)),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    #[instrument(skip(self))]
    pub async fn toggle_featured(
        &self,
        id: ProductId,
        is_featured: bool,
    ) -> Result<(), ProductError> {
        match self
            .inner
            .perform_action(id, ProductAction::SetFeatured(is_featured))
            .await
        {
            Ok(ProductActionResult::SetFeatured(())) => Ok(()),
            Ok(other) => Err(unexpected(other)),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Every product, name ascending.
    pub async fn get_all(&self) -> Result<Vec<Product>, ProductError> {
        let mut products = self.list().await?;
        sort_products(&mut products, SortSpec::new(SortKey::Name));
        Ok(products)
    }

    pub async fn get_by_id(&self, id: ProductId) -> Result<Option<Product>, ProductError> {
        self.get(id).await
    }

    /// First product (in id order) with this slug.
    pub async fn get_by_slug(&self, slug: &str) -> Result<Option<Product>, ProductError> {
        Ok(self.list().await?.into_iter().find(|p| p.slug == slug))
    }

    /// Sends each adjustment to the category collection independently.
    ///
    /// Returns the adjustments that could not be applied, so a caller can retry
    /// exactly those.
    pub async fn apply_adjustments(&self, adjustments: &[CounterAdjustment]) -> Vec<CounterAdjustment> {
        let mut failed = Vec::new();
        for adjustment in adjustments.iter().filter(|a| a.delta != 0) {
            let category_id = &adjustment.category_id;
            match self
                .categories
                .adjust_product_count(category_id.clone(), adjustment.delta)
                .await
            {
                Ok(count) => debug!(%category_id, delta = adjustment.delta, count, "Counter adjusted"),
                Err(e) => {
                    warn!(%category_id, delta = adjustment.delta, error = %e, "Counter adjustment failed");
                    failed.push(adjustment.clone());
                }
            }
        }
        failed
    }

    async fn fill_category_fields(
        &self,
        category_id: &CategoryId,
        slug: &mut Option<String>,
        name: &mut Option<String>,
    ) {
        if slug.is_some() && name.is_some() {
            return;
        }
        match self.categories.get(category_id.clone()).await {
            Ok(Some(category)) => {
                slug.get_or_insert(category.slug);
                name.get_or_insert(category.name);
            }
            Ok(None) => warn!(%category_id, "Category not found, denormalized fields left unset"),
            Err(e) => warn!(%category_id, error = %e, "Category lookup failed"),
        }
    }
}

fn unexpected(result: ProductActionResult) -> ProductError {
    ProductError::ActorCommunicationError(format!("Unexpected action result: {:?}", result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category_actor::CategoryAction;
    use crate::model::Category;
    use resource_actor::mock::{create_mock_client, expect_action, MockClient};

    fn stored(id: u32, category: Option<&str>) -> Product {
        let mut draft = ProductCreate::new(format!("Produto {}", id));
        draft.category_id = category.map(CategoryId::from);
        draft.category_slug = category.map(String::from);
        draft.category = category.map(String::from);
        <Product as resource_actor::ActorEntity>::from_create_params(ProductId(id), draft).unwrap()
    }

    #[tokio::test]
    async fn test_delete_decrements_category() {
        let mut products = MockClient::<Product>::new();
        let (categories, mut receiver) = create_mock_client::<Category>(10);
        let client = ProductClient::new(products.client(), CategoryClient::new(categories));

        products
            .expect_delete(ProductId(1))
            .return_ok(stored(1, Some("cat1")));

        let task = tokio::spawn(async move { client.delete_product(ProductId(1)).await });

        let (id, action, responder) = expect_action(&mut receiver).await.unwrap();
        assert_eq!(id, CategoryId::from("cat1"));
        assert_eq!(action, CategoryAction::AdjustProductCount(-1));
        responder.send(Ok(0)).unwrap();

        let removed = task.await.unwrap().unwrap();
        assert_eq!(removed.id, ProductId(1));
        assert!(receiver.try_recv().is_err());
        products.verify();
    }

    #[tokio::test]
    async fn test_counter_failure_does_not_fail_create() {
        let mut products = MockClient::<Product>::new();
        let mut categories = MockClient::<Category>::new();
        let client = ProductClient::new(products.client(), CategoryClient::new(categories.client()));

        categories
            .expect_get(CategoryId::from("cat1"))
            .return_err(FrameworkError::ActorClosed);
        products.expect_create().return_ok(ProductId(7));
        categories
            .expect_action(CategoryId::from("cat1"))
            .return_err(FrameworkError::ActorClosed);

        let id = client
            .create_product(ProductCreate::new("Nuvemshop").with_category(CategoryId::from("cat1")))
            .await
            .unwrap();
        assert_eq!(id, ProductId(7));
        products.verify();
        categories.verify();
    }

    #[tokio::test]
    async fn test_update_of_missing_product_is_not_found() {
        let mut products = MockClient::<Product>::new();
        let categories = MockClient::<Category>::new();
        let client = ProductClient::new(products.client(), CategoryClient::new(categories.client()));

        products.expect_get(ProductId(9)).return_ok(None);

        let err = client
            .update_product(ProductId(9), ProductUpdate::default())
            .await
            .unwrap_err();
        assert_eq!(err, ProductError::NotFound("product_9".into()));
        assert_eq!(err.to_string(), "Product not found: product_9");
        products.verify();
    }

    #[tokio::test]
    async fn test_increment_views_swallows_errors() {
        let mut products = MockClient::<Product>::new();
        let categories = MockClient::<Category>::new();
        let client = ProductClient::new(products.client(), CategoryClient::new(categories.client()));

        products
            .expect_action(ProductId(3))
            .return_err(FrameworkError::NotFound("product_3".into()));

        client.increment_views(ProductId(3)).await;
        products.verify();
    }

    #[tokio::test]
    async fn test_failed_adjustments_are_returned() {
        let products = MockClient::<Product>::new();
        let (categories, mut receiver) = create_mock_client::<Category>(10);
        let client = ProductClient::new(products.client(), CategoryClient::new(categories));

        let task = tokio::spawn(async move {
            client
                .apply_adjustments(&[
                    CounterAdjustment::decrement(CategoryId::from("old")),
                    CounterAdjustment::new(CategoryId::from("noop"), 0),
                    CounterAdjustment::increment(CategoryId::from("new")),
                ])
                .await
        });

        let (id, action, responder) = expect_action(&mut receiver).await.unwrap();
        assert_eq!(id, CategoryId::from("old"));
        assert_eq!(action, CategoryAction::AdjustProductCount(-1));
        responder.send(Ok(0)).unwrap();

        let (id, action, responder) = expect_action(&mut receiver).await.unwrap();
        assert_eq!(id, CategoryId::from("new"));
        assert_eq!(action, CategoryAction::AdjustProductCount(1));
        responder
            .send(Err(FrameworkError::NotFound("new".into())))
            .unwrap();

        let failed = task.await.unwrap();
        assert_eq!(failed, vec![CounterAdjustment::increment(CategoryId::from("new"))]);
    }
}
