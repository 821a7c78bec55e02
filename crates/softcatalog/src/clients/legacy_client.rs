//! # Legacy Source Client
//!
//! Read access to one legacy collection plus the explicit purge.
use crate::legacy_actor::LegacyError;
use crate::model::{LegacyId, LegacyProduct, LegacyRecord};
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, info, instrument};

#[derive(Clone)]
pub struct LegacyClient {
    inner: ResourceClient<LegacyRecord>,
}

impl LegacyClient {
    pub fn new(inner: ResourceClient<LegacyRecord>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<LegacyRecord> for LegacyClient {
    type Error = LegacyError;

    fn inner(&self) -> &ResourceClient<LegacyRecord> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        LegacyError::from(e)
    }
}

impl LegacyClient {
    #[instrument(skip(self, doc))]
    pub async fn insert(&self, doc: LegacyProduct) -> Result<LegacyId, LegacyError> {
        debug!("Sending request");
        self.inner.create(doc).await.map_err(Self::map_error)
    }

    #[instrument(skip(self, docs), fields(count = docs.len()))]
    pub async fn insert_many(&self, docs: Vec<LegacyProduct>) -> Result<Vec<LegacyId>, LegacyError> {
        debug!("Sending request");
        self.inner.create_batch(docs).await.map_err(Self::map_error)
    }

    /// Parses raw JSON documents and inserts them; one bad document rejects all.
    pub async fn insert_json(&self, raw: &[&str]) -> Result<Vec<LegacyId>, LegacyError> {
        let docs = raw
            .iter()
            .map(|doc| LegacyProduct::from_json(doc))
            .collect::<Result<Vec<_>, _>>()?;
        self.insert_many(docs).await
    }

    /// Every document in the collection, in insertion order.
    #[instrument(skip(self))]
    pub async fn read_all(&self) -> Result<Vec<LegacyProduct>, LegacyError> {
        let records = self.list().await?;
        Ok(records.into_iter().map(|record| record.data).collect())
    }

    /// Deletes every record and returns how many were removed.
    #[instrument(skip(self))]
    pub async fn purge(&self) -> Result<usize, LegacyError> {
        let records = self.list().await?;
        let mut removed = 0;
        for record in records {
            self.inner
                .delete(record.id)
                .await
                .map_err(Self::map_error)?;
            removed += 1;
        }
        info!(removed, "Legacy source purged");
        Ok(removed)
    }
}
