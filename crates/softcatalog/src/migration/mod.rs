//! # Migration Batch Runner
//!
//! Moves every document from the two legacy sources into the product
//! collection.
//!
//! 1. Read both sources. A source that cannot be read is logged and treated as
//!    empty; the other source still migrates.
//! 2. Normalize each document with the origin of the source it came from.
//! 3. Give colliding slugs within the run `-2`, `-3`, ... suffixes.
//! 4. Write everything in one all-or-nothing batch. A rejected or failed batch
//!    fails the run and nothing is stored.
//!
//! The legacy sources are left untouched. Removing them is a separate call,
//! [`MigrationRunner::purge_legacy_sources`].
use serde::Serialize;
use std::collections::HashSet;
use thiserror::Error;
use tracing::{info, instrument, warn};

use crate::clients::{LegacyClient, ProductClient};
use crate::legacy_actor::LegacyError;
use crate::model::{LegacyProduct, Origin, ProductCreate};
use crate::normalize::{dedupe_slug, Normalizer};
use crate::product_actor::ProductError;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum MigrationError {
    #[error("Batch write failed: {0}")]
    BatchWrite(#[source] ProductError),

    #[error("Purging legacy sources failed: {0}")]
    Purge(#[source] LegacyError),
}

/// Outcome of one [`MigrationRunner::migrate`] run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MigrationReport {
    pub brazilian_read: usize,
    pub foreign_read: usize,
    pub written: usize,
    /// `written / (brazilian_read + foreign_read)`, `0.0` when nothing was read.
    pub success_ratio: f64,
}

impl MigrationReport {
    pub fn new(brazilian_read: usize, foreign_read: usize, written: usize) -> Self {
        let read = brazilian_read + foreign_read;
        let success_ratio = if read == 0 {
            0.0
        } else {
            written as f64 / read as f64
        };
        Self {
            brazilian_read,
            foreign_read,
            written,
            success_ratio,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PurgeReport {
    pub brazilian_removed: usize,
    pub foreign_removed: usize,
}

pub struct MigrationRunner {
    brazilian: LegacyClient,
    foreign: LegacyClient,
    products: ProductClient,
    normalizer: Normalizer,
}

impl MigrationRunner {
    pub fn new(
        brazilian: LegacyClient,
        foreign: LegacyClient,
        products: ProductClient,
        normalizer: Normalizer,
    ) -> Self {
        Self {
            brazilian,
            foreign,
            products,
            normalizer,
        }
    }

    #[instrument(skip(self))]
    pub async fn migrate(&self) -> Result<MigrationReport, MigrationError> {
        let brazilian = read_or_empty(&self.brazilian, Origin::Brazilian).await;
        let foreign = read_or_empty(&self.foreign, Origin::Foreign).await;
        info!(
            brazilian = brazilian.len(),
            foreign = foreign.len(),
            "Legacy documents read"
        );

        let drafts = self.prepare(&brazilian, &foreign);
        let written = if drafts.is_empty() {
            0
        } else {
            self.products
                .create_batch(drafts)
                .await
                .map_err(MigrationError::BatchWrite)?
                .len()
        };

        let report = MigrationReport::new(brazilian.len(), foreign.len(), written);
        info!(
            written = report.written,
            success_ratio = report.success_ratio,
            "Migration finished"
        );
        Ok(report)
    }

    /// Normalized drafts with slugs unique within this run.
    pub fn prepare(&self, brazilian: &[LegacyProduct], foreign: &[LegacyProduct]) -> Vec<ProductCreate> {
        let mut taken = HashSet::new();
        brazilian
            .iter()
            .map(|doc| (doc, Origin::Brazilian))
            .chain(foreign.iter().map(|doc| (doc, Origin::Foreign)))
            .map(|(doc, origin)| {
                let mut draft = self.normalizer.normalize(doc, origin);
                draft.slug = dedupe_slug(&draft.slug, &mut taken);
                draft
            })
            .collect()
    }

    /// Deletes every document from both legacy sources.
    #[instrument(skip(self))]
    pub async fn purge_legacy_sources(&self) -> Result<PurgeReport, MigrationError> {
        let brazilian_removed = self.brazilian.purge().await.map_err(MigrationError::Purge)?;
        let foreign_removed = self.foreign.purge().await.map_err(MigrationError::Purge)?;
        info!(brazilian_removed, foreign_removed, "Legacy sources purged");
        Ok(PurgeReport {
            brazilian_removed,
            foreign_removed,
        })
    }
}

async fn read_or_empty(source: &LegacyClient, origin: Origin) -> Vec<LegacyProduct> {
    match source.read_all().await {
        Ok(docs) => docs,
        Err(e) => {
            warn!(?origin, error = %e, "Legacy source unreadable, treating it as empty");
            Vec::new()
        }
    }
}
