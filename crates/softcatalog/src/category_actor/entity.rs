//! [`ActorEntity`] implementation for [`Category`].

use super::actions::CategoryAction;
use super::error::CategoryError;
use crate::model::{Category, CategoryCreate, CategoryId, CategoryUpdate};
use crate::normalize::slugify;
use async_trait::async_trait;
use chrono::Utc;
use resource_actor::ActorEntity;

impl Category {
    /// `max(0, product_count + delta)`.
    pub fn adjusted_count(&self, delta: i64) -> u64 {
        let current = i64::try_from(self.product_count).unwrap_or(i64::MAX);
        current.saturating_add(delta).max(0) as u64
    }
}

#[async_trait]
impl ActorEntity for Category {
    type Id = CategoryId;
    type Create = CategoryCreate;
    type Update = CategoryUpdate;
    type Action = CategoryAction;
    /// The `product_count` after the action.
    type ActionResult = u64;
    type Context = ();
    type Error = CategoryError;

    fn from_create_params(id: CategoryId, params: CategoryCreate) -> Result<Self, Self::Error> {
        let now = Utc::now();
        let slug = if params.slug.is_empty() {
            slugify(&params.name)
        } else {
            params.slug
        };
        Ok(Self {
            id,
            name: params.name,
            slug,
            description: params.description,
            icon: params.icon,
            product_count: 0,
            created_at: now,
            updated_at: now,
        })
    }

    async fn on_update(&mut self, update: CategoryUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(slug) = update.slug {
            self.slug = slug;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if update.icon.is_some() {
            self.icon = update.icon;
        }
        self.updated_at = Utc::now();
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: CategoryAction,
        _ctx: &(),
    ) -> Result<u64, Self::Error> {
        self.product_count = match action {
            CategoryAction::AdjustProductCount(delta) => self.adjusted_count(delta),
            CategoryAction::SetProductCount(count) => count,
        };
        self.updated_at = Utc::now();
        Ok(self.product_count)
    }
}
