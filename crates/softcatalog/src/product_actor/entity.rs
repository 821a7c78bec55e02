//! [`ActorEntity`] implementation for [`Product`].
//!
//! The store owns `id` and the timestamps: `created_at` is kept from the draft
//! when present (migrated records carry their legacy dates), `updated_at` is
//! bumped on every update and action.

use super::actions::{ProductAction, ProductActionResult};
use super::error::ProductError;
use crate::model::{Product, ProductCreate, ProductId, ProductUpdate};
use crate::normalize::{short_description, slugify};
use async_trait::async_trait;
use chrono::Utc;
use resource_actor::ActorEntity;

/// Settings the product collection applies when filling in missing fields.
#[derive(Debug, Clone)]
pub struct ProductContext {
    pub short_description_len: usize,
}

impl Default for ProductContext {
    fn default() -> Self {
        Self {
            short_description_len: 150,
        }
    }
}

#[async_trait]
impl ActorEntity for Product {
    type Id = ProductId;
    type Create = ProductCreate;
    type Update = ProductUpdate;
    type Action = ProductAction;
    type ActionResult = ProductActionResult;
    type Context = ProductContext;
    type Error = ProductError;

    fn from_create_params(id: ProductId, params: ProductCreate) -> Result<Self, Self::Error> {
        let now = Utc::now();
        let slug = if params.slug.is_empty() {
            slugify(&params.name)
        } else {
            params.slug
        };
        let created_at = params.created_at.unwrap_or(now);

        Ok(Self {
            id,
            slug,
            name: params.name,
            description: params.description,
            short_description: params.short_description,
            logo: params.logo,
            website: params.website,
            location: params.location,
            company_info: params.company_info,
            pricing: params.pricing,
            features: params.features,
            tags: params.tags,
            screenshots: params.screenshots,
            is_active: params.is_active,
            is_featured: params.is_featured,
            is_unicorn: params.is_unicorn,
            alternatives: params.alternatives,
            alternative_to: params.alternative_to,
            views: params.views,
            rating: params.rating,
            category_id: params.category_id,
            category_slug: params.category_slug,
            category: params.category,
            created_at: Some(created_at),
            updated_at: Some(params.updated_at.unwrap_or(created_at)),
        })
    }

    async fn on_create(&mut self, ctx: &ProductContext) -> Result<(), Self::Error> {
        if self.short_description.is_empty() {
            self.short_description = short_description(&self.description, ctx.short_description_len);
        }
        Ok(())
    }

    async fn on_update(
        &mut self,
        update: ProductUpdate,
        _ctx: &ProductContext,
    ) -> Result<(), Self::Error> {
        macro_rules! apply {
            ($($field:ident),* $(,)?) => {
                $(if let Some(value) = update.$field {
                    self.$field = value;
                })*
            };
        }
        apply!(
            slug,
            name,
            description,
            short_description,
            logo,
            website,
            location,
            company_info,
            pricing,
            features,
            tags,
            screenshots,
            is_active,
            is_featured,
            is_unicorn,
            alternatives,
            alternative_to,
        );
        if update.rating.is_some() {
            self.rating = update.rating;
        }
        let category_changed = update
            .category_id
            .as_ref()
            .is_some_and(|id| self.category_id.as_ref() != Some(id));
        if category_changed {
            // The three category copies move together; unset copies are cleared.
            self.category_id = update.category_id;
            self.category_slug = update.category_slug;
            self.category = update.category;
        } else {
            if update.category_slug.is_some() {
                self.category_slug = update.category_slug;
            }
            if update.category.is_some() {
                self.category = update.category;
            }
        }
        self.updated_at = Some(Utc::now());
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: ProductAction,
        _ctx: &ProductContext,
    ) -> Result<ProductActionResult, Self::Error> {
        let result = match action {
            ProductAction::IncrementViews => {
                self.views += 1;
                ProductActionResult::IncrementViews(self.views)
            }
            ProductAction::SetActive(is_active) => {
                self.is_active = is_active;
                ProductActionResult::SetActive(())
            }
            ProductAction::SetFeatured(is_featured) => {
                self.is_featured = is_featured;
                ProductActionResult::SetFeatured(())
            }
        };
        self.updated_at = Some(Utc::now());
        Ok(result)
    }
}
