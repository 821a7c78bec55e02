//! The canonical product record and its value types.
//!
//! # Actor Framework
//! [`Product`] implements [`ActorEntity`](resource_actor::ActorEntity) (see
//! [`crate::product_actor::entity`]) so the product collection is served by a
//! [`ResourceActor`](resource_actor::ResourceActor).
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

use crate::model::CategoryId;

/// Country code of the one country that counts as "Brazilian".
pub const BRAZIL_CODE: &str = "BR";
/// Country code used when the country could not be determined.
pub const UNKNOWN_COUNTRY_CODE: &str = "XX";
/// Country name used when the location string is empty.
pub const UNKNOWN_COUNTRY: &str = "Desconhecido";

/// Type-safe identifier for Products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProductId(pub u32);

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "product_{}", self.0)
    }
}

/// Whether a product is Brazilian or foreign.
///
/// Derived from [`ProductLocation::country_code`] alone: `"BR"` is Brazilian,
/// anything else (including `"XX"`) is foreign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    Brazilian,
    Foreign,
}

impl Origin {
    pub fn is_brazilian(self) -> bool {
        matches!(self, Origin::Brazilian)
    }
}

impl From<bool> for Origin {
    fn from(is_brazilian: bool) -> Self {
        if is_brazilian {
            Origin::Brazilian
        } else {
            Origin::Foreign
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductLocation {
    pub country: String,
    /// Two-letter code, `"XX"` when unknown.
    pub country_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flag: Option<String>,
}

impl ProductLocation {
    pub fn origin(&self) -> Origin {
        Origin::from(self.country_code == BRAZIL_CODE)
    }
}

impl Default for ProductLocation {
    fn default() -> Self {
        Self {
            country: UNKNOWN_COUNTRY.to_string(),
            country_code: UNKNOWN_COUNTRY_CODE.to_string(),
            state: None,
            city: None,
            flag: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompanySize {
    Startup,
    Small,
    Medium,
    Large,
    Enterprise,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyInfo {
    #[serde(default)]
    pub founded_year: Option<i32>,
    #[serde(default)]
    pub headquarters: Option<String>,
    #[serde(default)]
    pub size: Option<CompanySize>,
    #[serde(default)]
    pub employees: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PricingType {
    #[default]
    Free,
    Freemium,
    Paid,
    Enterprise,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingPlan {
    pub name: String,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub period: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingInfo {
    #[serde(rename = "type")]
    pub pricing_type: PricingType,
    #[serde(default)]
    pub starting_price: Option<f64>,
    pub currency: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub plans: Option<Vec<PricingPlan>>,
}

impl Default for PricingInfo {
    fn default() -> Self {
        Self {
            pricing_type: PricingType::Free,
            starting_price: None,
            currency: "BRL".to_string(),
            description: String::new(),
            plans: None,
        }
    }
}

/// A catalogued software product.
///
/// `category_id`, `category_slug` and `category` are denormalized copies of the
/// owning category and change together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub slug: String,
    pub name: String,
    pub description: String,
    pub short_description: String,
    pub logo: String,
    pub website: String,
    pub location: ProductLocation,
    pub company_info: CompanyInfo,
    pub pricing: PricingInfo,
    pub features: Vec<String>,
    pub tags: Vec<String>,
    pub screenshots: Vec<String>,
    pub is_active: bool,
    pub is_featured: bool,
    pub is_unicorn: bool,
    /// Soft references to other products, by id or name.
    pub alternatives: Vec<String>,
    pub alternative_to: Vec<String>,
    pub views: u64,
    pub rating: Option<f64>,
    pub category_id: Option<CategoryId>,
    pub category_slug: Option<String>,
    pub category: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Product {
    pub fn origin(&self) -> Origin {
        self.location.origin()
    }

    pub fn is_brazilian(&self) -> bool {
        self.origin().is_brazilian()
    }
}

/// A product that has not been stored yet: every [`Product`] field except `id`.
///
/// This is what the record normalizer produces and what admin callers submit.
/// Empty `slug`/`short_description` and absent timestamps are filled in by the
/// store when the record is created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductCreate {
    pub slug: String,
    pub name: String,
    pub description: String,
    pub short_description: String,
    pub logo: String,
    pub website: String,
    pub location: ProductLocation,
    pub company_info: CompanyInfo,
    pub pricing: PricingInfo,
    pub features: Vec<String>,
    pub tags: Vec<String>,
    pub screenshots: Vec<String>,
    pub is_active: bool,
    pub is_featured: bool,
    pub is_unicorn: bool,
    pub alternatives: Vec<String>,
    pub alternative_to: Vec<String>,
    pub views: u64,
    pub rating: Option<f64>,
    pub category_id: Option<CategoryId>,
    pub category_slug: Option<String>,
    pub category: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Default for ProductCreate {
    fn default() -> Self {
        Self {
            slug: String::new(),
            name: String::new(),
            description: String::new(),
            short_description: String::new(),
            logo: String::new(),
            website: String::new(),
            location: ProductLocation::default(),
            company_info: CompanyInfo::default(),
            pricing: PricingInfo::default(),
            features: Vec::new(),
            tags: Vec::new(),
            screenshots: Vec::new(),
            is_active: true,
            is_featured: false,
            is_unicorn: false,
            alternatives: Vec::new(),
            alternative_to: Vec::new(),
            views: 0,
            rating: None,
            category_id: None,
            category_slug: None,
            category: None,
            created_at: None,
            updated_at: None,
        }
    }
}

impl ProductCreate {
    /// Starts a draft with defaults for everything but the name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_category(mut self, category_id: CategoryId) -> Self {
        self.category_id = Some(category_id);
        self
    }
}

/// Partial update; `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductUpdate {
    pub slug: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub short_description: Option<String>,
    pub logo: Option<String>,
    pub website: Option<String>,
    pub location: Option<ProductLocation>,
    pub company_info: Option<CompanyInfo>,
    pub pricing: Option<PricingInfo>,
    pub features: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
    pub screenshots: Option<Vec<String>>,
    pub is_active: Option<bool>,
    pub is_featured: Option<bool>,
    pub is_unicorn: Option<bool>,
    pub alternatives: Option<Vec<String>>,
    pub alternative_to: Option<Vec<String>>,
    pub rating: Option<f64>,
    pub category_id: Option<CategoryId>,
    pub category_slug: Option<String>,
    pub category: Option<String>,
}
