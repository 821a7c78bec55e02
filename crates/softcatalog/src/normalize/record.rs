//! Legacy document to canonical product draft.
use chrono::Utc;

use super::extract::{
    extract_city, extract_country, extract_country_code, extract_state, infer_company_size,
    infer_pricing_type, CountryCodes,
};
use super::slug::slugify;
use crate::config::CatalogConfig;
use crate::model::{
    CategoryId, CompanyInfo, LegacyProduct, Origin, PricingInfo, ProductCreate, ProductLocation,
    BRAZIL_CODE,
};

pub const BRAZIL_COUNTRY: &str = "Brasil";
pub const BRAZIL_FLAG: &str = "🇧🇷";
pub const FOREIGN_FLAG: &str = "🌍";
/// Slug for records whose name yields no slug characters at all.
pub const FALLBACK_SLUG: &str = "sem-nome";

/// Truncates to `max_chars` characters, appending `...` when anything was cut.
pub fn short_description(description: &str, max_chars: usize) -> String {
    match description.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &description[..cut]),
        None => description.to_string(),
    }
}

/// Converts [`LegacyProduct`] documents into [`ProductCreate`] drafts.
///
/// Total: every well-typed document, including the empty one, yields a draft.
#[derive(Debug, Clone)]
pub struct Normalizer {
    codes: CountryCodes,
    short_description_len: usize,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(CountryCodes::default(), 150)
    }
}

impl Normalizer {
    pub fn new(codes: CountryCodes, short_description_len: usize) -> Self {
        Self {
            codes,
            short_description_len,
        }
    }

    pub fn from_config(config: &CatalogConfig) -> Self {
        Self::new(config.country_codes(), config.short_description_len)
    }

    pub fn country_codes(&self) -> &CountryCodes {
        &self.codes
    }

    fn location(&self, raw: Option<&str>, origin: Origin) -> ProductLocation {
        match origin {
            Origin::Brazilian => ProductLocation {
                country: BRAZIL_COUNTRY.to_string(),
                country_code: BRAZIL_CODE.to_string(),
                state: extract_state(raw),
                city: extract_city(raw),
                flag: Some(BRAZIL_FLAG.to_string()),
            },
            Origin::Foreign => ProductLocation {
                country: extract_country(raw),
                country_code: extract_country_code(raw, &self.codes),
                state: None,
                city: None,
                flag: Some(FOREIGN_FLAG.to_string()),
            },
        }
    }

    /// Builds the canonical draft for one legacy document.
    ///
    /// `origin` comes from the source collection the document was read from,
    /// not from its own location text.
    pub fn normalize(&self, legacy: &LegacyProduct, origin: Origin) -> ProductCreate {
        let legacy = legacy.clone().sanitized();
        let now = Utc::now();

        let name = legacy.name.clone().unwrap_or_default();
        let description = legacy.description.clone().unwrap_or_default();
        let slug = legacy
            .slug
            .as_deref()
            .map(slugify)
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| slugify(&name));
        let slug = if slug.is_empty() {
            FALLBACK_SLUG.to_string()
        } else {
            slug
        };

        let short = legacy
            .short_description
            .clone()
            .unwrap_or_else(|| short_description(&description, self.short_description_len));

        let default_currency = match origin {
            Origin::Brazilian => "BRL",
            Origin::Foreign => "USD",
        };
        let pricing = PricingInfo {
            pricing_type: infer_pricing_type(&legacy),
            starting_price: legacy.price,
            currency: legacy
                .currency
                .clone()
                .unwrap_or_else(|| default_currency.to_string()),
            description: legacy.pricing_model.clone().unwrap_or_default(),
            plans: None,
        };

        let company_info = CompanyInfo {
            founded_year: legacy.founded_year,
            headquarters: legacy.headquarters.clone(),
            size: Some(infer_company_size(&legacy)),
            employees: legacy.employees.clone(),
            website: legacy.website.clone(),
        };

        let created_at = legacy.created_at.unwrap_or(now);
        let updated_at = legacy.updated_at.or(legacy.created_at).unwrap_or(now);

        ProductCreate {
            slug,
            location: self.location(legacy.location.as_deref(), origin),
            company_info,
            pricing,
            short_description: short,
            description,
            name,
            logo: legacy.logo.unwrap_or_default(),
            website: legacy.website.unwrap_or_default(),
            features: legacy.features.unwrap_or_default(),
            tags: legacy.tags.unwrap_or_default(),
            screenshots: legacy.screenshots.unwrap_or_default(),
            is_active: legacy.is_active.unwrap_or(true),
            is_featured: legacy.is_featured.unwrap_or(false),
            is_unicorn: legacy.is_unicorn.unwrap_or(false),
            alternatives: legacy.alternatives.or(legacy.substitutes).unwrap_or_default(),
            alternative_to: legacy.alternative_to.unwrap_or_default(),
            views: legacy.downloads.unwrap_or(0),
            rating: legacy.rating,
            category_id: legacy.category_id.map(CategoryId::from),
            category_slug: legacy.category_slug,
            category: legacy.category,
            created_at: Some(created_at),
            updated_at: Some(updated_at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CompanySize, PricingType};

    #[test]
    fn test_empty_document_gets_defaults() {
        let draft = Normalizer::default().normalize(&LegacyProduct::default(), Origin::Foreign);

        assert_eq!(draft.slug, FALLBACK_SLUG);
        assert!(draft.is_active);
        assert!(!draft.is_featured);
        assert!(!draft.is_unicorn);
        assert!(draft.features.is_empty());
        assert!(draft.tags.is_empty());
        assert!(draft.alternatives.is_empty());
        assert_eq!(draft.short_description, "");
        assert_eq!(draft.views, 0);
        assert_eq!(draft.location.country, "Desconhecido");
        assert_eq!(draft.location.country_code, "XX");
        assert_eq!(draft.pricing.pricing_type, PricingType::Free);
        assert_eq!(draft.company_info.size, Some(CompanySize::Startup));
        assert!(draft.created_at.is_some());
        assert_eq!(draft.created_at, draft.updated_at);
    }

    #[test]
    fn test_brazilian_location_is_forced() {
        let legacy = LegacyProduct {
            name: Some("Conta Azul".into()),
            location: Some("Joinville, SC, Alemanha".into()),
            ..Default::default()
        };
        let draft = Normalizer::default().normalize(&legacy, Origin::Brazilian);

        assert_eq!(draft.slug, "conta-azul");
        assert_eq!(draft.location.country, "Brasil");
        assert_eq!(draft.location.country_code, "BR");
        assert_eq!(draft.location.city.as_deref(), Some("Joinville"));
        assert_eq!(draft.location.state.as_deref(), Some("SC"));
        assert_eq!(draft.location.flag.as_deref(), Some("🇧🇷"));
        assert_eq!(draft.pricing.currency, "BRL");
    }

    #[test]
    fn test_foreign_location_is_inferred() {
        let legacy = LegacyProduct {
            name: Some("Slack".into()),
            location: Some("San Francisco, CA, Estados Unidos".into()),
            downloads: Some(5_000_000),
            substitutes: Some(vec!["Teams".into()]),
            ..Default::default()
        };
        let draft = Normalizer::default().normalize(&legacy, Origin::Foreign);

        assert_eq!(draft.location.country, "Estados Unidos");
        assert_eq!(draft.location.country_code, "US");
        assert_eq!(draft.location.state, None);
        assert_eq!(draft.location.city, None);
        assert_eq!(draft.location.flag.as_deref(), Some("🌍"));
        assert_eq!(draft.views, 5_000_000);
        assert_eq!(draft.alternatives, vec!["Teams".to_string()]);
        assert_eq!(draft.company_info.size, Some(CompanySize::Large));
        assert_eq!(draft.pricing.currency, "USD");
    }

    #[test]
    fn test_short_description_truncation() {
        let long = "á".repeat(200);
        let draft = Normalizer::default().normalize(
            &LegacyProduct {
                description: Some(long.clone()),
                ..Default::default()
            },
            Origin::Brazilian,
        );
        assert_eq!(draft.short_description.chars().count(), 153);
        assert!(draft.short_description.ends_with("..."));

        assert_eq!(short_description("curto", 150), "curto");
        assert_eq!(short_description(&"x".repeat(150), 150), "x".repeat(150));
    }

    #[test]
    fn test_legacy_values_win_over_defaults() {
        let legacy = LegacyProduct {
            name: Some("Nome Qualquer".into()),
            slug: Some("Slug-Legado".into()),
            short_description: Some("Resumo".into()),
            is_active: Some(false),
            category_id: Some("cat1".into()),
            ..Default::default()
        };
        let draft = Normalizer::default().normalize(&legacy, Origin::Brazilian);

        assert_eq!(draft.slug, "slug-legado");
        assert_eq!(draft.short_description, "Resumo");
        assert!(!draft.is_active);
        assert_eq!(draft.category_id, Some(CategoryId::from("cat1")));
    }
}
