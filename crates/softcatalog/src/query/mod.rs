//! In-memory filtering and sorting over a product snapshot.
//!
//! Nothing here talks to a collection: callers fetch the snapshot
//! ([`ProductClient::get_all`](crate::clients::ProductClient::get_all)) and
//! re-fetch after writes.

pub mod filter;
pub mod sort;

pub use filter::*;
pub use sort::*;

use crate::model::Product;

/// Filters, then sorts when a [`SortSpec`] is given.
pub fn query_products(
    products: &[Product],
    filter: &ProductFilter,
    sort: Option<SortSpec>,
) -> Vec<Product> {
    let mut result = filter_products(products, filter);
    if let Some(spec) = sort {
        sort_products(&mut result, spec);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CategoryId, ProductCreate, ProductId, ProductLocation};
    use chrono::{TimeZone, Utc};
    use resource_actor::ActorEntity;

    fn product(id: u32, name: &str, code: &str) -> Product {
        let mut draft = ProductCreate::new(name);
        draft.location = ProductLocation {
            country_code: code.to_string(),
            ..ProductLocation::default()
        };
        Product::from_create_params(ProductId(id), draft).unwrap()
    }

    fn names(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.name.as_str()).collect()
    }

    fn catalog() -> Vec<Product> {
        let mut a = product(1, "Zoho", "IN");
        a.tags = vec!["CRM".into()];
        a.rating = Some(4.0);
        a.category = Some("Vendas".into());
        a.created_at = Some(Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap());

        let mut b = product(2, "Agendor", "BR");
        b.description = "crm brasileiro para pequenas empresas".into();
        b.category_id = Some(CategoryId::from("cat1"));
        b.category_slug = Some("vendas".into());
        b.category = Some("Vendas".into());
        b.is_featured = true;
        b.created_at = None;

        let mut c = product(3, "Ábaco", "BR");
        c.is_active = false;
        c.rating = Some(4.0);
        c.features = vec!["Nota fiscal".into()];
        c.category = Some("Contabilidade".into());
        c.created_at = Some(Utc.with_ymd_and_hms(2023, 5, 1, 0, 0, 0).unwrap());

        let mut d = product(4, "Slack", "XX");
        d.rating = Some(4.8);
        d.created_at = Some(Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap());

        vec![a, b, c, d]
    }

    #[test]
    fn test_origin_filter_uses_country_code_only() {
        let all = catalog();
        let br = filter_products(&all, &ProductFilter::default().only_brazilian());
        assert_eq!(names(&br), vec!["Agendor", "Ábaco"]);
        assert!(br.iter().all(|p| p.location.country_code == "BR"));

        let foreign = filter_products(&all, &ProductFilter::default().only_foreign());
        assert_eq!(names(&foreign), vec!["Zoho", "Slack"]);
    }

    #[test]
    fn test_search_spans_fields_case_insensitively() {
        let all = catalog();
        let hits = filter_products(&all, &ProductFilter::default().search("CRM"));
        assert_eq!(names(&hits), vec!["Zoho", "Agendor"]);

        let hits = filter_products(&all, &ProductFilter::default().search("nota FISCAL"));
        assert_eq!(names(&hits), vec!["Ábaco"]);

        let hits = filter_products(&all, &ProductFilter::default().search("   "));
        assert_eq!(hits.len(), 4);
    }

    #[test]
    fn test_filters_compose() {
        let all = catalog();
        let by_slug = filter_products(&all, &ProductFilter::default().in_category("vendas"));
        let by_id = filter_products(&all, &ProductFilter::default().in_category("cat1"));
        assert_eq!(names(&by_slug), vec!["Agendor"]);
        assert_eq!(by_id, by_slug);

        let active_br = filter_products(&all, &ProductFilter::default().only_brazilian().active());
        assert_eq!(names(&active_br), vec!["Agendor"]);

        let featured = filter_products(&all, &ProductFilter::default().featured());
        assert_eq!(names(&featured), vec!["Agendor"]);
    }

    #[test]
    fn test_sort_by_name_ignores_accents() {
        let sorted = query_products(&catalog(), &ProductFilter::default(), Some(SortSpec::new(SortKey::Name)));
        assert_eq!(names(&sorted), vec!["Ábaco", "Agendor", "Slack", "Zoho"]);

        let desc = query_products(
            &catalog(),
            &ProductFilter::default(),
            Some(SortSpec::new(SortKey::Name).with_direction(SortDirection::Desc)),
        );
        assert_eq!(names(&desc), vec!["Zoho", "Slack", "Agendor", "Ábaco"]);
    }

    #[test]
    fn test_rating_sort_is_stable_and_descending() {
        let sorted = query_products(&catalog(), &ProductFilter::default(), Some(SortSpec::new(SortKey::Rating)));
        assert_eq!(names(&sorted), vec!["Slack", "Zoho", "Ábaco", "Agendor"]);
    }

    #[test]
    fn test_newest_puts_missing_dates_last() {
        let sorted = query_products(&catalog(), &ProductFilter::default(), Some(SortSpec::new(SortKey::Newest)));
        assert_eq!(names(&sorted), vec!["Ábaco", "Slack", "Zoho", "Agendor"]);
    }

    #[test]
    fn test_category_sort() {
        let sorted = query_products(&catalog(), &ProductFilter::default(), Some(SortSpec::new(SortKey::Category)));
        assert_eq!(names(&sorted), vec!["Slack", "Ábaco", "Zoho", "Agendor"]);
    }
}
