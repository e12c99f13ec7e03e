//! URL construction helpers for the inventory API.
//!
//! Pure functions over the configured API root, so every request path is
//! built the same way.

use hamster_core::ComponentQuery;
use url::Url;

/// Append `tail` to the base path, keeping the host and any prefix.
fn endpoint(base: &Url, tail: &str) -> Url {
    let mut url = base.clone();
    let base_path = url.path().trim_end_matches('/');
    url.set_path(&format!("{base_path}/{tail}"));
    url.set_query(None);
    url
}

pub fn categories_url(base: &Url) -> Url {
    endpoint(base, "categories")
}

pub fn category_url(base: &Url, id: i64) -> Url {
    endpoint(base, &format!("categories/{id}"))
}

pub fn components_root_url(base: &Url) -> Url {
    endpoint(base, "components")
}

/// Component listing with pagination and optional filters.
///
/// The keyword is percent-encoded; a missing filter is left out entirely.
pub fn components_url(base: &Url, query: &ComponentQuery) -> Url {
    let mut url = components_root_url(base);
    let mut query_string = format!("page={}&page_size={}", query.page, query.page_size);
    if let Some(ref keyword) = query.keyword {
        query_string.push_str(&format!("&keyword={}", urlencoding::encode(keyword)));
    }
    if let Some(category_id) = query.category_id {
        query_string.push_str(&format!("&category_id={category_id}"));
    }
    url.set_query(Some(&query_string));
    url
}

pub fn component_url(base: &Url, id: i64) -> Url {
    endpoint(base, &format!("components/{id}"))
}

pub fn component_stock_url(base: &Url, id: i64) -> Url {
    endpoint(base, &format!("components/{id}/stock"))
}

pub fn component_logs_url(base: &Url, id: i64, limit: Option<u32>) -> Url {
    let mut url = endpoint(base, &format!("components/{id}/logs"));
    if let Some(limit) = limit {
        url.set_query(Some(&format!("limit={limit}")));
    }
    url
}

pub fn component_image_url(base: &Url, id: i64) -> Url {
    endpoint(base, &format!("components/{id}/image"))
}

/// Image URL with a `t` timestamp so caches never serve a replaced image.
pub fn cache_busted_image_url(base: &Url, id: i64, millis: i64) -> Url {
    let mut url = component_image_url(base, id);
    url.set_query(Some(&format!("t={millis}")));
    url
}

pub fn parse_url(base: &Url) -> Url {
    endpoint(base, "components/parse")
}

pub fn parse_qrcode_url(base: &Url) -> Url {
    endpoint(base, "components/parse-qrcode")
}

pub fn stock_logs_url(base: &Url, page: u32, page_size: u32) -> Url {
    let mut url = endpoint(base, "stock-logs");
    url.set_query(Some(&format!("page={page}&page_size={page_size}")));
    url
}

pub fn platforms_url(base: &Url) -> Url {
    endpoint(base, "platforms")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("http://localhost:8080/api/v1").unwrap()
    }

    #[test]
    fn test_endpoint_keeps_prefix() {
        assert_eq!(
            categories_url(&base()).as_str(),
            "http://localhost:8080/api/v1/categories"
        );

        let trailing = Url::parse("http://inventory.lan/api/v1/").unwrap();
        assert_eq!(
            category_url(&trailing, 4).as_str(),
            "http://inventory.lan/api/v1/categories/4"
        );
    }

    #[test]
    fn test_components_url_without_filters() {
        let url = components_url(&base(), &ComponentQuery::new());
        assert_eq!(
            url.as_str(),
            "http://localhost:8080/api/v1/components?page=1&page_size=20"
        );
    }

    #[test]
    fn test_components_url_encodes_keyword() {
        let query = ComponentQuery::new()
            .with_page(3)
            .with_keyword(Some("10k 0603".to_string()))
            .with_category(Some(2));
        let url = components_url(&base(), &query);

        assert_eq!(
            url.query(),
            Some("page=3&page_size=20&keyword=10k%200603&category_id=2")
        );
    }

    #[test]
    fn test_component_subresources() {
        assert_eq!(
            component_stock_url(&base(), 7).path(),
            "/api/v1/components/7/stock"
        );
        assert_eq!(
            component_logs_url(&base(), 7, Some(10)).as_str(),
            "http://localhost:8080/api/v1/components/7/logs?limit=10"
        );
        assert_eq!(component_logs_url(&base(), 7, None).query(), None);
        assert_eq!(
            cache_busted_image_url(&base(), 7, 1_700_000_000_000).as_str(),
            "http://localhost:8080/api/v1/components/7/image?t=1700000000000"
        );
    }

    #[test]
    fn test_parse_and_history_urls() {
        assert_eq!(parse_url(&base()).path(), "/api/v1/components/parse");
        assert_eq!(
            parse_qrcode_url(&base()).path(),
            "/api/v1/components/parse-qrcode"
        );
        assert_eq!(
            stock_logs_url(&base(), 2, 50).query(),
            Some("page=2&page_size=50")
        );
        assert_eq!(platforms_url(&base()).path(), "/api/v1/platforms");
    }
}
