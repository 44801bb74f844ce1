//! Utility functions and helpers.

pub mod http;

use url::Url;
use url::form_urlencoded::byte_serialize;

use crate::error::{AppError, Result};

/// Append path segments and query pairs to a base URL.
///
/// Segments are percent-encoded. An empty query leaves no trailing `?`.
pub fn endpoint(base: &Url, segments: &[&str], query: &[(&str, String)]) -> Result<Url> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| AppError::config(format!("Base URL cannot take a path: {}", base)))?
        .pop_if_empty()
        .extend(segments);

    url.set_query(None);
    if !query.is_empty() {
        url.query_pairs_mut()
            .extend_pairs(query.iter().map(|(k, v)| (*k, v.as_str())));
    }
    Ok(url)
}

/// Path segment for a keyword search, e.g. `developer-jobs-in-cambridge`.
pub fn keyword_segment(keyword: &str, region: &str) -> String {
    format!("{}-jobs-in-{}", keyword.trim(), region)
}

/// Site path for a free-text search term.
pub fn search_path(term: &str) -> Option<String> {
    let term = term.trim();
    if term.is_empty() {
        return None;
    }
    let encoded: String = byte_serialize(term.as_bytes()).collect();
    Some(format!("/jobs/{}", encoded.replace('+', "%20")))
}

/// Path and query of a URL, for log lines and error context.
pub fn display_path(url: &Url) -> String {
    match url.query() {
        Some(q) => format!("{}?{}", url.path(), q),
        None => url.path().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_segments() {
        let base = Url::parse("https://api.example.com").unwrap();
        let url = endpoint(&base, &["api", "footer"], &[]).unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/api/footer");
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let base = Url::parse("https://example.com/v1/").unwrap();
        let url = endpoint(&base, &["jobs", "it"], &[]).unwrap();
        assert_eq!(url.as_str(), "https://example.com/v1/jobs/it");
    }

    #[test]
    fn test_endpoint_encodes_segments_and_query() {
        let base = Url::parse("https://example.com").unwrap();
        let query = vec![
            ("sortBy", "salary_asc".to_string()),
            ("location", "St Ives".to_string()),
        ];
        let url = endpoint(&base, &["jobs", "health care"], &query).unwrap();
        assert_eq!(
            url.as_str(),
            "https://example.com/jobs/health%20care?sortBy=salary_asc&location=St+Ives"
        );
    }

    #[test]
    fn test_keyword_segment() {
        assert_eq!(
            keyword_segment(" developer ", "cambridge"),
            "developer-jobs-in-cambridge"
        );
    }

    #[test]
    fn test_search_path() {
        assert_eq!(search_path("data analyst").as_deref(), Some("/jobs/data%20analyst"));
        assert_eq!(search_path("c++").as_deref(), Some("/jobs/c%2B%2B"));
        assert_eq!(search_path("   "), None);
    }

    #[test]
    fn test_display_path() {
        let url = Url::parse("https://example.com/jobs/it?hours=full_time").unwrap();
        assert_eq!(display_path(&url), "/jobs/it?hours=full_time");
    }
}
