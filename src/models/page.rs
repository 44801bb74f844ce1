//! Static category page content and SEO metadata.

use scraper::{Html, Node};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{AppError, Result};

/// One static content block for a category page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageData {
    /// Pre-rendered HTML for the page body
    #[serde(rename = "PageContentReact", default)]
    pub content_html: String,

    #[serde(rename = "PageKeyword", default, skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,

    #[serde(rename = "PageName", default, skip_serializing_if = "Option::is_none")]
    pub page_name: Option<String>,
}

impl PageData {
    /// Page body as plain text with whitespace collapsed.
    pub fn text(&self) -> String {
        let fragment = Html::parse_fragment(&self.content_html);
        let mut raw = String::new();
        for node in fragment.root_element().descendants() {
            match node.value() {
                Node::Text(text) => raw.push_str(text),
                Node::Element(element) if BLOCK_ELEMENTS.contains(&element.name()) => {
                    raw.push(' ')
                }
                _ => {}
            }
        }
        normalize_whitespace(&raw)
    }
}

/// Elements whose boundaries separate words in the plain-text rendering.
const BLOCK_ELEMENTS: &[&str] = &[
    "address", "article", "blockquote", "br", "dd", "div", "dl", "dt", "footer", "h1", "h2",
    "h3", "h4", "h5", "h6", "header", "hr", "li", "ol", "p", "section", "table", "td", "th",
    "tr", "ul",
];

/// A JSON-LD block attached to a page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructuredData {
    #[serde(rename = "PageStructuredData", default)]
    pub data: Value,
}

/// SEO metadata for a category page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageMetadata {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub description: String,

    #[serde(rename = "canonicalUrl", default)]
    pub canonical_url: String,

    #[serde(rename = "structuredData", default)]
    pub structured_data: Vec<StructuredData>,
}

impl PageMetadata {
    /// The first JSON-LD payload as text, if any.
    pub fn json_ld(&self) -> Option<String> {
        let first = self.structured_data.first()?;
        match &first.data {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Render the `<head>` tags for the page.
    pub fn head_tags(&self) -> String {
        let title = escape_html(&self.title);
        let description = escape_html(&self.description);
        let canonical = escape_html(&self.canonical_url);

        let mut tags = vec![
            format!("<title>{}</title>", title),
            format!(r#"<meta name="description" content="{}" />"#, description),
            format!(r#"<link rel="canonical" href="{}" />"#, canonical),
            r#"<meta name="robots" content="index, follow" />"#.to_string(),
            format!(r#"<meta property="og:title" content="{}" />"#, title),
            format!(r#"<meta property="og:description" content="{}" />"#, description),
            format!(r#"<meta property="og:url" content="{}" />"#, canonical),
            r#"<meta property="og:type" content="website" />"#.to_string(),
        ];
        if let Some(json_ld) = self.json_ld() {
            tags.push(format!(
                r#"<script type="application/ld+json">{}</script>"#,
                json_ld.replace("</", "<\\/")
            ));
        }
        tags.join("\n")
    }
}

/// Static-content shape of `GET /jobs/{category}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StaticPageResponse {
    #[serde(rename = "pageData", default)]
    pub page_data: Vec<PageData>,

    #[serde(default)]
    pub metadata: Option<PageMetadata>,
}

impl StaticPageResponse {
    /// Take the first content block. An empty `pageData` is an error.
    pub fn into_page(self, endpoint: &str) -> Result<StaticPage> {
        let page = self
            .page_data
            .into_iter()
            .next()
            .ok_or_else(|| AppError::api(endpoint, "pageData is empty"))?;
        Ok(StaticPage {
            page,
            metadata: self.metadata,
        })
    }
}

/// A category page ready to render.
#[derive(Debug, Clone, Default, Serialize)]
pub struct StaticPage {
    pub page: PageData,
    pub metadata: Option<PageMetadata>,
}

fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_response() -> StaticPageResponse {
        serde_json::from_str(
            r#"{
                "pageData": [{"PageContentReact": "<h1>IT jobs</h1>\n<p>Find   the <b>best</b> roles.</p>"}],
                "metadata": {
                    "title": "IT Jobs in Cambridge",
                    "description": "Latest \"IT\" vacancies",
                    "canonicalUrl": "https://example.com/category/it",
                    "structuredData": [{"PageStructuredData": "{\"@type\":\"ItemList\"}"}]
                }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_page_text() {
        let page = sample_response().into_page("/jobs/it").unwrap();
        assert_eq!(page.page.text(), "IT jobs Find the best roles.");
    }

    #[test]
    fn test_page_text_keeps_inline_punctuation() {
        let page = PageData {
            content_html: "<p><b>Hello</b>, world</p><ul><li>one</li><li>two</li></ul>".into(),
            ..PageData::default()
        };
        assert_eq!(page.text(), "Hello, world one two");
    }

    #[test]
    fn test_empty_page_data_is_error() {
        let response: StaticPageResponse = serde_json::from_str(r#"{"pageData": []}"#).unwrap();
        assert!(matches!(
            response.into_page("/jobs/it"),
            Err(AppError::Api { .. })
        ));
    }

    #[test]
    fn test_head_tags() {
        let page = sample_response().into_page("/jobs/it").unwrap();
        let head = page.metadata.unwrap().head_tags();

        assert!(head.contains("<title>IT Jobs in Cambridge</title>"));
        assert!(head.contains(r#"content="Latest &quot;IT&quot; vacancies""#));
        assert!(head.contains(r#"<link rel="canonical" href="https://example.com/category/it" />"#));
        assert!(head.contains(r#"<meta name="robots" content="index, follow" />"#));
        assert!(head.contains(r#"<meta property="og:type" content="website" />"#));
        assert!(head.contains(r#"<script type="application/ld+json">{"@type":"ItemList"}</script>"#));
    }

    #[test]
    fn test_json_ld_object_payload() {
        let metadata: PageMetadata = serde_json::from_str(
            r#"{"structuredData": [{"PageStructuredData": {"@type": "ItemList"}}]}"#,
        )
        .unwrap();
        assert_eq!(metadata.json_ld().as_deref(), Some(r#"{"@type":"ItemList"}"#));

        assert_eq!(PageMetadata::default().json_ld(), None);
    }
}
