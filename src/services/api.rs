// src/services/api.rs

//! Remote jobs API client.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use url::Url;

use crate::error::Result;
use crate::models::{
    CategoryTree, Config, FilterCriteria, FooterEntry, Job, JobsEnvelope, PageData, StaticPage,
    StaticPageResponse,
};
use crate::utils::http::{create_async_client, fetch_json};
use crate::utils::{display_path, endpoint, keyword_segment};

/// Source of job listings, category taxonomy and static pages.
#[async_trait]
pub trait JobsApi: Send + Sync {
    /// Flat category records (`GET /api/footer`).
    async fn footer(&self) -> Result<Vec<FooterEntry>>;

    /// Jobs for a category (`GET /jobs/{category}?criteria`).
    async fn category_jobs(&self, category: &str, criteria: &FilterCriteria) -> Result<Vec<Job>>;

    /// Static content and SEO metadata for a category (`GET /jobs/{category}`).
    async fn category_page(&self, category: &str) -> Result<StaticPage>;

    /// Content blocks for a category (`GET /api/pages/{category}`).
    async fn page_content(&self, category: &str) -> Result<Vec<PageData>>;

    /// Keyword search (`GET /{keyword}-jobs-in-{region}?criteria`).
    async fn search_jobs(&self, keyword: &str, criteria: &FilterCriteria) -> Result<Vec<Job>>;

    /// Footer records grouped by category.
    async fn categories(&self) -> Result<CategoryTree> {
        let entries = self.footer().await?;
        Ok(CategoryTree::from_entries(&entries))
    }
}

/// HTTP implementation of [`JobsApi`].
pub struct HttpJobsApi {
    client: Client,
    base: Url,
    region: String,
}

impl HttpJobsApi {
    /// Create a client for the configured API.
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            client: create_async_client(&config.api)?,
            base: config.api.base()?,
            region: config.site.region.clone(),
        })
    }

    fn url(&self, segments: &[&str], criteria: Option<&FilterCriteria>) -> Result<Url> {
        let query = criteria.map(FilterCriteria::to_query_pairs).unwrap_or_default();
        endpoint(&self.base, segments, &query)
    }
}

#[async_trait]
impl JobsApi for HttpJobsApi {
    async fn footer(&self) -> Result<Vec<FooterEntry>> {
        let url = self.url(&["api", "footer"], None)?;
        fetch_json(&self.client, &url).await
    }

    async fn category_jobs(&self, category: &str, criteria: &FilterCriteria) -> Result<Vec<Job>> {
        let url = self.url(&["jobs", category], Some(criteria))?;
        let envelope: JobsEnvelope = fetch_json(&self.client, &url).await?;
        log::info!("Fetched {} jobs for category {}", envelope.jobs.len(), category);
        Ok(envelope.jobs)
    }

    async fn category_page(&self, category: &str) -> Result<StaticPage> {
        let url = self.url(&["jobs", category], None)?;
        let response: StaticPageResponse = fetch_json(&self.client, &url).await?;
        response.into_page(&display_path(&url))
    }

    async fn page_content(&self, category: &str) -> Result<Vec<PageData>> {
        let url = self.url(&["api", "pages", category], None)?;
        fetch_json(&self.client, &url).await
    }

    async fn search_jobs(&self, keyword: &str, criteria: &FilterCriteria) -> Result<Vec<Job>> {
        let segment = keyword_segment(keyword, &self.region);
        let url = self.url(&[segment.as_str()], Some(criteria))?;
        let body: Value = fetch_json(&self.client, &url).await?;
        let jobs = jobs_from_array(body, &display_path(&url))?;
        log::info!("Fetched {} jobs for keyword {:?}", jobs.len(), keyword);
        Ok(jobs)
    }
}

/// Decode a bare job array. Any other shape yields an empty list.
pub(crate) fn jobs_from_array(body: Value, source: &str) -> Result<Vec<Job>> {
    match body {
        Value::Array(_) => Ok(serde_json::from_value(body)?),
        other => {
            log::warn!(
                "Expected a job array from {}, got {}; treating as empty",
                source,
                json_kind(&other)
            );
            Ok(Vec::new())
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
