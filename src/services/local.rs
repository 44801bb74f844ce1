// src/services/local.rs

//! Offline [`JobsApi`] backed by JSON files.
//!
//! ## Directory Layout
//!
//! ```text
//! {root}/
//! ├── footer.json                          # [{PageCategory, PageKeyword, PageName}]
//! ├── jobs/{category}.json                 # {jobs: [...]}
//! ├── pages/{category}.json                # {pageData: [...], metadata: {...}}
//! └── search/{keyword}-jobs-in-{region}.json   # [...]
//! ```
//!
//! Criteria passed to listing calls are applied with the filter engine, so the
//! directory behaves like a server that filters on its side.

use std::path::PathBuf;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{AppError, Result};
use crate::filter;
use crate::models::{
    FilterCriteria, FooterEntry, Job, JobsEnvelope, PageData, StaticPage, StaticPageResponse,
};
use crate::services::api::{JobsApi, jobs_from_array};
use crate::utils::keyword_segment;

/// Local filesystem source.
#[derive(Debug, Clone)]
pub struct LocalJobsApi {
    root_dir: PathBuf,
    region: String,
}

impl LocalJobsApi {
    /// Create a source rooted at the given directory.
    pub fn new(root_dir: impl Into<PathBuf>, region: impl Into<String>) -> Self {
        Self {
            root_dir: root_dir.into(),
            region: region.into(),
        }
    }

    /// Get the full path for a relative key.
    fn path(&self, key: &str) -> PathBuf {
        self.root_dir.join(key)
    }

    /// Read bytes, returning None if file doesn't exist.
    async fn read_bytes(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let path = self.path(key);
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::Io(e)),
        }
    }

    /// Read JSON data.
    async fn read_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.read_bytes(key).await? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    async fn page_response(&self, category: &str) -> Result<(String, StaticPageResponse)> {
        let key = format!("pages/{}.json", file_stem(category));
        let response = self
            .read_json(&key)
            .await?
            .ok_or_else(|| AppError::api(&key, "page not found"))?;
        Ok((key, response))
    }
}

#[async_trait]
impl JobsApi for LocalJobsApi {
    async fn footer(&self) -> Result<Vec<FooterEntry>> {
        self.read_json("footer.json")
            .await?
            .ok_or_else(|| AppError::status("footer.json", 404))
    }

    async fn category_jobs(&self, category: &str, criteria: &FilterCriteria) -> Result<Vec<Job>> {
        let key = format!("jobs/{}.json", file_stem(category));
        let envelope: JobsEnvelope = self.read_json(&key).await?.unwrap_or_else(|| {
            log::warn!("No local listing at {}", key);
            JobsEnvelope::default()
        });
        Ok(filter::apply(&envelope.jobs, criteria))
    }

    async fn category_page(&self, category: &str) -> Result<StaticPage> {
        let (key, response) = self.page_response(category).await?;
        response.into_page(&key)
    }

    async fn page_content(&self, category: &str) -> Result<Vec<PageData>> {
        let (_, response) = self.page_response(category).await?;
        Ok(response.page_data)
    }

    async fn search_jobs(&self, keyword: &str, criteria: &FilterCriteria) -> Result<Vec<Job>> {
        let segment = keyword_segment(keyword, &self.region);
        let key = format!("search/{}.json", file_stem(&segment));
        let jobs = match self.read_json::<Value>(&key).await? {
            Some(body) => jobs_from_array(body, &key)?,
            None => {
                log::warn!("No local search results at {}", key);
                Vec::new()
            }
        };
        Ok(filter::apply(&jobs, criteria))
    }
}

/// File name for a user-supplied key, with path separators neutralised.
fn file_stem(name: &str) -> String {
    name.trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | '\0' => '_',
            other => other,
        })
        .collect::<String>()
        .replace("..", "_")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SortOrder;
    use tempfile::TempDir;

    async fn write(tmp: &TempDir, key: &str, body: &str) {
        let path = tmp.path().join(key);
        tokio::fs::create_dir_all(path.parent().unwrap()).await.unwrap();
        tokio::fs::write(path, body).await.unwrap();
    }

    #[tokio::test]
    async fn test_categories_from_footer() {
        let tmp = TempDir::new().unwrap();
        write(
            &tmp,
            "footer.json",
            r#"[
                {"PageCategory": "IT", "PageKeyword": "dev", "PageName": "a"},
                {"PageCategory": "IT", "PageKeyword": "qa", "PageName": "b"},
                {"PageCategory": "Sales", "PageKeyword": "rep", "PageName": "c"}
            ]"#,
        )
        .await;
        let api = LocalJobsApi::new(tmp.path(), "cambridge");

        let tree = api.categories().await.unwrap();
        let names: Vec<&str> = tree.category_names().collect();
        assert_eq!(names, vec!["IT", "Sales"]);
        assert_eq!(tree.get("IT").unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_missing_footer_is_status_error() {
        let tmp = TempDir::new().unwrap();
        let api = LocalJobsApi::new(tmp.path(), "cambridge");
        assert!(matches!(
            api.footer().await,
            Err(AppError::Status { status: 404, .. })
        ));
    }

    #[tokio::test]
    async fn test_search_applies_criteria() {
        let tmp = TempDir::new().unwrap();
        write(
            &tmp,
            "search/developer-jobs-in-cambridge.json",
            r#"[
                {"id": "a", "salary_min": 50000},
                {"id": "b", "salary_min": 20000, "is_remote": true},
                {"id": "c", "salary_min": 30000, "is_remote": true}
            ]"#,
        )
        .await;
        let api = LocalJobsApi::new(tmp.path(), "cambridge");

        let all = api
            .search_jobs("developer", &FilterCriteria::new())
            .await
            .unwrap();
        assert_eq!(all.len(), 3);

        let criteria = FilterCriteria::new()
            .with_remote(true)
            .with_sort(SortOrder::SalaryDesc);
        let remote = api.search_jobs("developer", &criteria).await.unwrap();
        let ids: Vec<_> = remote.iter().filter_map(|j| j.id.as_deref()).collect();
        assert_eq!(ids, vec!["b", "c"]);
    }

    #[tokio::test]
    async fn test_missing_listing_is_empty() {
        let tmp = TempDir::new().unwrap();
        let api = LocalJobsApi::new(tmp.path(), "cambridge");
        let jobs = api
            .category_jobs("nursing", &FilterCriteria::new())
            .await
            .unwrap();
        assert!(jobs.is_empty());
    }

    #[tokio::test]
    async fn test_category_page_and_content() {
        let tmp = TempDir::new().unwrap();
        write(
            &tmp,
            "pages/it.json",
            r#"{"pageData": [{"PageContentReact": "<p>Hello</p>"}], "metadata": {"title": "IT"}}"#,
        )
        .await;
        let api = LocalJobsApi::new(tmp.path(), "cambridge");

        let page = api.category_page("it").await.unwrap();
        assert_eq!(page.page.text(), "Hello");
        assert_eq!(page.metadata.unwrap().title, "IT");

        let blocks = api.page_content("it").await.unwrap();
        assert_eq!(blocks.len(), 1);

        assert!(api.category_page("missing").await.is_err());
    }

    #[test]
    fn test_file_stem_neutralises_paths() {
        assert_eq!(file_stem("../etc/passwd"), "__etc_passwd");
        assert_eq!(file_stem(" it "), "it");
    }
}
