// src/models/mod.rs

//! Domain models for the job board client.
//!
//! This module contains all data structures used throughout the application,
//! organized by their primary purpose.

mod category;
mod config;
mod criteria;
mod job;
mod page;

// Re-export all public types
pub use category::{CategoryGroup, CategoryLink, CategoryTree, FooterEntry};
pub use config::{API_URL_ENV, ApiConfig, Config, FilterMode, OutputConfig, SiteConfig};
pub use criteria::{FilterCriteria, SalaryRange, SortOrder};
pub use job::{Job, parse_timestamp};
pub use page::{PageData, PageMetadata, StaticPage, StaticPageResponse, StructuredData};

use serde::{Deserialize, Serialize};

/// Listing shape of `GET /jobs/{category}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobsEnvelope {
    #[serde(default)]
    pub jobs: Vec<Job>,
}
