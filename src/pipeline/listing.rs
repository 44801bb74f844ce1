// src/pipeline/listing.rs

//! Filtered job listings.

use std::fmt;

use crate::error::AppError;
use crate::filter;
use crate::models::{Config, FilterCriteria, FilterMode};
use crate::services::{JobsApi, SearchSession, SearchView};

/// Which listing endpoint to query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingTarget {
    /// `GET /jobs/{category}`
    Category(String),
    /// `GET /{keyword}-jobs-in-{region}`
    Keyword(String),
}

impl fmt::Display for ListingTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Category(name) => write!(f, "category {:?}", name),
            Self::Keyword(keyword) => write!(f, "keyword {:?}", keyword),
        }
    }
}

/// Fetch and filter a listing through the session.
///
/// In client mode the request carries no criteria and the filter engine does
/// all filtering and sorting. In server mode the criteria go out as a query
/// string and the response is shown as returned.
pub async fn run_listing(
    config: &Config,
    api: &dyn JobsApi,
    session: &SearchSession,
    target: &ListingTarget,
    criteria: FilterCriteria,
) -> SearchView {
    let mode = config.site.filter_mode;
    log::info!("Searching {} ({:?} filtering)", target, mode);

    session
        .run(criteria, |criteria| async move {
            let remote = match mode {
                FilterMode::Client => FilterCriteria::default(),
                FilterMode::Server => criteria.clone(),
            };
            let jobs = match target {
                ListingTarget::Category(name) => api.category_jobs(name, &remote).await?,
                ListingTarget::Keyword(keyword) => api.search_jobs(keyword, &remote).await?,
            };
            Ok::<_, AppError>(match mode {
                FilterMode::Client => filter::apply(&jobs, &criteria),
                FilterMode::Server => jobs,
            })
        })
        .await;

    let view = session.view();
    log::info!("{} jobs match", view.jobs.len());
    view
}
