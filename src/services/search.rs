// src/services/search.rs

//! Search view state with latest-request-wins semantics.
//!
//! Each request takes a [`Ticket`] carrying a generation number. A response
//! is applied only while its ticket is still the newest one issued, so a slow
//! response for old criteria can never overwrite a newer result.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{PoisonError, RwLock};

use serde::Serialize;

use crate::error::Result;
use crate::models::{FilterCriteria, Job};

/// Handle for one in-flight request.
#[derive(Debug, Clone)]
pub struct Ticket {
    generation: u64,
    criteria: FilterCriteria,
}

/// What one search page currently shows.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchView {
    /// A request newer than the shown result is in flight
    pub loading: bool,

    /// Jobs from the most recent applied response
    pub jobs: Vec<Job>,

    /// Generation of the applied response (0 before the first one)
    pub generation: u64,

    /// Criteria the shown jobs were fetched under
    pub criteria: FilterCriteria,
}

/// Shared state of one search page.
#[derive(Debug, Default)]
pub struct SearchSession {
    issued: AtomicU64,
    view: RwLock<SearchView>,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a request and mark the view as loading.
    pub fn begin(&self, criteria: FilterCriteria) -> Ticket {
        let generation = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        self.view
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .loading = true;
        log::debug!("Search request #{} started", generation);
        Ticket {
            generation,
            criteria,
        }
    }

    /// True while no newer request has been issued.
    pub fn is_current(&self, ticket: &Ticket) -> bool {
        self.issued.load(Ordering::SeqCst) == ticket.generation
    }

    /// Apply a finished request. Returns `false` if the response was stale.
    ///
    /// A failure resets the job list to empty.
    pub fn complete(&self, ticket: Ticket, result: Result<Vec<Job>>) -> bool {
        let mut view = self.view.write().unwrap_or_else(PoisonError::into_inner);
        if !self.is_current(&ticket) {
            log::debug!(
                "Discarding stale response #{} (latest is #{})",
                ticket.generation,
                self.issued.load(Ordering::SeqCst)
            );
            return false;
        }

        view.jobs = match result {
            Ok(jobs) => jobs,
            Err(e) => {
                log::error!("Error fetching jobs: {}", e);
                Vec::new()
            }
        };
        view.loading = false;
        view.generation = ticket.generation;
        view.criteria = ticket.criteria;
        true
    }

    /// Run one request through the session.
    pub async fn run<F, Fut>(&self, criteria: FilterCriteria, fetch: F) -> bool
    where
        F: FnOnce(FilterCriteria) -> Fut,
        Fut: Future<Output = Result<Vec<Job>>>,
    {
        let ticket = self.begin(criteria);
        let result = fetch(ticket.criteria.clone()).await;
        self.complete(ticket, result)
    }

    /// Snapshot of the current view.
    pub fn view(&self) -> SearchView {
        self.view
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
