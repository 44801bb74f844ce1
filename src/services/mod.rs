//! Service layer for the job board client.
//!
//! This module contains:
//! - The jobs API abstraction and its HTTP client (`JobsApi`, `HttpJobsApi`)
//! - An offline file-backed source (`LocalJobsApi`)
//! - Search view state with stale-response protection (`SearchSession`)

mod api;
mod local;
mod search;

pub use api::{HttpJobsApi, JobsApi};
pub use local::LocalJobsApi;
pub use search::{SearchSession, SearchView, Ticket};
