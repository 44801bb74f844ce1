//! Page-level entry points.
//!
//! - `run_home`: landing page category navigation
//! - `run_category`: static category page plus navigation
//! - `run_listing`: filtered job list for a category or keyword search

pub mod category;
pub mod home;
pub mod listing;

pub use category::{CategoryPageView, run_category};
pub use home::run_home;
pub use listing::{ListingTarget, run_listing};

use crate::models::CategoryTree;
use crate::services::JobsApi;

/// Fetch the category tree, degrading to empty on failure.
pub async fn load_categories(api: &dyn JobsApi) -> CategoryTree {
    match api.categories().await {
        Ok(tree) => {
            log::debug!(
                "Loaded {} categories with {} links",
                tree.len(),
                tree.link_count()
            );
            tree
        }
        Err(e) => {
            log::error!("Error loading categories: {}", e);
            CategoryTree::default()
        }
    }
}
