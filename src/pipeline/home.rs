// src/pipeline/home.rs

//! Landing page.

use crate::models::CategoryTree;
use crate::pipeline::load_categories;
use crate::services::JobsApi;

/// Load the "job vacancies by category" navigation.
pub async fn run_home(api: &dyn JobsApi) -> CategoryTree {
    log::info!("Loading job categories...");
    let categories = load_categories(api).await;
    if categories.is_empty() {
        log::warn!("No categories available");
    }
    categories
}
