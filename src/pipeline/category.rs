// src/pipeline/category.rs

//! Static category page.

use serde::Serialize;

use crate::models::{CategoryTree, StaticPage};
use crate::pipeline::load_categories;
use crate::services::JobsApi;

/// Everything shown on a category page.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CategoryPageView {
    pub category: String,
    /// `None` when the page could not be loaded
    pub page: Option<StaticPage>,
    pub categories: CategoryTree,
}

/// Load the static page and the navigation concurrently.
pub async fn run_category(api: &dyn JobsApi, category: &str) -> CategoryPageView {
    log::info!("Loading category page {:?}", category);

    let (page, categories) = futures::join!(api.category_page(category), load_categories(api));

    let page = match page {
        Ok(page) => Some(page),
        Err(e) => {
            log::warn!("Category page unavailable ({}), trying page content", e);
            fallback_page(api, category).await
        }
    };

    CategoryPageView {
        category: category.to_string(),
        page,
        categories,
    }
}

/// Content-only page from `GET /api/pages/{category}`, without SEO metadata.
async fn fallback_page(api: &dyn JobsApi, category: &str) -> Option<StaticPage> {
    match api.page_content(category).await {
        Ok(blocks) => blocks.into_iter().next().map(|page| StaticPage {
            page,
            metadata: None,
        }),
        Err(e) => {
            log::error!("Error fetching static HTML: {}", e);
            None
        }
    }
}
