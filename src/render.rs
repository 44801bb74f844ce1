// src/render.rs

//! Plain-text rendering of pages for the console.

use std::fmt::Write;

use serde::Serialize;

use crate::models::{CategoryTree, Job, OutputConfig};
use crate::pipeline::CategoryPageView;

/// Category navigation, one block per category.
pub fn categories(tree: &CategoryTree, region: &str) -> String {
    let mut out = String::from("Job vacancies by category\n");
    for group in tree.groups() {
        let _ = write!(out, "\n{}\n", group.name);
        for link in &group.links {
            let _ = writeln!(out, "  {} ({})", link.label(region), link.href());
        }
    }
    out
}

/// Job cards, or the empty-result message.
pub fn jobs(jobs: &[Job], output: &OutputConfig) -> String {
    if jobs.is_empty() {
        return output.empty_message.clone();
    }
    jobs.iter()
        .map(|job| job.format(&output.job_template))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// A job with its stable list key, for JSON output.
#[derive(Debug, Serialize)]
pub struct KeyedJob<'a> {
    pub key: String,
    #[serde(flatten)]
    pub job: &'a Job,
}

/// Jobs paired with [`Job::key`], falling back to list position.
pub fn keyed_jobs(jobs: &[Job]) -> Vec<KeyedJob<'_>> {
    jobs.iter()
        .enumerate()
        .map(|(index, job)| KeyedJob {
            key: job.key(index),
            job,
        })
        .collect()
}

/// Options for [`category_page`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PageOptions {
    /// Print the SEO head block
    pub head: bool,
    /// Print the raw HTML body instead of plain text
    pub html: bool,
}

/// Static category page followed by the navigation.
pub fn category_page(view: &CategoryPageView, region: &str, options: PageOptions) -> String {
    let mut out = String::new();

    if let Some(page) = &view.page {
        if options.head {
            if let Some(metadata) = &page.metadata {
                let _ = writeln!(out, "{}\n", metadata.head_tags());
            }
        }
        if options.html {
            let _ = writeln!(out, "{}", page.page.content_html);
        } else {
            let _ = writeln!(out, "{}", page.page.text());
        }
    } else {
        let _ = writeln!(out, "No content available for {}.", view.category);
    }

    out.push_str("\nExplore Categories\n");
    out.push_str(&categories(&view.categories, region));
    out
}
