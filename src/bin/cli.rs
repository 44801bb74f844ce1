//! jobfinder CLI
//!
//! Console front end for the regional job board API.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use jobfinder::{
    error::Result,
    models::{Config, FilterCriteria, SalaryRange, SortOrder},
    pipeline::{self, ListingTarget},
    render::{self, PageOptions},
    services::{HttpJobsApi, JobsApi, LocalJobsApi, SearchSession},
    utils,
};

/// jobfinder - Regional Job Search
#[derive(Parser, Debug)]
#[command(name = "jobfinder", version, about = "Regional job search client")]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "data/config.toml")]
    config: PathBuf,

    /// Read API payloads from this directory instead of the network
    #[arg(long)]
    offline: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show job vacancies by category
    Home,

    /// Show the static page for a category
    Category {
        category: String,

        /// Include the SEO head block
        #[arg(long)]
        head: bool,

        /// Print the page body as HTML
        #[arg(long)]
        html: bool,
    },

    /// List jobs in a category
    Jobs {
        category: String,

        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Search jobs by keyword
    Search {
        keyword: String,

        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Validate configuration
    Validate,
}

/// Filter and sort flags shared by listing commands.
#[derive(Args, Debug, Default)]
struct FilterArgs {
    /// Criteria as a query string, e.g. "sortBy=salary_desc&salaryRange=30000-50000".
    /// Individual flags take precedence.
    #[arg(long)]
    query: Option<String>,

    /// salary_asc, salary_desc or date_posted
    #[arg(long)]
    sort_by: Option<String>,

    /// Only jobs posted within this many days
    #[arg(long)]
    date_posted: Option<u32>,

    /// Salary bucket as min-max, e.g. 30000-50000
    #[arg(long, value_parser = parse_salary_range)]
    salary_range: Option<SalaryRange>,

    /// Only remote jobs
    #[arg(long)]
    remote: bool,

    #[arg(long)]
    location: Option<String>,

    #[arg(long)]
    company: Option<String>,

    /// e.g. permanent, contract
    #[arg(long)]
    contract_type: Option<String>,

    /// e.g. full_time, part_time
    #[arg(long)]
    hours: Option<String>,
}

impl FilterArgs {
    fn into_criteria(self) -> FilterCriteria {
        let mut criteria = self
            .query
            .as_deref()
            .map(FilterCriteria::from_query)
            .unwrap_or_default();
        if self.remote {
            criteria = criteria.with_remote(true);
        }
        if let Some(order) = self.sort_by.as_deref().and_then(SortOrder::parse) {
            criteria = criteria.with_sort(order);
        } else if let Some(raw) = &self.sort_by {
            log::warn!("Unknown sort order {:?}, keeping default order", raw);
        }
        if let Some(days) = self.date_posted {
            criteria = criteria.with_date_posted(days);
        }
        if let Some(range) = self.salary_range {
            criteria = criteria.with_salary_range(range);
        }
        if let Some(location) = self.location {
            criteria = criteria.with_location(location);
        }
        if let Some(company) = self.company {
            criteria = criteria.with_company(company);
        }
        if let Some(contract_type) = self.contract_type {
            criteria = criteria.with_contract_type(contract_type);
        }
        if let Some(hours) = self.hours {
            criteria = criteria.with_hours(hours);
        }
        criteria
    }
}

fn parse_salary_range(value: &str) -> std::result::Result<SalaryRange, String> {
    SalaryRange::parse(value).ok_or_else(|| format!("expected min-max, got {:?}", value))
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Build the data source: offline directory or the configured HTTP API.
fn build_api(offline: Option<&PathBuf>, config: &Config) -> Result<Arc<dyn JobsApi>> {
    match offline {
        Some(dir) => {
            log::info!("Using offline data from {}", dir.display());
            Ok(Arc::new(LocalJobsApi::new(dir, config.site.region.clone())))
        }
        None => {
            config.validate()?;
            Ok(Arc::new(HttpJobsApi::new(config)?))
        }
    }
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load_or_default(&cli.config).with_env_overrides();
    log::debug!("Loaded configuration from {}", cli.config.display());
    let region = config.site.region.as_str();

    match cli.command {
        Command::Home => {
            let api = build_api(cli.offline.as_ref(), &config)?;
            let categories = pipeline::run_home(api.as_ref()).await;
            if cli.json {
                print_json(&categories)?;
            } else {
                println!("{}", render::categories(&categories, region));
            }
        }

        Command::Category {
            category,
            head,
            html,
        } => {
            let api = build_api(cli.offline.as_ref(), &config)?;
            let view = pipeline::run_category(api.as_ref(), &category).await;
            if cli.json {
                print_json(&view)?;
            } else {
                println!(
                    "{}",
                    render::category_page(&view, region, PageOptions { head, html })
                );
            }
        }

        Command::Jobs { category, filters } => {
            let api = build_api(cli.offline.as_ref(), &config)?;
            let target = ListingTarget::Category(category);
            list(cli.json, &config, api.as_ref(), &target, filters, None).await?;
        }

        Command::Search { keyword, filters } => {
            let api = build_api(cli.offline.as_ref(), &config)?;
            let heading = utils::search_path(&keyword).map(|path| format!("Results for {}", path));
            let target = ListingTarget::Keyword(keyword);
            list(cli.json, &config, api.as_ref(), &target, filters, heading).await?;
        }

        Command::Validate => {
            log::info!("Validating configuration...");
            if let Err(e) = config.validate() {
                log::error!("Config validation failed: {}", e);
                return Err(e);
            }
            log::info!("✓ Config OK (API base: {})", config.api.base_url);
        }
    }

    Ok(())
}

/// Run a listing search and print the result.
async fn list(
    json: bool,
    config: &Config,
    api: &dyn JobsApi,
    target: &ListingTarget,
    filters: FilterArgs,
    heading: Option<String>,
) -> Result<()> {
    let session = SearchSession::new();
    let view = pipeline::run_listing(config, api, &session, target, filters.into_criteria()).await;
    if json {
        print_json(&render::keyed_jobs(&view.jobs))?;
    } else {
        if let Some(heading) = heading {
            println!("{}\n", heading);
        }
        println!("{}", render::jobs(&view.jobs, &config.output));
    }
    Ok(())
}
