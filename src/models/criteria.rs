//! User-selected filter and sort parameters.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static SALARY_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(\d+(?:\.\d+)?)\s*-\s*(\d+(?:\.\d+)?)\s*$").expect("valid salary regex")
});

/// Requested result ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Ascending by `salary_min`
    SalaryAsc,
    /// Descending by `salary_max`
    SalaryDesc,
    /// Most recent first
    DatePosted,
}

impl SortOrder {
    /// Parse a `sortBy` value. Unknown values mean "no reordering".
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "salary_asc" => Some(Self::SalaryAsc),
            "salary_desc" => Some(Self::SalaryDesc),
            "date_posted" => Some(Self::DatePosted),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SalaryAsc => "salary_asc",
            Self::SalaryDesc => "salary_desc",
            Self::DatePosted => "date_posted",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Salary bucket written as `min-max`, e.g. `30000-50000`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SalaryRange {
    pub min: f64,
    pub max: f64,
}

impl SalaryRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Parse a `min-max` pair. Returns `None` for anything else.
    pub fn parse(value: &str) -> Option<Self> {
        let caps = SALARY_RANGE.captures(value)?;
        let min = caps.get(1)?.as_str().parse().ok()?;
        let max = caps.get(2)?.as_str().parse().ok()?;
        Some(Self { min, max })
    }
}

impl fmt::Display for SalaryRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

/// The complete set of filter and sort parameters for one search view.
///
/// Every field is optional and an absent field never filters anything out.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Case-insensitive substring of the job location
    pub location: Option<String>,

    /// Keep only remote jobs when set
    pub is_remote: bool,

    /// Salary bucket the job range must fit inside
    pub salary_range: Option<SalaryRange>,

    /// Exact contract type
    pub contract_type: Option<String>,

    /// Exact contract hours (matched against `contract_time`)
    pub hours: Option<String>,

    /// Recency window in days
    pub date_posted: Option<u32>,

    /// Case-insensitive substring of the company name
    pub company: Option<String>,

    /// Result ordering
    pub sort_by: Option<SortOrder>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = non_empty(location.into());
        self
    }

    pub fn with_remote(mut self, is_remote: bool) -> Self {
        self.is_remote = is_remote;
        self
    }

    pub fn with_salary_range(mut self, range: SalaryRange) -> Self {
        self.salary_range = Some(range);
        self
    }

    pub fn with_contract_type(mut self, contract_type: impl Into<String>) -> Self {
        self.contract_type = non_empty(contract_type.into());
        self
    }

    pub fn with_hours(mut self, hours: impl Into<String>) -> Self {
        self.hours = non_empty(hours.into());
        self
    }

    pub fn with_date_posted(mut self, days: u32) -> Self {
        self.date_posted = Some(days);
        self
    }

    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = non_empty(company.into());
        self
    }

    pub fn with_sort(mut self, order: SortOrder) -> Self {
        self.sort_by = Some(order);
        self
    }

    /// True when no filter and no sort is active.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Build criteria from a URL query string such as
    /// `sortBy=salary_desc&salaryRange=30000-50000`. A leading `?` is allowed.
    pub fn from_query(query: &str) -> Self {
        let query = query.trim().trim_start_matches('?');
        Self::from_query_pairs(url::form_urlencoded::parse(query.as_bytes()))
    }

    /// Build criteria from query-string style pairs.
    ///
    /// Empty values are treated as absent. Malformed `salaryRange` and
    /// `datePosted` values are dropped with a warning.
    pub fn from_query_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut criteria = Self::default();
        for (key, value) in pairs {
            let raw = value.as_ref();
            let value = raw.trim();
            if value.is_empty() {
                continue;
            }
            match key.as_ref() {
                "sortBy" => criteria.sort_by = SortOrder::parse(value),
                "datePosted" => match value.parse::<u32>() {
                    Ok(days) => criteria.date_posted = Some(days),
                    Err(_) => log::warn!("Ignoring malformed datePosted value {:?}", value),
                },
                "salaryRange" => match SalaryRange::parse(value) {
                    Some(range) => criteria.salary_range = Some(range),
                    None => log::warn!("Ignoring malformed salaryRange value {:?}", value),
                },
                "isRemote" => criteria.is_remote = value.eq_ignore_ascii_case("true"),
                "location" => criteria.location = Some(raw.to_string()),
                "company" => criteria.company = Some(raw.to_string()),
                "contractType" => criteria.contract_type = Some(raw.to_string()),
                "hours" => criteria.hours = Some(raw.to_string()),
                other => log::debug!("Ignoring unknown criteria key {:?}", other),
            }
        }
        criteria
    }

    /// Query-string pairs for the active criteria, in API order.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(order) = self.sort_by {
            pairs.push(("sortBy", order.to_string()));
        }
        if let Some(days) = self.date_posted {
            pairs.push(("datePosted", days.to_string()));
        }
        if let Some(range) = self.salary_range {
            pairs.push(("salaryRange", range.to_string()));
        }
        if self.is_remote {
            pairs.push(("isRemote", "true".to_string()));
        }
        let text_fields = [
            ("location", &self.location),
            ("company", &self.company),
            ("contractType", &self.contract_type),
            ("hours", &self.hours),
        ];
        for (key, value) in text_fields {
            if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
                pairs.push((key, value.to_string()));
            }
        }
        pairs
    }
}

/// Blank text means "not set". Anything else is kept verbatim.
fn non_empty(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}
