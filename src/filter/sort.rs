//! Result ordering.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};

use crate::models::{Job, SortOrder};

/// Sort jobs in place. The sort is stable.
///
/// Ascending salary orders by `salary_min`, descending salary by
/// `salary_max`; a missing bound counts as zero. Dates sort newest first
/// with unreadable dates last.
pub fn sort_jobs<J: AsRef<Job>>(jobs: &mut [J], order: SortOrder) {
    match order {
        SortOrder::SalaryAsc => jobs.sort_by(|a, b| {
            salary(a.as_ref().salary_min).total_cmp(&salary(b.as_ref().salary_min))
        }),
        SortOrder::SalaryDesc => jobs.sort_by(|a, b| {
            salary(b.as_ref().salary_max).total_cmp(&salary(a.as_ref().salary_max))
        }),
        SortOrder::DatePosted => {
            jobs.sort_by(|a, b| newest_first(a.as_ref().posted_at(), b.as_ref().posted_at()))
        }
    }
}

fn salary(bound: Option<f64>) -> f64 {
    bound.unwrap_or(0.0)
}

fn newest_first(a: Option<DateTime<Utc>>, b: Option<DateTime<Utc>>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
