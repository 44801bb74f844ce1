//! Per-criterion job predicates.
//!
//! Each predicate returns `true` when its criterion is absent.

use chrono::{DateTime, Utc};

use crate::models::{FilterCriteria, Job, SalaryRange};

const SECONDS_PER_DAY: f64 = 86_400.0;

/// True when the job satisfies every active criterion.
pub fn matches(job: &Job, criteria: &FilterCriteria, now: DateTime<Utc>) -> bool {
    location_matches(job, criteria.location.as_deref())
        && remote_matches(job, criteria.is_remote)
        && salary_matches(job, criteria.salary_range)
        && exact_matches(job.contract_type.as_deref(), criteria.contract_type.as_deref())
        && exact_matches(job.contract_time.as_deref(), criteria.hours.as_deref())
        && recency_matches(job, criteria.date_posted, now)
        && company_matches(job, criteria.company.as_deref())
}

fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

pub fn location_matches(job: &Job, location: Option<&str>) -> bool {
    location.is_none_or(|wanted| contains_folded(&job.location, wanted))
}

pub fn company_matches(job: &Job, company: Option<&str>) -> bool {
    company.is_none_or(|wanted| contains_folded(&job.company, wanted))
}

pub fn remote_matches(job: &Job, remote_only: bool) -> bool {
    !remote_only || job.is_remote
}

/// The job's whole salary range must sit inside the bucket.
pub fn salary_matches(job: &Job, range: Option<SalaryRange>) -> bool {
    range.is_none_or(|range| {
        let min = job.salary_min.unwrap_or(0.0);
        let max = job.salary_max.unwrap_or(f64::INFINITY);
        min >= range.min && max <= range.max
    })
}

pub fn exact_matches(value: Option<&str>, wanted: Option<&str>) -> bool {
    wanted.is_none_or(|wanted| value == Some(wanted))
}

/// Posted within the last `days` days. Unreadable dates never match.
pub fn recency_matches(job: &Job, days: Option<u32>, now: DateTime<Utc>) -> bool {
    let Some(days) = days else {
        return true;
    };
    match job.posted_at() {
        Some(posted) => {
            let age_days = (now - posted).num_seconds() as f64 / SECONDS_PER_DAY;
            age_days <= f64::from(days)
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap()
    }

    fn salaried(min: Option<f64>, max: Option<f64>) -> Job {
        Job {
            salary_min: min,
            salary_max: max,
            ..Job::default()
        }
    }

    fn posted(days_ago: i64) -> Job {
        Job {
            date_posted: Some((now() - Duration::days(days_ago)).to_rfc3339()),
            ..Job::default()
        }
    }

    #[test]
    fn test_location_case_insensitive_substring() {
        let job = Job {
            location: "Cambridge, Cambridgeshire".to_string(),
            ..Job::default()
        };
        assert!(location_matches(&job, Some("cambridge")));
        assert!(location_matches(&job, Some("SHIRE")));
        assert!(!location_matches(&job, Some("Ely")));
        assert!(location_matches(&job, None));
    }

    #[test]
    fn test_remote() {
        let office = Job::default();
        let remote = Job {
            is_remote: true,
            ..Job::default()
        };
        assert!(remote_matches(&office, false));
        assert!(!remote_matches(&office, true));
        assert!(remote_matches(&remote, true));
    }

    #[test]
    fn test_salary_containment() {
        let bucket = Some(SalaryRange::new(0.0, 30000.0));
        assert!(salary_matches(&salaried(Some(20000.0), Some(25000.0)), bucket));
        assert!(!salary_matches(&salaried(Some(25000.0), Some(35000.0)), bucket));
    }

    #[test]
    fn test_salary_bounds_are_inclusive() {
        let bucket = Some(SalaryRange::new(30000.0, 50000.0));
        assert!(salary_matches(&salaried(Some(30000.0), Some(50000.0)), bucket));
        assert!(!salary_matches(&salaried(Some(29999.0), Some(40000.0)), bucket));
    }

    #[test]
    fn test_salary_missing_bounds() {
        let bucket = Some(SalaryRange::new(0.0, 30000.0));
        // Missing max is unbounded, so it never fits a finite bucket.
        assert!(!salary_matches(&salaried(Some(10000.0), None), bucket));
        // Missing min counts as zero.
        assert!(salary_matches(&salaried(None, Some(20000.0)), bucket));
        assert!(!salary_matches(
            &salaried(None, Some(20000.0)),
            Some(SalaryRange::new(10000.0, 30000.0))
        ));
    }

    #[test]
    fn test_exact_matches_case_sensitive() {
        assert!(exact_matches(Some("permanent"), Some("permanent")));
        assert!(!exact_matches(Some("Permanent"), Some("permanent")));
        assert!(!exact_matches(None, Some("permanent")));
        assert!(exact_matches(None, None));
    }

    #[test]
    fn test_recency_window() {
        let job = posted(10);
        assert!(!recency_matches(&job, Some(7), now()));
        assert!(recency_matches(&job, Some(30), now()));
        assert!(recency_matches(&job, None, now()));
    }

    #[test]
    fn test_recency_fails_closed_on_bad_dates() {
        let garbled = Job {
            date_posted: Some("last tuesday".to_string()),
            ..Job::default()
        };
        assert!(!recency_matches(&garbled, Some(30), now()));
        assert!(!recency_matches(&Job::default(), Some(30), now()));
    }

    #[test]
    fn test_matches_composes_with_and() {
        let job = Job {
            location: "Cambridge".to_string(),
            is_remote: true,
            contract_type: Some("contract".to_string()),
            ..posted(2)
        };
        let criteria = FilterCriteria::new()
            .with_location("cam")
            .with_remote(true)
            .with_date_posted(7);
        assert!(matches(&job, &criteria, now()));

        let criteria = criteria.with_contract_type("permanent");
        assert!(!matches(&job, &criteria, now()));
    }
}
