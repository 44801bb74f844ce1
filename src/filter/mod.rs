//! Job filter and sort engine.
//!
//! A pure transformation from a job list and a [`FilterCriteria`] to a new
//! ordered list. Filters run first and compose by AND; the optional sort runs
//! on the survivors. Without a sort the input order is kept. The input is
//! never modified.

mod predicates;
mod sort;

use chrono::{DateTime, Utc};

use crate::models::{FilterCriteria, Job};

pub use predicates::matches;
pub use sort::sort_jobs;

/// Filter and sort `jobs` against the current time.
pub fn apply(jobs: &[Job], criteria: &FilterCriteria) -> Vec<Job> {
    apply_at(jobs, criteria, Utc::now())
}

/// Filter and sort `jobs` against an explicit clock.
pub fn apply_at(jobs: &[Job], criteria: &FilterCriteria, now: DateTime<Utc>) -> Vec<Job> {
    select_at(jobs, criteria, now).into_iter().cloned().collect()
}

/// Borrowing variant of [`apply_at`].
pub fn select_at<'a>(
    jobs: &'a [Job],
    criteria: &FilterCriteria,
    now: DateTime<Utc>,
) -> Vec<&'a Job> {
    let mut selected: Vec<&Job> = jobs
        .iter()
        .filter(|job| matches(job, criteria, now))
        .collect();

    if let Some(order) = criteria.sort_by {
        sort_jobs(&mut selected, order);
    }

    log::debug!(
        "Filtered {} jobs down to {} (sort: {:?})",
        jobs.len(),
        selected.len(),
        criteria.sort_by
    );
    selected
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SalaryRange, SortOrder};
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap()
    }

    fn board() -> Vec<Job> {
        let days_ago = |d: i64| Some((now() - Duration::days(d)).to_rfc3339());
        vec![
            Job {
                id: Some("1".into()),
                location: "Cambridge".into(),
                company: "Acme Labs".into(),
                salary_min: Some(50000.0),
                salary_max: Some(60000.0),
                contract_type: Some("permanent".into()),
                contract_time: Some("full_time".into()),
                date_posted: days_ago(3),
                ..Job::default()
            },
            Job {
                id: Some("2".into()),
                location: "Ely".into(),
                company: "Fenland Foods".into(),
                is_remote: true,
                salary_min: Some(20000.0),
                salary_max: Some(25000.0),
                contract_type: Some("contract".into()),
                contract_time: Some("part_time".into()),
                date_posted: days_ago(10),
                ..Job::default()
            },
            Job {
                id: Some("3".into()),
                location: "Cambridge Science Park".into(),
                company: "Acme Labs".into(),
                is_remote: true,
                salary_min: Some(30000.0),
                salary_max: None,
                contract_type: Some("permanent".into()),
                date_posted: Some("not a date".into()),
                ..Job::default()
            },
            Job {
                id: Some("4".into()),
                location: "Histon".into(),
                company: "Orbit".into(),
                salary_min: None,
                salary_max: Some(28000.0),
                contract_time: Some("full_time".into()),
                date_posted: days_ago(1),
                ..Job::default()
            },
        ]
    }

    fn ids(jobs: &[Job]) -> Vec<&str> {
        jobs.iter().map(|j| j.id.as_deref().unwrap_or("")).collect()
    }

    fn sample_criteria() -> Vec<FilterCriteria> {
        vec![
            FilterCriteria::new(),
            FilterCriteria::new().with_location("cambridge"),
            FilterCriteria::new().with_remote(true),
            FilterCriteria::new().with_salary_range(SalaryRange::new(0.0, 30000.0)),
            FilterCriteria::new().with_contract_type("permanent"),
            FilterCriteria::new().with_hours("full_time"),
            FilterCriteria::new().with_date_posted(7),
            FilterCriteria::new().with_company("acme"),
            FilterCriteria::new()
                .with_remote(true)
                .with_sort(SortOrder::SalaryDesc),
            FilterCriteria::new()
                .with_location("c")
                .with_sort(SortOrder::DatePosted),
        ]
    }

    #[test]
    fn test_empty_criteria_is_identity() {
        let jobs = board();
        assert_eq!(apply_at(&jobs, &FilterCriteria::new(), now()), jobs);
    }

    #[test]
    fn test_result_is_subsequence_satisfying_criteria() {
        let jobs = board();
        for criteria in sample_criteria() {
            let result = apply_at(&jobs, &criteria, now());
            assert!(result.iter().all(|job| matches(job, &criteria, now())));
            assert!(result.iter().all(|job| jobs.contains(job)));
            assert!(result.len() <= jobs.len());

            if criteria.sort_by.is_none() {
                let mut remaining = jobs.iter();
                for job in &result {
                    assert!(remaining.any(|j| j == job), "order changed for {:?}", criteria);
                }
            }
        }
    }

    #[test]
    fn test_idempotent() {
        let jobs = board();
        for criteria in sample_criteria() {
            let once = apply_at(&jobs, &criteria, now());
            let twice = apply_at(&once, &criteria, now());
            assert_eq!(once, twice, "not idempotent for {:?}", criteria);
        }
    }

    #[test]
    fn test_input_is_untouched() {
        let jobs = board();
        let before = jobs.clone();
        let criteria = FilterCriteria::new().with_sort(SortOrder::SalaryAsc);
        let sorted = apply_at(&jobs, &criteria, now());
        assert_eq!(jobs, before);
        assert_eq!(ids(&sorted), vec!["4", "2", "3", "1"]);
    }

    #[test]
    fn test_combined_filters() {
        let jobs = board();
        let criteria = FilterCriteria::new()
            .with_location("cambridge")
            .with_contract_type("permanent");
        assert_eq!(ids(&apply_at(&jobs, &criteria, now())), vec!["1", "3"]);

        let criteria = criteria.with_date_posted(7);
        assert_eq!(ids(&apply_at(&jobs, &criteria, now())), vec!["1"]);
    }

    #[test]
    fn test_salary_bucket() {
        let jobs = board();
        let criteria = FilterCriteria::new().with_salary_range(SalaryRange::new(0.0, 30000.0));
        assert_eq!(ids(&apply_at(&jobs, &criteria, now())), vec!["2", "4"]);
    }

    #[test]
    fn test_sort_after_filter() {
        let jobs = board();
        let criteria = FilterCriteria::new()
            .with_remote(true)
            .with_sort(SortOrder::SalaryDesc);
        assert_eq!(ids(&apply_at(&jobs, &criteria, now())), vec!["2", "3"]);
    }

    #[test]
    fn test_date_sort_is_non_increasing() {
        let jobs = board();
        let criteria = FilterCriteria::new().with_sort(SortOrder::DatePosted);
        let result = apply_at(&jobs, &criteria, now());
        assert_eq!(ids(&result), vec!["4", "1", "2", "3"]);

        let dates: Vec<_> = result.iter().filter_map(Job::posted_at).collect();
        assert!(dates.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_select_borrows() {
        let jobs = board();
        let criteria = FilterCriteria::new().with_company("ACME");
        let selected = select_at(&jobs, &criteria, now());
        assert_eq!(selected.len(), 2);
        assert!(std::ptr::eq(selected[0], &jobs[0]));
    }
}
