//! Monthly climbing-day aggregation.
//!
//! Buckets tick records by calendar month, fills in the months with no
//! activity so the series is contiguous, and derives the average climbing and
//! rest days per week for each month.

use crate::dates::{days_in_month, first_of_month, parse_record_date};
use crate::models::ActivityRecord;
use chrono::{Datelike, Months, NaiveDate};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use tracing::debug;

pub const DAYS_PER_WEEK: f64 = 7.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    pub fn name(self) -> &'static str {
        match self {
            Self::Spring => "Spring",
            Self::Summer => "Summer",
            Self::Fall => "Fall",
            Self::Winter => "Winter",
        }
    }
}

/// A season paired with the year it belongs to. Winter belongs to the year of
/// its December, so January 2024 is "Winter, 2023".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeasonLabel {
    pub season: Season,
    pub year: i32,
}

impl SeasonLabel {
    pub fn for_month(key: MonthKey) -> Self {
        let (season, year) = match key.month {
            12 => (Season::Winter, key.year),
            1 | 2 => (Season::Winter, key.year - 1),
            3..=5 => (Season::Spring, key.year),
            6..=8 => (Season::Summer, key.year),
            _ => (Season::Fall, key.year),
        };
        Self { season, year }
    }
}

impl fmt::Display for SeasonLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.season.name(), self.year)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthBucket {
    pub month_key: MonthKey,
    pub representative_date: NaiveDate,
    pub distinct_active_days: BTreeSet<NaiveDate>,
    pub season: SeasonLabel,
    pub average_climbing_days_per_week: f64,
    pub average_rest_days_per_week: f64,
}

impl MonthBucket {
    fn new(month_key: MonthKey, representative_date: NaiveDate) -> Self {
        Self {
            month_key,
            representative_date,
            distinct_active_days: BTreeSet::new(),
            season: SeasonLabel::for_month(month_key),
            average_climbing_days_per_week: 0.0,
            average_rest_days_per_week: DAYS_PER_WEEK,
        }
    }

    pub fn days_in_month(&self) -> u32 {
        days_in_month(self.month_key.year, self.month_key.month)
    }

    fn compute_ratio(&mut self) {
        let weeks = f64::from(self.days_in_month()) / DAYS_PER_WEEK;
        let climbing = if weeks > 0.0 {
            self.distinct_active_days.len() as f64 / weeks
        } else {
            0.0
        };
        self.average_climbing_days_per_week = climbing;
        self.average_rest_days_per_week = DAYS_PER_WEEK - climbing;
    }
}

pub fn aggregate(records: &[ActivityRecord]) -> Vec<MonthBucket> {
    let mut buckets: BTreeMap<MonthKey, MonthBucket> = BTreeMap::new();
    let mut first: Option<NaiveDate> = None;
    let mut last: Option<NaiveDate> = None;

    for record in records {
        let Some(date) = parse_record_date(&record.date) else {
            debug!(date = %record.date, "skipping tick with unparseable date");
            continue;
        };

        let key = MonthKey::of(date);
        buckets
            .entry(key)
            .or_insert_with(|| MonthBucket::new(key, first_of_month(date)))
            .distinct_active_days
            .insert(date);

        first = Some(first.map_or(date, |current| current.min(date)));
        last = Some(last.map_or(date, |current| current.max(date)));
    }

    let (Some(first), Some(last)) = (first, last) else {
        return Vec::new();
    };

    let end = first_of_month(last);
    let mut cursor = first_of_month(first);
    while cursor <= end {
        let key = MonthKey::of(cursor);
        buckets
            .entry(key)
            .or_insert_with(|| MonthBucket::new(key, cursor));
        match cursor.checked_add_months(Months::new(1)) {
            Some(next) => cursor = next,
            None => break,
        }
    }

    // BTreeMap iteration is already ascending by (year, month).
    buckets
        .into_values()
        .map(|mut bucket| {
            bucket.compute_ratio();
            bucket
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn tick(date: &str) -> ActivityRecord {
        ActivityRecord::new(Some("boulder"), date)
    }

    fn season_of(date: &str) -> String {
        let buckets = aggregate(&[tick(date)]);
        assert_eq!(buckets.len(), 1);
        buckets[0].season.to_string()
    }

    #[test]
    fn empty_input_yields_empty_series() {
        assert!(aggregate(&[]).is_empty());
        assert!(aggregate(&[tick("garbage"), tick("2024-13-40")]).is_empty());
    }

    #[test]
    fn season_labels_follow_winter_year_rule() {
        assert_eq!(season_of("2024-01-15"), "Winter, 2023");
        assert_eq!(season_of("2024-02-29"), "Winter, 2023");
        assert_eq!(season_of("2023-12-15"), "Winter, 2023");
        assert_eq!(season_of("2024-07-04"), "Summer, 2024");
        assert_eq!(season_of("2024-03-01"), "Spring, 2024");
        assert_eq!(season_of("2024-11-30"), "Fall, 2024");
    }

    #[test]
    fn gap_months_are_synthesized() {
        let records = vec![
            tick("2024-03-02"),
            tick("2024-03-09"),
            tick("2024-06-15"),
        ];
        let buckets = aggregate(&records);

        let months: Vec<String> = buckets.iter().map(|b| b.month_key.to_string()).collect();
        assert_eq!(months, vec!["2024-03", "2024-04", "2024-05", "2024-06"]);

        for gap in &buckets[1..3] {
            assert!(gap.distinct_active_days.is_empty());
            assert_eq!(gap.average_climbing_days_per_week, 0.0);
            assert_eq!(gap.average_rest_days_per_week, 7.0);
            assert_eq!(gap.season.season, Season::Spring);
        }
        assert_eq!(buckets[3].season.to_string(), "Summer, 2024");
        assert_eq!(buckets[0].distinct_active_days.len(), 2);
    }

    #[test]
    fn series_across_year_end_is_contiguous_and_sorted() {
        let records = vec![
            tick("2024-02-10"),
            tick("2023-10-03"),
            tick("Dec 24, 2023"),
        ];
        let buckets = aggregate(&records);
        let months: Vec<String> = buckets.iter().map(|b| b.month_key.to_string()).collect();
        assert_eq!(
            months,
            vec!["2023-10", "2023-11", "2023-12", "2024-01", "2024-02"]
        );
        assert!(buckets
            .windows(2)
            .all(|pair| pair[0].representative_date < pair[1].representative_date));
        assert_eq!(buckets[3].season.to_string(), "Winter, 2023");
        assert_eq!(buckets[0].representative_date, ymd(2023, 10, 1));
    }

    #[test]
    fn repeated_days_count_once() {
        let records = vec![
            tick("2024-04-01"),
            tick("2024-04-01"),
            ActivityRecord::new(Some("sport"), "April 1, 2024"),
            tick("2024-04-02T18:00:00"),
        ];
        let buckets = aggregate(&records);
        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0].distinct_active_days.len(), 2);
        // 2 days over 30/7 weeks.
        let expected = 2.0 / (30.0 / 7.0);
        assert!((buckets[0].average_climbing_days_per_week - expected).abs() < 1e-12);
    }

    #[test]
    fn climbing_and_rest_always_sum_to_seven() {
        let mut records = Vec::new();
        for day in 1..=31 {
            records.push(tick(&format!("2024-01-{day:02}")));
        }
        for day in (1..=29).step_by(3) {
            records.push(tick(&format!("2024-02-{day:02}")));
        }
        records.push(tick("2024-05-05"));

        let buckets = aggregate(&records);
        assert_eq!(buckets.len(), 5);
        for bucket in &buckets {
            assert_eq!(
                bucket.average_climbing_days_per_week + bucket.average_rest_days_per_week,
                7.0
            );
            assert!(bucket.average_climbing_days_per_week >= 0.0);
            assert!(bucket.average_climbing_days_per_week <= 7.0 + 1e-9);
            assert!(bucket.distinct_active_days.len() as u32 <= bucket.days_in_month());
        }
        assert!((buckets[0].average_climbing_days_per_week - 7.0).abs() < 1e-12);
    }

    #[test]
    fn unparseable_dates_are_skipped_not_fatal() {
        let records = vec![tick("2024-08-08"), tick("someday"), tick("2024-02-30")];
        let buckets = aggregate(&records);
        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0].month_key, MonthKey { year: 2024, month: 8 });
    }
}
