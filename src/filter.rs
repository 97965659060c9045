//! Discipline and time-window filtering of raw tick records.

use crate::dates::parse_record_date;
use crate::models::ActivityRecord;
use chrono::{Days, Months, NaiveDate};
use std::{fmt, str::FromStr};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectorError {
    #[error("invalid selector: {0}")]
    InvalidSelector(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisciplineSelector {
    All,
    Only(String),
}

impl DisciplineSelector {
    fn matches(&self, record: &ActivityRecord) -> bool {
        match self {
            Self::All => true,
            Self::Only(tag) => record.discipline.as_deref() == Some(tag.as_str()),
        }
    }
}

impl FromStr for DisciplineSelector {
    type Err = SelectorError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.trim().is_empty() {
            return Err(SelectorError::InvalidSelector(
                "discipline must not be blank".to_string(),
            ));
        }
        if value == "all" {
            Ok(Self::All)
        } else {
            Ok(Self::Only(value.to_string()))
        }
    }
}

impl fmt::Display for DisciplineSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Only(tag) => f.write_str(tag),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeWindow {
    LastWeek,
    LastMonth,
    LastThreeMonths,
    LastSixMonths,
    LastYear,
    LastTwoYears,
    AllTime,
}

impl TimeWindow {
    pub const ALL: [TimeWindow; 7] = [
        Self::LastWeek,
        Self::LastMonth,
        Self::LastThreeMonths,
        Self::LastSixMonths,
        Self::LastYear,
        Self::LastTwoYears,
        Self::AllTime,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::LastWeek => "lastWeek",
            Self::LastMonth => "lastMonth",
            Self::LastThreeMonths => "lastThreeMonths",
            Self::LastSixMonths => "lastSixMonths",
            Self::LastYear => "lastYear",
            Self::LastTwoYears => "lastTwoYears",
            Self::AllTime => "allTime",
        }
    }

    /// Records must fall strictly after this day. `None` means no lower bound.
    ///
    /// Month offsets that land past the end of the target month clamp to its
    /// last day, so 31 March minus one month is the end of February.
    pub fn boundary(self, today: NaiveDate) -> Option<NaiveDate> {
        let months = match self {
            Self::AllTime => return None,
            Self::LastWeek => {
                return Some(today.checked_sub_days(Days::new(7)).unwrap_or(NaiveDate::MIN));
            }
            Self::LastMonth => 1,
            Self::LastThreeMonths => 3,
            Self::LastSixMonths => 6,
            Self::LastYear => 12,
            Self::LastTwoYears => 24,
        };
        Some(
            today
                .checked_sub_months(Months::new(months))
                .unwrap_or(NaiveDate::MIN),
        )
    }
}

impl FromStr for TimeWindow {
    type Err = SelectorError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|window| window.as_str() == value)
            .ok_or_else(|| SelectorError::InvalidSelector(format!("unknown time window '{value}'")))
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn filter_records_at(
    today: NaiveDate,
    records: &[ActivityRecord],
    discipline: &DisciplineSelector,
    window: TimeWindow,
) -> Vec<ActivityRecord> {
    let boundary = window.boundary(today);

    records
        .iter()
        .filter(|record| discipline.matches(record))
        .filter(|record| match boundary {
            None => true,
            Some(boundary) => match parse_record_date(&record.date) {
                Some(date) => date > boundary,
                None => {
                    debug!(date = %record.date, "dropping tick with unparseable date");
                    false
                }
            },
        })
        .cloned()
        .collect()
}
