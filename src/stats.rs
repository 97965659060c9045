use crate::aggregate::{aggregate, MonthBucket};
use crate::filter::{filter_records_at, DisciplineSelector, SelectorError, TimeWindow};
use crate::models::{ActivityRecord, ActivityResponse, DisciplineCount, MonthlyPoint, TickLog};
use chrono::{Local, NaiveDate};
use std::collections::BTreeMap;

pub fn build_activity(
    data: &TickLog,
    discipline: Option<&str>,
    window: Option<&str>,
) -> Result<ActivityResponse, SelectorError> {
    build_activity_at(Local::now().date_naive(), data, discipline, window)
}

pub fn build_activity_at(
    today: NaiveDate,
    data: &TickLog,
    discipline: Option<&str>,
    window: Option<&str>,
) -> Result<ActivityResponse, SelectorError> {
    let discipline: DisciplineSelector = discipline.unwrap_or("all").parse()?;
    let window: TimeWindow = window.unwrap_or("allTime").parse()?;

    let filtered = filter_records_at(today, &data.ticks, &discipline, window);
    let months = aggregate(&filtered).iter().map(monthly_point).collect();

    Ok(ActivityResponse {
        discipline: discipline.to_string(),
        window: window.to_string(),
        months,
    })
}

pub fn discipline_counts(ticks: &[ActivityRecord]) -> Vec<DisciplineCount> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for tick in ticks {
        if let Some(discipline) = tick.discipline.as_deref() {
            *counts.entry(discipline).or_default() += 1;
        }
    }

    counts
        .into_iter()
        .map(|(discipline, ticks)| DisciplineCount {
            discipline: discipline.to_string(),
            ticks,
        })
        .collect()
}

fn monthly_point(bucket: &MonthBucket) -> MonthlyPoint {
    MonthlyPoint {
        month: bucket.month_key.to_string(),
        label: bucket.representative_date.format("%b %Y").to_string(),
        start_date: bucket.representative_date.to_string(),
        active_days: bucket.distinct_active_days.len(),
        days_in_month: bucket.days_in_month(),
        season: bucket.season.to_string(),
        season_name: bucket.season.season.name().to_lowercase(),
        climbing_days_per_week: bucket.average_climbing_days_per_week,
        rest_days_per_week: bucket.average_rest_days_per_week,
    }
}
