use serde::{Deserialize, Serialize};

/// One logged ascent or session. `date` is kept exactly as it was logged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityRecord {
    #[serde(default)]
    pub discipline: Option<String>,
    pub date: String,
}

impl ActivityRecord {
    pub fn new(discipline: Option<&str>, date: impl Into<String>) -> Self {
        Self {
            discipline: discipline.map(str::to_string),
            date: date.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TickLog {
    pub ticks: Vec<ActivityRecord>,
}

#[derive(Debug, Deserialize)]
pub struct TickRequest {
    #[serde(default)]
    pub discipline: Option<String>,
    pub date: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TickResponse {
    pub tick: ActivityRecord,
    pub total_ticks: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DisciplineCount {
    pub discipline: String,
    pub ticks: usize,
}

#[derive(Debug, Deserialize)]
pub struct ActivityQuery {
    pub discipline: Option<String>,
    pub window: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MonthlyPoint {
    pub month: String,
    pub label: String,
    pub start_date: String,
    pub active_days: usize,
    pub days_in_month: u32,
    pub season: String,
    pub season_name: String,
    pub climbing_days_per_week: f64,
    pub rest_days_per_week: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ActivityResponse {
    pub discipline: String,
    pub window: String,
    pub months: Vec<MonthlyPoint>,
}
