pub mod aggregate;
pub mod app;
pub mod dates;
pub mod errors;
pub mod filter;
pub mod handlers;
pub mod models;
pub mod stats;
pub mod storage;
pub mod ui;
pub mod state;

pub use aggregate::{aggregate, MonthBucket, MonthKey, Season, SeasonLabel};
pub use app::router;
pub use filter::{filter_records_at, DisciplineSelector, SelectorError, TimeWindow};
pub use models::ActivityRecord;
pub use state::AppState;
pub use storage::{load_data, resolve_data_path};
