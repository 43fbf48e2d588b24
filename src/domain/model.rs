use chrono::{DateTime, Local};
use serde::Serialize;

/// Record of one completed wait: the requested duration and the wall-clock
/// timestamps captured immediately before and after the delay.
#[derive(Debug, Clone, Serialize)]
pub struct WaitReport {
    pub waited_ms: i64,
    pub started_at: DateTime<Local>,
    pub finished_at: DateTime<Local>,
}

impl WaitReport {
    pub fn finished_at_text(&self) -> String {
        time_of_day(self.finished_at)
    }
}

/// Time-of-day text as it appears in the workflow log, e.g.
/// `14:30:05 GMT+0000`.
pub fn time_of_day(at: DateTime<Local>) -> String {
    at.format("%H:%M:%S GMT%z").to_string()
}
