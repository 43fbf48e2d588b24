use crate::core::{ActionHost, WaitReport, Waiter};
use crate::domain::model::time_of_day;
use crate::utils::error::Result;
use crate::utils::validation::parse_milliseconds;
use chrono::Local;

pub const INPUT_MILLISECONDS: &str = "milliseconds";
pub const OUTPUT_TIME: &str = "time";

pub struct StepRunner<H: ActionHost, W: Waiter> {
    host: H,
    waiter: W,
}

impl<H: ActionHost, W: Waiter> StepRunner<H, W> {
    pub fn new(host: H, waiter: W) -> Self {
        Self { host, waiter }
    }

    /// Runs the step and reports the outcome to the host. Any error raised
    /// along the way is forwarded to the host's failure channel rather than
    /// returned; `None` marks the run as failed.
    pub async fn run(&self) -> Option<WaitReport> {
        match self.execute().await {
            Ok(report) => Some(report),
            Err(e) => {
                tracing::error!("Step failed: {}", e);
                self.host.set_failed(&e.to_string());
                None
            }
        }
    }

    async fn execute(&self) -> Result<WaitReport> {
        // An absent input behaves like an empty one, which fails validation.
        let raw = self.host.get_input(INPUT_MILLISECONDS).unwrap_or_default();
        let milliseconds = parse_milliseconds(&raw)?;

        tracing::debug!("Waiting {} milliseconds ...", milliseconds);
        self.host
            .debug(&format!("Waiting {} milliseconds ...", milliseconds));

        let started_at = Local::now();
        self.host.debug(&time_of_day(started_at));

        self.waiter.wait(milliseconds as f64).await?;

        let finished_at = Local::now();
        self.host.debug(&time_of_day(finished_at));

        self.host.set_output(OUTPUT_TIME, &time_of_day(finished_at))?;

        Ok(WaitReport {
            waited_ms: milliseconds,
            started_at,
            finished_at,
        })
    }
}
