use crate::core::Waiter;
use crate::utils::error::{Result, StepError};
use std::time::Duration;

/// Sleeps for the given number of milliseconds, then resolves with `"done!"`.
///
/// A not-a-number input fails immediately, before any timer is scheduled.
/// Negative values clamp to zero.
pub async fn wait(milliseconds: f64) -> Result<&'static str> {
    if milliseconds.is_nan() {
        return Err(StepError::NotANumberError);
    }

    tokio::time::sleep(Duration::from_millis(milliseconds as u64)).await;
    Ok("done!")
}

/// The real timer behind the `Waiter` port.
pub struct TokioWaiter;

#[async_trait::async_trait]
impl Waiter for TokioWaiter {
    async fn wait(&self, milliseconds: f64) -> Result<&'static str> {
        wait(milliseconds).await
    }
}
