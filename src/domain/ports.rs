use crate::utils::error::Result;
use async_trait::async_trait;

/// Key-value surface the execution environment supplies to a step: inputs
/// in, outputs and diagnostics out.
pub trait ActionHost: Send + Sync {
    fn get_input(&self, name: &str) -> Option<String>;
    fn set_output(&self, name: &str, value: &str) -> Result<()>;
    fn debug(&self, message: &str);
    fn set_failed(&self, message: &str);
}

#[async_trait]
pub trait Waiter: Send + Sync {
    async fn wait(&self, milliseconds: f64) -> Result<&'static str>;
}
