pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::{github::GithubHost, CliConfig};
pub use crate::core::runner::{StepRunner, INPUT_MILLISECONDS, OUTPUT_TIME};
pub use crate::core::wait::{wait, TokioWaiter};
pub use crate::domain::model::WaitReport;
pub use crate::utils::error::{Result, StepError};
