pub mod github;

use crate::utils::error::Result;
use crate::utils::validation::{parse_milliseconds, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "wait-step")]
#[command(about = "A workflow step that waits a number of milliseconds")]
pub struct CliConfig {
    /// Overrides the `milliseconds` input supplied by the workflow host,
    /// for running the step outside a runner.
    #[arg(long)]
    pub milliseconds: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(raw) = &self.milliseconds {
            parse_milliseconds(raw)?;
        }
        Ok(())
    }
}
