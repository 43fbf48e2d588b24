use clap::Parser;
use wait_step::utils::{logger, validation::Validate};
use wait_step::{CliConfig, GithubHost, StepRunner, TokioWaiter, INPUT_MILLISECONDS};

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting wait-step");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let mut host = GithubHost::from_env();
    if let Some(raw) = &config.milliseconds {
        host.override_input(INPUT_MILLISECONDS, raw);
    }

    let runner = StepRunner::new(host, TokioWaiter);

    match runner.run().await {
        Some(report) => {
            tracing::info!("✅ Wait completed after {} ms", report.waited_ms);
            println!(
                "✅ Wait completed, time output set to {}",
                report.finished_at_text()
            );
        }
        None => {
            // The failure has already been reported on the host's channel.
            std::process::exit(1);
        }
    }
}
