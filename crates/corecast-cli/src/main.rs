use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use corecast_cli::config::Config;
use corecast_cli::console::{Console, StdConsole};
use corecast_cli::session::{offer_save, Session, SessionOutcome};
use corecast_cli::{exit_status, is_interrupted, preflight, signal};
use corecast_core::{Platform, StyleGuide};
use corecast_service::AnthropicService;
use tracing::info;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let config = Config::parse();
    let result = run(config);
    match &result {
        Ok(()) => {}
        Err(e) if is_interrupted(e) => println!("\n\n👋 Interrupted by user. Exiting..."),
        Err(e) => eprintln!("\n❌ Error: {e:#}"),
    }
    ExitCode::from(exit_status(&result))
}

fn run(config: Config) -> Result<()> {
    let guide = StyleGuide::standard();

    if config.list_platforms {
        for (i, p) in Platform::ALL.iter().enumerate() {
            println!("{:>2}. {:<10} {}", i + 1, p.as_str(), guide.guideline_for(*p));
        }
        return Ok(());
    }

    let service_config = preflight::check(&config)?;
    let prefill = config.prefill()?;
    signal::exit_cleanly_on_interrupt().context("install interrupt handler")?;

    let service = AnthropicService::new(service_config)?;
    info!("corecast starting");

    let mut console = StdConsole::new();
    let session = Session::new(&service, guide).with_prefill(prefill);

    match session.run(&mut console)? {
        SessionOutcome::Completed(report) => {
            offer_save(&mut console, &report, &config.output)?;
            console.write_line("")?;
            console.write_line("👋 Thank you for using corecast!")?;
        }
        SessionOutcome::Quit(_) => {}
    }

    Ok(())
}
