//! skillcards - Main CLI Entry Point

use clap::Parser;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use skillcards::{
    cli::{Args, Verbosity},
    console::TerminalConsole,
    gateway::LlmGateway,
    AppConfig, Result, ReviewSession, SessionStores, SessionSummary,
};

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    init_logging(args.verbosity());

    match run(&args).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            TerminalConsole::show_error(&e.to_string());
            ExitCode::from(e.exit_code())
        }
    }
}

fn init_logging(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.log_directive()));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .with(filter)
        .init();
}

async fn run(args: &Args) -> Result<SessionSummary> {
    let config = AppConfig::from_env(args)?;
    debug!(?config, "Configuration resolved");

    let gateway = LlmGateway::new(&config.gateway)?;
    let stores = SessionStores::from_paths(&config.paths);
    let mut console = TerminalConsole::new(config.verbosity.show_progress())?;

    let mut session = ReviewSession::new(&config.session, &stores, &gateway, &gateway);
    session.run(&mut console).await
}
