//! CLI for the message relay.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use msgrelay::config::{Overrides, load_config};
use msgrelay::store::MessageLog;
use msgrelay::transport::start_http_server;
use msgrelay::utils::{RelayResult, logging};
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "msgrelay", about = "In-memory JSON message relay")]
struct Cli {
    /// Configuration file (defaults to the optional `config/default.*`)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Interface to bind, e.g. 0.0.0.0
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(long)]
    port: Option<u16>,

    /// Log level: error, warn, info, debug or trace
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = run_server(cli).await {
        // Logging may not be initialised yet if the config failed to load.
        logging::init("error");
        error!("Server failed: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

async fn run_server(cli: Cli) -> RelayResult<()> {
    dotenvy::dotenv().ok();

    let settings = load_config(cli.config.as_deref())?.apply(Overrides {
        host: cli.host,
        port: cli.port,
        log_level: cli.log_level,
    });

    logging::init(&settings.log.level);

    let log = Arc::new(MessageLog::new());
    start_http_server(&settings, log.clone()).await?;

    info!(messages = log.len(), "Message relay stopped");
    Ok(())
}
