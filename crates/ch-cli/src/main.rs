use std::time::Duration;

use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

mod cli_args;
mod cli_command;
mod modules;

use crate::cli_args::*;
use crate::cli_command::handle_command;
use crate::modules::auth::OAuthEndpoints;
use crate::modules::system::{CommandContext, ConsoleReporter, FileConfigStore, OutputMode};

pub(crate) const API_KEY_ENV: &str = "CH_API_KEY";
pub(crate) const CONFIG_DIR_ENV: &str = "CH_CONFIG_DIR";
pub(crate) const READ_MAX_ATTEMPTS: u32 = 3;
pub(crate) const READ_RETRY_DELAY_MS: u64 = 500;
pub(crate) const LOGIN_TIMEOUT: Duration = Duration::from_secs(5 * 60);
pub(crate) const CALLBACK_SHUTDOWN_GRACE: Duration = Duration::from_secs(5);
const HTTP_TIMEOUT: Duration = Duration::from_secs(30);
const INTERRUPT_GRACE: Duration = Duration::from_secs(2);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;
    let output = OutputMode::from_flags(cli.json, cli.plain)?;
    let client = reqwest::Client::builder()
        .timeout(HTTP_TIMEOUT)
        .user_agent(concat!("ch/", env!("CARGO_PKG_VERSION")))
        .build()?;
    let store = FileConfigStore::from_env()?;
    tracing::debug!(path = %store.path().display(), "config store");
    let identity_url = cli
        .identity_url
        .as_deref()
        .unwrap_or(ch_core::DEFAULT_IDENTITY_URL);
    let endpoints = OAuthEndpoints::from_identity_url(identity_url);
    let reporter = ConsoleReporter::new(output);

    let cancel = CancellationToken::new();
    let interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            interrupt.cancel();
        }
    });

    let ctx = CommandContext {
        client: &client,
        api_url: &cli.api_url,
        endpoints: &endpoints,
        store: &store,
        output,
        reporter: &reporter,
        cancel: cancel.clone(),
    };

    // Flows that watch the token get a moment to clean up before we give up on them.
    tokio::select! {
        result = handle_command(cli.command, &ctx) => result,
        _ = async {
            cancel.cancelled().await;
            tokio::time::sleep(INTERRUPT_GRACE).await;
        } => anyhow::bail!("interrupted"),
    }
}

fn init_logging(verbosity: u8) -> anyhow::Result<()> {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(filter)?)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}
