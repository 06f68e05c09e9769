use clap::Parser;

mod cli;
mod commands;
mod output;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("board error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let config = board_config::BoardConfig::load_with_dotenv()?;
    let client = build_client(&cli, &config)?;

    commands::dispatch(cli.command, &client).await
}

/// Build the API client from config, honoring the `--base-url` override.
///
/// The transport is constructed here (timeout and user agent from config)
/// and injected, so the library never depends on the config crate.
fn build_client(
    cli: &cli::Cli,
    config: &board_config::BoardConfig,
) -> anyhow::Result<board_client::ApiClient> {
    let base_url = cli
        .base_url
        .clone()
        .unwrap_or_else(|| config.api.base_url.clone());

    let http = reqwest::Client::builder()
        .user_agent(config.api.user_agent.clone())
        .timeout(config.api.timeout())
        .build()
        .map_err(|error| anyhow::anyhow!("failed to build HTTP client: {error}"))?;

    tracing::debug!(%base_url, remote = config.api.is_remote(), "client configured");
    Ok(board_client::ApiClient::with_http(http, base_url))
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("SPRINTBOARD_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
