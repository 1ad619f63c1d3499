use std::time::Duration;

use clap::Parser;
use tracing::Level;

use party_planner::core::sync;
use party_planner::view::{self, PartyForm};
use party_planner::{ApiClient, ApiConfig, AppState};

#[derive(Parser)]
#[command(name = "party-planner")]
#[command(about = "Browse, create and delete parties on the party API")]
struct Cli {
    /// Base URL of the API
    #[arg(long, value_name = "URL", default_value = party_planner::config::DEFAULT_BASE_URL)]
    base_url: String,

    /// Cohort path segment appended to the base URL
    #[arg(long, value_name = "NAME", default_value = party_planner::config::DEFAULT_COHORT)]
    cohort: String,

    /// Give up on requests after this many seconds
    #[arg(long, value_name = "SECS")]
    timeout_secs: Option<u64>,

    /// Print the rendered page instead of opening a window
    #[arg(long)]
    headless: bool,

    /// Party to show details for (headless only)
    #[arg(long, value_name = "ID")]
    select: Option<i64>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::INFO })
        .init();

    let config = ApiConfig::new(&args.base_url, &args.cohort)
        .with_timeout(args.timeout_secs.map(Duration::from_secs));
    config.validate()?;
    let client = ApiClient::new(&config)?;
    tracing::debug!(root = client.root(), "API configured");

    if !args.headless && cfg!(feature = "gui") {
        return run_gui(client);
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let page = runtime.block_on(headless(&client, args.select));
    println!("{page}");

    Ok(())
}

#[cfg(feature = "gui")]
fn run_gui(client: ApiClient) -> anyhow::Result<()> {
    use anyhow::Context;
    party_planner::gui::run(client).context("Failed to run GUI")
}

#[cfg(not(feature = "gui"))]
fn run_gui(_client: ApiClient) -> anyhow::Result<()> {
    anyhow::bail!("Built without the gui feature; pass --headless")
}

/// Load everything the page needs, then render it once as text.
async fn headless(client: &ApiClient, select: Option<i64>) -> String {
    let mut state = AppState::default();
    state.absorb(sync::refresh_parties(client).await);
    state.absorb(sync::refresh_rsvps(client).await);
    state.absorb(sync::refresh_guests(client).await);

    if let Some(id) = select {
        let ticket = state.begin_selection();
        state.absorb(sync::select_party(client, id, ticket).await);
    }

    view::render_text(&view::render(&state, &PartyForm::default()))
}
