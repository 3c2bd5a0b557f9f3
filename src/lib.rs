//! # covtrack
//!
//! A terminal dashboard for global and per-country COVID-19 statistics,
//! backed by the public disease.sh REST API.
//!
//! Data flows one direction:
//!
//! 1. **Fetch** - the [`api`] layer pulls the worldwide aggregate, the
//!    per-country list, and the cumulative history (plus one country's
//!    snapshot when a country is selected).
//! 2. **Transform** - the [`stats`] core ranks countries by case count and
//!    formats raw counts for display; [`view::ViewState`] captures the whole
//!    frame as an immutable value, rebuilt wholesale on every fetch.
//! 3. **Render** - the [`render`] panels (summary cards, world map, ranked
//!    table, history graph, or a JSON dump) turn the state into text.
//!
//! Watch mode repeats the cycle on an interval. Each refresh carries a
//! [`view::Generation`] token so a slow response can never overwrite a newer
//! frame.
//!
//! Configuration follows hierarchical precedence: config files, then
//! `COVTRACK_*` environment variables, then CLI flags (highest). The
//! [`MergedConfig`] struct is the resolved result used everywhere else.

pub mod api;
pub mod cli;
pub mod render;
pub mod stats;
pub mod utils;
pub mod view;

use crate::api::Metric;
use crate::api::client::StatClient;
use crate::api::disease_sh::DiseaseSh;
use crate::cli::args::OutputFormat;
use crate::utils::error::TrackerError;
use crate::view::{Generation, ViewState};
use anyhow::Result;
use console::style;
use indicatif::ProgressBar;
use std::time::Duration;

/// Final resolved configuration after merging all sources (CLI, env, config
/// files).
#[derive(Debug, Clone)]
pub struct MergedConfig {
    /// Country ISO2 code to focus on; `None` means worldwide.
    pub country: Option<String>,
    /// Metric driving the map, graph, and highlighted card.
    pub metric: Metric,
    /// Table row limit (0 = all).
    pub rows: usize,
    /// History window for the graph, in days.
    pub days: usize,
    /// Output format.
    pub format: OutputFormat,
    /// Refresh interval; `None` renders one frame and exits.
    pub watch: Option<Duration>,
    /// Statistics API base URL.
    pub endpoint: String,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Whether the map panel is drawn.
    pub show_map: bool,
    /// Whether the graph panel is drawn.
    pub show_graph: bool,
    /// Verbosity level (0-3).
    pub verbose: u8,
    /// Quiet mode (suppress spinner and non-error logs).
    pub quiet: bool,
}

/// Initialize the tracing subscriber from the verbosity flags.
pub fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        tracing::Level::ERROR
    } else {
        match verbose {
            0 => tracing::Level::INFO,
            1 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .try_init()
        .ok();
}

pub async fn run(config: MergedConfig) -> Result<()> {
    init_logging(config.verbose, config.quiet);

    tracing::info!("covtrack v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::debug!(
        "Configuration: endpoint={}, country={:?}, metric={}, days={}, rows={}",
        config.endpoint,
        config.country,
        config.metric.as_str(),
        config.days,
        config.rows
    );

    let source = DiseaseSh::new(config.endpoint.clone(), config.timeout)?;
    let client = StatClient::new(Box::new(source));
    tracing::debug!("Using statistics source at {}", client.endpoint());

    match config.watch {
        Some(interval) => watch(&client, &config, interval).await,
        None => {
            let state = refresh(&client, &config).await?;
            let frame = render_dashboard(&state, &config)?;
            print!("{frame}");
            Ok(())
        }
    }
}

/// Refresh loop for watch mode.
///
/// A failed refresh logs the error and leaves the previous frame on screen;
/// a stale response (one that lost the race to a newer tick) is discarded
/// without touching the display.
async fn watch(client: &StatClient, config: &MergedConfig, interval: Duration) -> Result<()> {
    let term = console::Term::stdout();
    let mut generation = Generation::new();
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;
        let token = generation.issue();

        match refresh(client, config).await {
            Ok(state) => {
                if !generation.is_current(token) {
                    tracing::debug!("Discarding stale refresh response");
                    continue;
                }
                let frame = render_dashboard(&state, config)?;
                term.clear_screen()?;
                term.write_str(&frame)?;
            }
            Err(e) => {
                tracing::error!("Refresh failed, keeping last frame: {e}");
            }
        }
    }
}

/// One full fetch cycle behind a spinner.
async fn refresh(client: &StatClient, config: &MergedConfig) -> Result<ViewState, TrackerError> {
    let spinner = fetch_spinner(config.quiet);
    spinner.set_message("Fetching statistics...");
    let result = fetch_state(client, config).await;
    spinner.finish_and_clear();
    result
}

/// Fetch everything a frame needs and assemble the view state.
///
/// The three worldwide requests are independent and run concurrently; the
/// single-country snapshot follows when a country is selected.
async fn fetch_state(
    client: &StatClient,
    config: &MergedConfig,
) -> Result<ViewState, TrackerError> {
    let (summary, countries, history) = tokio::try_join!(
        client.global(),
        client.countries(),
        client.history(config.days),
    )?;
    tracing::debug!("Fetched {} country records", countries.len());

    let mut state = ViewState::worldwide(config.metric)
        .with_summary(summary)
        .with_countries(&countries)
        .with_history(&history);

    if let Some(code) = &config.country {
        let snapshot = client.country(code).await?;
        state = state.select_country(code, snapshot);
    }

    Ok(state)
}

fn fetch_spinner(quiet: bool) -> ProgressBar {
    if quiet || !console::Term::stdout().is_term() {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new_spinner();
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

/// Render one frame in the configured output format.
fn render_dashboard(state: &ViewState, config: &MergedConfig) -> Result<String, TrackerError> {
    match config.format {
        OutputFormat::Json => render::json::render(state),
        OutputFormat::Terminal => {
            let mut out = String::new();
            out.push_str(&header(state));
            out.push('\n');
            out.push_str(&render::cards::render(state));
            out.push('\n');
            if config.show_map {
                out.push_str(&render::map::render(state));
                out.push('\n');
            }
            out.push_str(&render::table::render(state, config.rows));
            out.push('\n');
            if config.show_graph {
                out.push_str(&render::graph::render(state));
            }
            Ok(out)
        }
    }
}

fn header(state: &ViewState) -> String {
    let place = state
        .summary
        .country
        .as_deref()
        .unwrap_or("Worldwide");
    let updated = state
        .summary
        .updated
        .and_then(chrono::DateTime::from_timestamp_millis)
        .map(|t| format!("  (updated {})", t.format("%Y-%m-%d %H:%M UTC")))
        .unwrap_or_default();
    format!(
        "{} \u{2014} {place}{updated}\n",
        style("COVID-19 TRACKER").cyan().bold()
    )
}
