use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    Terminal,
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Terminal => "terminal",
            OutputFormat::Json => "json",
        }
    }
}

/// CLI argument parsing with environment variable support.
///
/// Environment variables follow the pattern `COVTRACK_*` and are overridden
/// by CLI flags. Example: `COVTRACK_METRIC=deaths` is overridden by
/// `--metric cases`.
#[derive(Parser, Debug)]
#[command(name = "covtrack")]
#[command(about = "Terminal COVID-19 dashboard backed by the disease.sh API")]
#[command(version)]
pub struct Args {
    /// Country to focus on: an ISO2 code (US, IN, BR) or "worldwide"
    #[arg(default_value = "worldwide")]
    pub country: String,

    /// Metric driving the map, graph, and highlighted card
    #[arg(short, long, env = "COVTRACK_METRIC")]
    pub metric: Option<String>,

    /// Table row limit (0 shows all countries)
    #[arg(short, long, env = "COVTRACK_ROWS")]
    pub rows: Option<usize>,

    /// History window for the graph, in days
    #[arg(short, long, env = "COVTRACK_DAYS")]
    pub days: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "terminal", env = "COVTRACK_FORMAT")]
    pub format: OutputFormat,

    /// Refresh every N seconds instead of exiting after one frame
    #[arg(short, long, env = "COVTRACK_WATCH")]
    pub watch: Option<u64>,

    /// Override the statistics API base URL
    #[arg(long, env = "COVTRACK_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Request timeout in seconds
    #[arg(long, env = "COVTRACK_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Skip the world map panel
    #[arg(long)]
    pub no_map: bool,

    /// Skip the history graph panel
    #[arg(long)]
    pub no_graph: bool,

    /// Config file path
    #[arg(short, long, default_value = "covtrack.toml", env = "COVTRACK_CONFIG")]
    pub config: PathBuf,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short)]
    pub quiet: bool,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["covtrack"]);
        assert_eq!(args.country, "worldwide");
        assert_eq!(args.format, OutputFormat::Terminal);
        assert!(args.metric.is_none());
        assert!(!args.no_map);
    }

    #[test]
    fn test_country_and_flags() {
        let args = Args::parse_from(["covtrack", "IN", "-m", "deaths", "-r", "5", "--no-map"]);
        assert_eq!(args.country, "IN");
        assert_eq!(args.metric.as_deref(), Some("deaths"));
        assert_eq!(args.rows, Some(5));
        assert!(args.no_map);
    }

    #[test]
    fn test_json_format() {
        let args = Args::parse_from(["covtrack", "-f", "json"]);
        assert_eq!(args.format, OutputFormat::Json);
        assert_eq!(args.format.as_str(), "json");
    }
}
