mod compare;
mod config;
mod error;
mod output;
mod provider;

use clap::Parser;
use h2h_core::{CollisionPolicy, IndexOptions, ResultFilter, SignatureMode};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::compare::{CompareSettings, compare};
use crate::provider::{ProviderConfig, ResultsProvider};

pub fn bail(msg: impl std::fmt::Display) -> ! {
    eprintln!("Error: {msg}");
    std::process::exit(1);
}

#[derive(Parser)]
#[command(
    name = "h2h",
    version,
    about = "Head-to-head record of two athletes in races they both ran",
    args_conflicts_with_subcommands = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    compare: CompareArgs,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Create a default config file at ~/.config/h2h/config.toml
    Init,
}

#[derive(clap::Args)]
struct CompareArgs {
    /// First athlete's name (default: Cole Hocker)
    athlete_a: Option<String>,

    /// Second athlete's name (default: Cooper Teare)
    athlete_b: Option<String>,

    /// Only compare results from this year
    #[arg(long)]
    year: Option<u32>,

    /// Results API base URL
    #[arg(long)]
    endpoint: Option<String>,

    /// Path to config file (default: ~/.config/h2h/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Only report races in this discipline (e.g. "1500 Metres")
    #[arg(long)]
    discipline: Option<String>,

    /// Ignore heats, semi-finals and qualifying rounds
    #[arg(long)]
    finals_only: bool,

    /// Ignore relay events
    #[arg(long)]
    exclude_relays: bool,

    /// When an athlete has two results for one race:
    /// "keep-last", "keep-first", "best-place" or "error". Default: keep-last.
    #[arg(long)]
    on_collision: Option<String>,

    /// Match races by calendar day, ignoring any time part of the date
    #[arg(long)]
    match_by_day: bool,

    /// Output JSON instead of the text report
    #[arg(long)]
    json: bool,

    /// Show debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "h2h=debug,h2h_core=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_collision_policy(value: Option<&str>) -> CollisionPolicy {
    match value {
        Some("keep-last") | None => CollisionPolicy::KeepLast,
        Some("keep-first") => CollisionPolicy::KeepFirst,
        Some("best-place") => CollisionPolicy::BestPlace,
        Some("error") => CollisionPolicy::Error,
        Some(other) => bail(format!(
            "Unknown collision policy \"{other}\". Use \"keep-last\", \"keep-first\", \"best-place\" or \"error\"."
        )),
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init) => {
            let path = config::create_default_config();
            println!("Created config at {}", path.display());
            println!("Edit it to set your default endpoint, athletes, etc.");
        }
        None => run_compare(cli.compare).await,
    }
}

async fn run_compare(args: CompareArgs) {
    init_logging(args.verbose);

    // Load config file, merge with CLI args (CLI wins)
    let config_path = args.config.clone().unwrap_or_else(config::config_path);
    let cfg = config::load_config(&config_path);

    let provider_config = ProviderConfig {
        endpoint: args
            .endpoint
            .clone()
            .or(cfg.endpoint)
            .unwrap_or_else(|| config::DEFAULT_ENDPOINT.to_string()),
        timeout_secs: cfg.timeout_secs.unwrap_or(config::DEFAULT_TIMEOUT_SECS),
        connect_timeout_secs: config::DEFAULT_CONNECT_TIMEOUT_SECS,
    };

    let settings = CompareSettings {
        athlete_a: args
            .athlete_a
            .or(cfg.athlete_a)
            .unwrap_or_else(|| config::DEFAULT_ATHLETE_A.to_string()),
        athlete_b: args
            .athlete_b
            .or(cfg.athlete_b)
            .unwrap_or_else(|| config::DEFAULT_ATHLETE_B.to_string()),
        year: args.year.or(cfg.year),
        filter: ResultFilter {
            finals_only: args.finals_only,
            exclude_relays: args.exclude_relays,
        },
        index: IndexOptions {
            mode: if args.match_by_day {
                SignatureMode::DayPrecision
            } else {
                SignatureMode::Exact
            },
            collision: parse_collision_policy(args.on_collision.as_deref()),
        },
        discipline: args.discipline,
        quiet_stdout: args.json,
    };

    tracing::debug!(endpoint = %provider_config.endpoint, a = %settings.athlete_a, b = %settings.athlete_b, "starting comparison");

    let provider = ResultsProvider::new(&provider_config).unwrap_or_else(|e| bail(e));
    let comparison = compare(&provider, &settings).await.unwrap_or_else(|e| bail(e));

    if args.json {
        output::print_json(&comparison.record);
        return;
    }

    output::print_report(&comparison.record);
    if comparison.shared_races == 0 {
        output::print_sample_keys(&comparison.index_a, &comparison.index_b);
    }
}
