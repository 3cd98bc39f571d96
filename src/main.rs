//! Activity Board CLI
//!
//! Command-line frontend for the activities backend:
//! - List activities with their rosters
//! - Sign up for an activity
//! - Unregister from an activity
//! - Generate a config file

use activity_board::board::text::{render_listing, render_notice};
use activity_board::config::{generate_default_config, Config, LoggingConfig, Resolved};
use activity_board::{ActivityBoard, BoardClient, Listing};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "activity-board")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Browse club activities and manage signups")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search the usual locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Backend URL, overrides the config file
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all activities
    List,

    /// Sign up for an activity
    Signup {
        /// Activity name
        activity: String,
        /// Participant email
        email: String,
    },

    /// Unregister from an activity
    Unregister {
        /// Activity name
        activity: String,
        /// Participant email
        email: String,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let Resolved { mut config, source, skipped } = Config::resolve(cli.config.as_deref())?;
    if let Some(url) = cli.api_url {
        config.api.base_url = url;
    }

    init_logging(&config.logging);
    for error in &skipped {
        tracing::warn!("Skipped config file: {}", error);
    }
    match &source {
        Some(path) => tracing::info!("Loaded config from {:?}", path),
        None => tracing::debug!("Using default config with environment overrides"),
    }

    let client = BoardClient::new(config.api.base_url.clone(), config.api.request_timeout())?;
    let mut board = ActivityBoard::new(client);

    match cli.command {
        Commands::List => {
            let listing = board.load_catalog().await;
            print_listing(listing, cli.format)?;
            if listing.is_failed() {
                return Ok(ExitCode::FAILURE);
            }
        }

        Commands::Signup { activity, email } => {
            board.submit_signup(&email, &activity).await;
            return report_action(&board, cli.format);
        }

        Commands::Unregister { activity, email } => {
            board.remove_participant(&email, &activity).await;
            return report_action(&board, cli.format);
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)?;
                    println!("Config written to {:?}", path);
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn init_logging(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG")
            .unwrap_or_else(|_| format!("activity_board={}", logging.level)),
    );

    let registry = tracing_subscriber::registry().with(filter);
    if logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn print_listing(listing: &Listing, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => print!("{}", render_listing(listing)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(listing)?),
    }
    Ok(())
}

/// Print the action's notice, then the refreshed listing when it succeeded
fn report_action(board: &ActivityBoard<BoardClient>, format: OutputFormat) -> anyhow::Result<ExitCode> {
    let Some(notice) = board.notice() else {
        return Ok(ExitCode::SUCCESS);
    };

    match format {
        OutputFormat::Table => {
            if notice.is_error() {
                eprintln!("{}", render_notice(notice));
            } else {
                println!("{}\n", render_notice(notice));
                print!("{}", render_listing(board.listing()));
            }
        }
        OutputFormat::Json => {
            let body = serde_json::json!({
                "notice": notice,
                "listing": board.listing(),
            });
            println!("{}", serde_json::to_string_pretty(&body)?);
        }
    }

    Ok(if notice.is_error() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
