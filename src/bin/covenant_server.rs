//! Covenant dashboard backend server.
//!
//! Serves the portfolio snapshot (or the built-in demo portfolio) over the
//! REST boundary.
//!
//! # Usage
//!
//! ```bash
//! # Demo portfolio on the default port
//! cargo run --bin covenant_server
//!
//! # Snapshot file, JSON logs
//! cargo run --bin covenant_server -- --snapshot portfolio.json --log-format json
//! ```

use std::path::PathBuf;

use clap::Parser;
use tracing::{info, warn};

use covenant_guard::logging::{init_logging, LogConfig, LogFormat};
use covenant_guard::portfolio::{audit_portfolio, demo_portfolio, demo_rule};
use covenant_guard::server::{serve, ServerConfig};
use covenant_guard::{snapshot, Error, Result};

#[derive(Parser)]
#[command(name = "covenant_server")]
#[command(about = "Loan covenant monitoring backend")]
struct Cli {
    /// Bind address
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on
    #[arg(short, long, default_value = "8000")]
    port: u16,

    /// Portfolio snapshot file (JSON); omit to serve the built-in demo portfolio
    #[arg(long)]
    snapshot: Option<PathBuf>,

    /// Log format: pretty, json, or compact
    #[arg(long, default_value = "pretty")]
    log_format: String,

    /// Optional log file, written in addition to stdout
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Disable permissive CORS
    #[arg(long)]
    no_cors: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let format = LogFormat::parse(&cli.log_format).map_err(Error::Config)?;
    let _guard = init_logging(&LogConfig {
        format,
        log_file: cli.log_file.clone(),
        ..LogConfig::default()
    });

    let loans = match &cli.snapshot {
        Some(path) => {
            let loans = snapshot::load(path)?;
            info!(path = %path.display(), loans = loans.len(), "loaded portfolio snapshot");
            loans
        }
        None => {
            info!("no snapshot given; serving built-in demo portfolio");
            demo_portfolio()
        }
    };

    // Stored statuses stay authoritative, but flag drift from the
    // classification rules for covenants we have a rule for.
    for finding in audit_portfolio(&loans, demo_rule) {
        warn!(
            borrower = %finding.borrower_name,
            covenant = %finding.covenant_name,
            stored = finding.stored.as_str(),
            derived = finding.derived.as_str(),
            "stored covenant status diverges from classification rule"
        );
    }

    let config = ServerConfig {
        host: cli.host,
        port: cli.port,
        permissive_cors: !cli.no_cors,
    };

    serve(&config, loans).await
}
