//! Seed a demo portfolio snapshot.
//!
//! Administrative tool: writes the built-in demo loans to a JSON snapshot
//! that `covenant_server --snapshot` can serve.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin seed_snapshot -- --out portfolio.json
//! cargo run --bin seed_snapshot -- --out portfolio.json --force
//! ```

use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use covenant_guard::logging::{init_logging, LogConfig};
use covenant_guard::portfolio::demo_portfolio;
use covenant_guard::{snapshot, Error, Result};

#[derive(Parser)]
#[command(name = "seed_snapshot")]
#[command(about = "Write the demo loan portfolio to a JSON snapshot")]
struct Cli {
    /// Output snapshot path
    #[arg(long, default_value = "portfolio.json")]
    out: PathBuf,

    /// Overwrite an existing snapshot
    #[arg(long)]
    force: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _guard = init_logging(&LogConfig::default());

    if cli.out.exists() && !cli.force {
        return Err(Error::config(format!(
            "{} already exists (pass --force to overwrite)",
            cli.out.display()
        )));
    }

    let loans = demo_portfolio();
    snapshot::save(&cli.out, &loans)?;
    info!(path = %cli.out.display(), loans = loans.len(), "demo snapshot written");
    Ok(())
}
