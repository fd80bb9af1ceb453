use std::path::PathBuf;

use anyhow::{Context, Result};
use buddy_capture::engine::{ExchangeConfig, RevealPolicy};
use buddy_capture::session::Session;
use buddy_capture::storage::FileStore;
use buddy_capture::{log, tui};
use clap::{Parser, ValueEnum};
use tracing::Level;

const DEFAULT_WORK_DIR: &str = ".buddy-capture";

/// Secret Santa buddy assignments, revealed one person at a time
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory holding the saved exchange and logs
    #[arg(short, long, env = "BUDDY_CAPTURE_DIR")]
    work_dir: Option<PathBuf>,
    /// Seed for reproducible draws
    #[arg(short, long, env = "BUDDY_CAPTURE_SEED")]
    seed: Option<u64>,
    /// How a first-time reveal picks a buddy
    #[arg(short, long, value_enum, default_value_t = PolicyArg::Incremental)]
    policy: PolicyArg,
    /// Logging level
    #[arg(short, long, default_value = "info")]
    log_level: Level,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum PolicyArg {
    /// Draw per person; report when someone is left without a buddy
    Incremental,
    /// Draw per person; redeal everyone when someone is left without a buddy
    Fallback,
    /// Deal the whole group as one ring on the first reveal
    FullCycle,
}

impl From<PolicyArg> for RevealPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Incremental => RevealPolicy::Incremental,
            PolicyArg::Fallback => RevealPolicy::Fallback,
            PolicyArg::FullCycle => RevealPolicy::FullCycle,
        }
    }
}

fn main() -> Result<()> {
    let args = Cli::parse();

    let work_dir = match args.work_dir {
        Some(dir) => dir,
        None => home::home_dir()
            .context("could not locate home directory, pass --work-dir")?
            .join(DEFAULT_WORK_DIR),
    };

    let log_path = log::init(&log::log_dir(&work_dir), args.log_level)
        .context("failed to set up logging")?;

    let store = FileStore::open(&work_dir)
        .with_context(|| format!("failed to open work dir {}", work_dir.display()))?;
    let config = ExchangeConfig {
        seed: args.seed,
        policy: args.policy.into(),
    };
    let mut session = Session::open(store, config).context("failed to load saved exchange")?;
    tracing::info!(log = %log_path.display(), "buddy capture started");

    if let Err(e) = tui::run_app(&mut session) {
        tracing::error!(error = %e, "terminal error");
        eprintln!("Terminal error: {}", e);
    }
    Ok(())
}
