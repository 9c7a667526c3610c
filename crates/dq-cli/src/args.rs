//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use dq_core::{OverflowPolicy, QueueBackend, SimConfig};

#[derive(Parser, Debug, Clone)]
#[command(version, about)]
pub struct Args {
    /// Input file: desk count, then `id/arrival/service` tokens.  Reads
    /// stdin when omitted.
    pub input: Option<PathBuf>,

    /// JSON file with a `SimConfig`; missing fields take their defaults.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// RNG seed for the two-choice draw.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Queue implementation used by every desk.
    #[arg(long, value_enum)]
    pub backend: Option<BackendArg>,

    /// Per-desk capacity of bounded queues.
    #[arg(long)]
    pub capacity: Option<usize>,

    /// What happens to passengers refused by a full desk.
    #[arg(long, value_enum)]
    pub overflow: Option<OverflowArg>,

    /// Stop reading input after this many passengers.
    #[arg(long)]
    pub max_passengers: Option<usize>,

    /// Also write the history as CSV to this path.
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Log more (-v info, -vv debug, -vvv trace).  Overrides RUST_LOG.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendArg {
    Bounded,
    Unbounded,
}

impl From<BackendArg> for QueueBackend {
    fn from(arg: BackendArg) -> Self {
        match arg {
            BackendArg::Bounded => QueueBackend::Bounded,
            BackendArg::Unbounded => QueueBackend::Unbounded,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverflowArg {
    Drop,
    Retry,
}

impl From<OverflowArg> for OverflowPolicy {
    fn from(arg: OverflowArg) -> Self {
        match arg {
            OverflowArg::Drop => OverflowPolicy::Drop,
            OverflowArg::Retry => OverflowPolicy::Retry,
        }
    }
}

impl Args {
    /// Overwrite every field of `config` that was given on the command line.
    pub fn apply_overrides(&self, config: &mut SimConfig) {
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(backend) = self.backend {
            config.backend = backend.into();
        }
        if let Some(capacity) = self.capacity {
            config.capacity = capacity;
        }
        if let Some(overflow) = self.overflow {
            config.overflow = overflow.into();
        }
        if let Some(max) = self.max_passengers {
            config.max_passengers = max;
        }
    }
}
