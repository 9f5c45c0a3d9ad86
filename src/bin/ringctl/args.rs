use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use ringbuff::core::config::BufferConfig;

/// Cli interface to ringbuff
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct RingCtlArgs {
    /// Configuration file, extension is optional
    #[arg(short, long, default_value = "ringbuff")]
    pub config: String,
    /// Buffer capacity, overrides the configured one
    #[arg(short = 'n', long)]
    pub capacity: Option<i64>,
    /// Search mode (recent|oldest), overrides the configured one
    #[arg(short, long)]
    pub mode: Option<String>,
    #[arg(short, long, default_value = "plain")]
    pub out_format: OutFormat,
    #[clap(subcommand)]
    pub subcommand: Commands,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutFormat {
    Plain,
    Json
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Walk through every buffer operation on a few sample values
    Demo,
    /// Print input lines that are not already in the window
    Dedup(DedupArgs),
}

#[derive(Args, Debug)]
pub struct DedupArgs {
    /// Input file, stdin when missing
    #[arg(short, long)]
    pub input: Option<PathBuf>,
}

impl RingCtlArgs {
    pub fn override_config(&self, loaded: BufferConfig) -> BufferConfig {
        BufferConfig {
            capacity: self.capacity.unwrap_or(loaded.capacity),
            mode: self.mode.clone().unwrap_or(loaded.mode),
        }
    }
}
