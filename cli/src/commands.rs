//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// JSON output
    Json,
}

/// CLI arguments for followup
#[derive(Parser, Debug)]
#[command(name = "followup")]
#[command(
    author,
    version,
    about = "Question encoding and call cost tools for the follow-up dashboard"
)]
#[command(long_about = r#"
Tools for the hospital follow-up call dashboard: encode and decode a
patient's custom questions, and break a call's cost down per service.

Pricing is loaded from (in priority order):
1. FOLLOWUP_PRICING_* environment variables
2. --config <path>     Explicit config file
3. ./followup.toml     Project-level config
4. Built-in defaults

Example:
  followup encode "How are you feeling?" "Any fever?"
  followup decode "1. How are you feeling?"
  followup cost --stt 0.012 --llm 0.034 --tts 0.021 --duration 180
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text", global = true)]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Ignore configuration files and environment; use built-in prices
    #[arg(long, global = true)]
    pub no_config: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Encode questions into the stored numbered-text form
    Encode {
        /// Questions in the order they are asked (at most 10)
        #[arg(required = true, value_name = "QUESTION")]
        questions: Vec<String>,
    },

    /// Decode a stored questions field (reads stdin when TEXT is omitted)
    Decode {
        text: Option<String>,
    },

    /// Break one call's cost down per service
    Cost {
        /// Speech-to-text cost
        #[arg(long, default_value_t = 0.0)]
        stt: f64,

        /// Language model cost
        #[arg(long, default_value_t = 0.0)]
        llm: f64,

        /// Text-to-speech cost
        #[arg(long, default_value_t = 0.0)]
        tts: f64,

        /// Call duration in seconds
        #[arg(long, short, default_value_t = 0)]
        duration: u64,
    },

    /// Estimate usage and metered costs from a transcript JSON file (stdin when omitted)
    Usage {
        file: Option<PathBuf>,

        /// Real call duration in seconds; estimated from the turn count otherwise
        #[arg(long, short)]
        duration: Option<u64>,
    },

    /// Check a patient phone number (+91 followed by 10 digits)
    Phone {
        number: String,
    },

    /// Print the effective pricing configuration
    Pricing,
}
