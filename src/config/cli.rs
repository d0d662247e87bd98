use crate::core::SecondLargestMode;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Debug, Clone, Parser)]
#[command(name = "small-tasks")]
#[command(about = "Second-largest and palindrome utilities with a case-file checker")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print the second-largest value of the given integers
    SecondLargest {
        #[arg(allow_negative_numbers = true)]
        values: Vec<i64>,

        #[arg(long, value_enum, default_value_t = SecondLargestMode::Literal)]
        mode: SecondLargestMode,
    },

    /// Report whether TEXT reads the same backwards
    Palindrome { text: String },

    /// Run every case in a TOML case file
    Check {
        #[arg(short, long, default_value = "tasks.toml")]
        config: String,

        /// Override the mode set in the case file
        #[arg(long, value_enum)]
        mode: Option<SecondLargestMode>,

        /// Print the report as JSON on stdout
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Compact,
    Json,
}
