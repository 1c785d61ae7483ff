use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// passgen - random password generator with a terminal form
#[derive(Parser, Debug)]
#[command(name = "passgen")]
#[command(about = "Generate random passwords from a terminal form or the command line")]
#[command(version)]
pub struct Cli {
    /// Password length (6-100)
    #[arg(short, long, global = true, default_value_t = 8, value_parser = clap::value_parser!(u8).range(6..=100))]
    pub length: u8,

    /// Include the digits 0-9
    #[arg(short, long, global = true)]
    pub digits: bool,

    /// Include the symbols !@#$%^&*-_+=[]{}~`
    #[arg(short, long, global = true)]
    pub symbols: bool,

    /// Write logs to this file (the form otherwise discards them)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Run the interactive password form (default)
    Tui,
    /// Print passwords without starting the form
    Generate {
        /// Number of passwords to print
        #[arg(short, long, default_value_t = 1)]
        count: usize,

        /// Print a JSON report instead of one password per line
        #[arg(long)]
        json: bool,

        /// Also copy the first password to the clipboard (OSC 52)
        #[arg(long)]
        copy: bool,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Whether this invocation runs the interactive form
    pub fn is_interactive(&self) -> bool {
        !matches!(self.command, Some(Commands::Generate { .. }))
    }
}
