//! CLI argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Map Endeca cartridge usage across rules, sites and pages
#[derive(Parser, Debug)]
#[command(name = "cartridgemapper")]
#[command(about = "Map Endeca cartridge usage across rules, sites and pages")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Map the cartridges of an extracted application export
    Map {
        /// Path to the extracted application directory
        path: PathBuf,

        /// Output directory
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Config file path
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format (html, json)
        #[arg(long)]
        format: Option<String>,

        /// Log debug output
        #[arg(long)]
        debug: bool,

        /// Disable colored log output
        #[arg(long)]
        disable_color: bool,

        /// Show a progress bar
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show version information
    Version,
}
