use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// dayn - puzzle-day scaffolding tool
#[derive(Parser, Debug)]
#[command(name = "dayn")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Emit NDJSON events instead of human output
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scaffold the input directory, input file, and source stub for a day
    Prepare {
        /// Day identifier (used verbatim in paths and the module name)
        day: String,

        /// Repository root (discovered from the current directory when omitted)
        #[arg(long)]
        root: Option<PathBuf>,

        /// Stub template file (defaults to tools/dayn.rs under the root)
        #[arg(long)]
        template: Option<PathBuf>,

        /// Show what would be created without writing
        #[arg(long)]
        dry_run: bool,
    },

    /// List days registered in the module manifest
    List {
        /// Repository root (discovered from the current directory when omitted)
        #[arg(long)]
        root: Option<PathBuf>,
    },
}
