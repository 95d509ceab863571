//! dayn CLI - puzzle-day scaffolding tool
//!
//! Usage: dayn <COMMAND>
//!
//! Commands:
//!   prepare  Scaffold the input directory, input file, and source stub for a day
//!   list     List days registered in the module manifest

mod cli;
mod commands;
mod ui;

use clap::Parser;

use crate::cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Prepare {
            ref day,
            ref root,
            ref template,
            dry_run,
        } => commands::prepare::cmd_prepare(
            day,
            root.as_deref(),
            template.as_deref(),
            dry_run,
            cli.json,
            cli.verbose,
        ),
        Commands::List { ref root } => commands::list::cmd_list(root.as_deref(), cli.json),
    };

    if let Err(err) = result {
        eprintln!("{}", ui::format_error(&err));
        std::process::exit(1);
    }
}
