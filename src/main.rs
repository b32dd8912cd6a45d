//! CLI entry point for ccm.

mod cli;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use std::io;

use ccm::contract;
use ccm::formatters;

use crate::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "ccm", &mut io::stdout());
        return Ok(());
    }

    // Keep escape codes out of piped output
    if !atty::is(atty::Stream::Stdout) {
        colored::control::set_override(false);
    }

    let assessment = contract::assess(&cli.params())?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&assessment)?);
    } else {
        println!("{}", formatters::format_report(&assessment, cli.quiet));
    }

    Ok(())
}
