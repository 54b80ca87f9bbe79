//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `extract`: Extract Vietnamese text into a catalog and rewrite sources
//! - `init`: Initialize trich configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Extract(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct ExtractCommand {
    /// Source tree to scan
    pub source_root: PathBuf,

    /// Directory receiving the rewritten tree, catalog, and runtime module
    pub output_root: PathBuf,

    /// i18next namespace bound into the generated runtime module
    pub namespace: String,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract Vietnamese text into a translation catalog and rewrite sources
    Extract(ExtractCommand),
    /// Initialize a new .trichrc.json configuration file
    Init,
}
