//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `generate`: Build material descriptors from docs and type indices
//! - `init`: Write a default `.matgenrc.json`

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::core::data::LocaleSelection;

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
            Some(Command::Generate(cmd)) => cmd.args.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by generation commands.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Locales to generate (overrides config file)
    #[arg(long, value_enum)]
    pub locale: Option<LocaleSelection>,

    /// Documentation root directory (overrides config file)
    #[arg(long)]
    pub docs_root: Option<PathBuf>,

    /// Type index directory (overrides config file)
    #[arg(long)]
    pub metadata_dir: Option<PathBuf>,

    /// Material output directory (overrides config file)
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Parser)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Build and report without writing any file
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub args: GenerateArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate editor material descriptors for every documented component
    Generate(GenerateCommand),
    /// Initialize a new .matgenrc.json configuration file
    Init,
}
