//! Dispatch parsed arguments to their command handler.

use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{CommandResult, generate::generate, init::init},
};

pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Generate(cmd)) => generate(cmd.args),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
