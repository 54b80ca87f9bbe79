use anyhow::Result;

pub mod args;
pub mod commands;
mod exit_status;
mod report;

pub use args::Arguments;
pub use exit_status::ExitStatus;

use args::Command;
use commands::{CommandResult, extract::extract, init::init};

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    let result = run(args)?;
    report::print(&result);

    Ok(if result.failure_count > 0 {
        ExitStatus::Failure
    } else {
        ExitStatus::Success
    })
}

fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Extract(cmd)) => extract(cmd),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
