use anyhow::Result;

use super::super::args::ExtractCommand;
use super::{CommandResult, CommandSummary};
use crate::config::load_config;
use crate::core::{ExtractionOptions, run_extraction};

pub fn extract(cmd: ExtractCommand) -> Result<CommandResult> {
    let config_result = load_config(&cmd.source_root)?;
    if cmd.common.verbose && config_result.from_file {
        eprintln!("Using configuration from {}", crate::config::CONFIG_FILE_NAME);
    }

    let summary = run_extraction(&ExtractionOptions {
        source_root: cmd.source_root,
        output_root: cmd.output_root,
        namespace: cmd.namespace,
        config: config_result.config,
        verbose: cmd.common.verbose,
    })?;

    let failure_count = summary.failures.len();
    Ok(CommandResult {
        summary: CommandSummary::Extract(summary),
        failure_count,
    })
}
