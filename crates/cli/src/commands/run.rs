use anyhow::{Context, Result};
use robotrun_core::{InvocationResult, RobotRunner, TracingLogger, command::build_command};
use std::sync::Arc;
use tracing::{debug, info};

use crate::cli::ParameterArgs;
use crate::display::{print_command_breakdown, print_result};
use crate::utils::load_config;

pub fn run_command(
    args: &ParameterArgs,
    action: &str,
    dry_run: bool,
    wait: bool,
    json: bool,
) -> Result<()> {
    let config = load_config(args)?;
    debug!("Loaded {} parameters", config.parameters.len());

    if dry_run {
        let command = build_command(action, &config.parameters)
            .with_context(|| format!("Failed to assemble command for '{action}'"))?;
        println!("{}", command.to_shell_command());
        print_command_breakdown(&command);
        return Ok(());
    }

    let runner = RobotRunner::from_config(&config, Arc::new(TracingLogger));
    let result = runner.execute_named(action, &config.parameters, wait);
    info!("Finished with status {}", result.status_code());

    report(&result, json)?;
    exit_with(&result);
    Ok(())
}

pub(crate) fn report(result: &InvocationResult, json: bool) -> Result<()> {
    if json {
        let rendered =
            serde_json::to_string_pretty(result).context("Failed to serialize result")?;
        println!("{rendered}");
    } else {
        print_result(result);
    }
    Ok(())
}

/// Mirrors the child's exit code; non-numeric statuses exit with 1.
pub(crate) fn exit_with(result: &InvocationResult) {
    if !result.succeeded() {
        std::process::exit(result.exit_code().filter(|code| *code != 0).unwrap_or(1));
    }
}
