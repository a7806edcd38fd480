use anyhow::Result;
use robotrun_core::{RobotRunner, TracingLogger, command::Environment};
use std::sync::Arc;

use super::run::{exit_with, report};
use crate::cli::ParameterArgs;
use crate::utils::load_config;

pub fn check_command(args: &ParameterArgs) -> Result<()> {
    let config = load_config(args)?;
    let environment = Environment::from_parameters(&config.parameters);
    println!("🔍 Checking launcher: {}", environment.prefix().join(" "));

    let runner = RobotRunner::from_config(&config, Arc::new(TracingLogger));
    let result = runner.probe_version(&config.parameters);

    report(&result, false)?;
    exit_with(&result);
    Ok(())
}
