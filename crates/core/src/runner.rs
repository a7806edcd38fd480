//! Wires command assembly into process execution and reports to the host logger

use crate::{
    command::{ActionType, CommandBuilder, RobotCommand, build_command},
    config::{Config, ExecutionSettings},
    interfaces::{ActionLogger, TracingLogger},
    params::{ParameterSet, keys},
    process::{ExecuteOptions, InvocationResult, ProcessExecutor},
};
use std::sync::Arc;
use tracing::debug;

/// Status reported when an action fails before any process is launched.
pub const ACTION_ERROR: &str = "RobotRun-Action_ERROR";

pub struct RobotRunner {
    executor: ProcessExecutor,
    logger: Arc<dyn ActionLogger>,
    settings: ExecutionSettings,
}

impl Default for RobotRunner {
    fn default() -> Self {
        Self::new(Arc::new(TracingLogger))
    }
}

impl RobotRunner {
    pub fn new(logger: Arc<dyn ActionLogger>) -> Self {
        Self {
            executor: ProcessExecutor::new(Arc::clone(&logger)),
            logger,
            settings: ExecutionSettings::default(),
        }
    }

    pub fn with_settings(mut self, settings: ExecutionSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn from_config(config: &Config, logger: Arc<dyn ActionLogger>) -> Self {
        Self::new(logger).with_settings(config.execution.clone())
    }

    pub fn command_for(&self, parameters: &ParameterSet) -> RobotCommand {
        CommandBuilder::for_parameters(parameters).build()
    }

    /// Assemble and run the test runner, waiting for it to finish.
    pub fn execute(&self, parameters: &ParameterSet) -> InvocationResult {
        self.execute_action(ActionType::default(), parameters, true)
    }

    /// Like [`execute`](Self::execute) for an action type given by name.
    ///
    /// Unknown names yield a failed result rather than an error.
    pub fn execute_named(
        &self,
        action: &str,
        parameters: &ParameterSet,
        wait: bool,
    ) -> InvocationResult {
        match action.parse::<ActionType>() {
            Ok(action) => self.execute_action(action, parameters, wait),
            Err(e) => self.error_result(ACTION_ERROR, &e.to_string(), Some(&e)),
        }
    }

    pub fn execute_action(
        &self,
        action: ActionType,
        parameters: &ParameterSet,
        wait: bool,
    ) -> InvocationResult {
        let command = match build_command(action.as_str(), parameters) {
            Ok(command) => command,
            Err(e) => return self.error_result(ACTION_ERROR, &e.to_string(), Some(&e)),
        };

        let mut options = self.settings.primary_options().with_wait(wait);
        options.forced_status = parameters.lookup(keys::FORCE_STATUS_CODE).map(str::to_string);
        debug!("Executing {} with {:?}", action, options);

        let result = self.executor.execute(&command, &options);
        self.report(&result);
        result
    }

    /// Runs `<prefix> --version` for the configured environment.
    pub fn probe_version(&self, parameters: &ParameterSet) -> InvocationResult {
        let command = CommandBuilder::for_parameters(parameters).build_version_probe();
        let result = self.executor.execute(&command, &self.settings.primary_options());
        self.report(&result);
        result
    }

    /// Runs an auxiliary command, appending to the trace of an earlier result.
    pub fn execute_subprocess(
        &self,
        previous: InvocationResult,
        command: &RobotCommand,
        wait: bool,
    ) -> InvocationResult {
        let primary = self.settings.primary_options();
        let options = ExecuteOptions::secondary()
            .with_wait(wait)
            .with_poll_interval(primary.poll_interval)
            .with_stream_grace(primary.stream_grace);
        let result = self
            .executor
            .execute_with_trace(previous.into_trace(), command, &options);
        self.report(&result);
        result
    }

    /// Asks the running primary process to stop. Safe to call at any time.
    pub fn stop(&self) {
        self.executor.cancel();
    }

    pub fn is_running(&self) -> bool {
        self.executor.has_running_process()
    }

    fn report(&self, result: &InvocationResult) {
        self.logger.info(&format!(
            "{} => {}",
            result.request_trace(),
            result.status_code()
        ));
    }

    fn error_result(
        &self,
        code: &str,
        message: &str,
        cause: Option<&(dyn std::error::Error + 'static)>,
    ) -> InvocationResult {
        self.logger.error(message, cause);
        InvocationResult::failure(code, message)
    }
}
