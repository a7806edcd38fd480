//! Parameter-to-argument-vector assembly
//!
//! The command line is composed from independent option groups, always in
//! the same order: mode, output, listener, selection, variables, test source.
//! Each group reads only its own parameters and stays silent when they are
//! absent. Nothing here fails; bad input is omitted or defaulted.

mod mode;
mod output;
mod selection;
mod variables;


pub use self::mode::Environment;
pub use self::output::{LogLevel, NONE};
pub use self::selection::Randomize;

use crate::{command::RobotCommand, params::ParameterSet};
use tracing::debug;

/// Builds the test-runner invocation for a parameter set
///
/// # Example
/// ```
/// use robotrun_core::{command::CommandBuilder, params::ParameterSet};
///
/// let params = ParameterSet::new().with("environment", "ubuntu");
/// let command = CommandBuilder::for_parameters(&params).build();
/// assert_eq!(command.program(), Some("robot"));
/// ```
pub struct CommandBuilder<'a> {
    parameters: &'a ParameterSet,
}

impl<'a> CommandBuilder<'a> {
    pub fn for_parameters(parameters: &'a ParameterSet) -> Self {
        Self { parameters }
    }

    pub fn build(&self) -> RobotCommand {
        let groups = [
            mode::mode_args(self.parameters),
            output::output_args(self.parameters),
            selection::listener_args(self.parameters),
            selection::selection_args(self.parameters),
            variables::variable_args(self.parameters),
            variables::test_source_args(self.parameters),
        ];

        let mut command = RobotCommand::default();
        for group in groups {
            command.extend(group);
        }

        debug!("Assembled command: {}", command.to_request_line());
        command
    }

    /// `<prefix> --version` for the configured environment.
    pub fn build_version_probe(&self) -> RobotCommand {
        let mut command = RobotCommand::new(mode::mode_args(self.parameters));
        command.push("--version");
        command
    }
}
