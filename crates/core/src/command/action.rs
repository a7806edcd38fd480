use crate::{
    command::{CommandBuilder, RobotCommand},
    error::{Error, Result},
    params::ParameterSet,
};
use std::{fmt, str::FromStr};

/// Action types the host can ask for. Each maps to one assembler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActionType {
    #[default]
    RobotFrameworkExecuteTest,
}

impl ActionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionType::RobotFrameworkExecuteTest => "RobotFramework-Execute-Test",
        }
    }
}

impl FromStr for ActionType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "RobotFramework-Execute-Test" => Ok(ActionType::RobotFrameworkExecuteTest),
            other => Err(Error::UnknownAction(other.to_string())),
        }
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Assemble the command for an action type given by name.
pub fn build_command(action: &str, parameters: &ParameterSet) -> Result<RobotCommand> {
    match action.parse::<ActionType>()? {
        ActionType::RobotFrameworkExecuteTest => {
            Ok(CommandBuilder::for_parameters(parameters).build())
        }
    }
}
