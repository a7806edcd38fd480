//! Test-runner command generation

pub mod action;
pub mod builder;
pub mod robot_command;

// Re-export commonly used types
pub use action::{ActionType, build_command};
pub use builder::{CommandBuilder, Environment, LogLevel, Randomize};
pub use robot_command::RobotCommand;
