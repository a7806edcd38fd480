//! robotrun - translate parameter sets into Robot Framework invocations
//!
//! This crate provides functionality to:
//! - Resolve host-supplied name/value parameters with last-wins and multi-value lookups
//! - Assemble an ordered argument vector for the test runner from those parameters
//! - Launch the command as a child process, capture its console streams, and
//!   report a normalized result that can be cancelled while in flight
pub mod command;
pub mod config;
pub mod error;
pub mod interfaces;
pub mod params;
pub mod process;
pub mod runner;

// Re-export commonly used types
pub use error::{Error, ExecutionError, Result};
pub use params::{Parameter, ParameterSet};

// Re-export main API components
pub use command::{ActionType, CommandBuilder, RobotCommand};
pub use config::Config;
pub use interfaces::{ActionLogger, MemoryLogger, TracingLogger};
pub use process::{ExecuteOptions, InvocationResult, ProcessExecutor};
pub use runner::RobotRunner;
