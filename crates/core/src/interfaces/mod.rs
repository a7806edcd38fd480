//! Interfaces for collaborators supplied by the host

pub mod logger;

pub use logger::{ActionLogger, LogLine, MemoryLogger, TracingLogger};
