//! Recognised parameter names. Anything else is ignored.

pub const ENVIRONMENT: &str = "environment";

pub const OUTPUT_DIR: &str = "outputdir";
pub const OUTPUT: &str = "output";
pub const REPORT: &str = "report";
pub const LOG: &str = "log";
pub const XUNIT: &str = "xunit";
pub const DEBUG_FILE: &str = "debugfile";
pub const LOG_LEVEL: &str = "loglevel";
pub const NO_STATUS_RC: &str = "nostatusrc";
pub const TIMESTAMP_OUTPUTS: &str = "timestampoutputs";

pub const LISTENER: &str = "listener";

pub const EXTENSION: &str = "extension";
pub const TEST: &str = "test";
pub const TASK: &str = "task";
pub const SUITE: &str = "suite";
pub const INCLUDE: &str = "include";
pub const EXCLUDE: &str = "exclude";
pub const RANDOMIZE: &str = "randomize";

pub const VARIABLE: &str = "variable";
pub const VARIABLE_FILE: &str = "variablefile";

pub const TEST_SOURCE: &str = "test source";

pub const FORCE_STATUS_CODE: &str = "forceStatusCode";
