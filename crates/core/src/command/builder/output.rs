//! Output and report options: where artifacts land and how verbose they are

use crate::params::{ParameterSet, keys, option_if_present};

/// Literal the test runner reads as "do not produce this artifact".
pub const NONE: &str = "NONE";

/// Log threshold passed through `--loglevel`. Anything outside the allow-list becomes `Info`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Fail,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn parse(value: &str) -> Self {
        match value.to_uppercase().as_str() {
            "FAIL" => LogLevel::Fail,
            "WARN" => LogLevel::Warn,
            "DEBUG" => LogLevel::Debug,
            "TRACE" => LogLevel::Trace,
            _ => LogLevel::Info,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Fail => "FAIL",
            LogLevel::Warn => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
            LogLevel::Trace => "TRACE",
        }
    }
}

pub(super) fn output_args(parameters: &ParameterSet) -> Vec<String> {
    let mut args = Vec::new();

    if parameters.flag(keys::TIMESTAMP_OUTPUTS) {
        args.push("--timestampoutputs".to_string());
    }

    if let Some(outputdir) = parameters.lookup(keys::OUTPUT_DIR) {
        args.push("--outputdir".to_string());
        args.push(outputdir.to_string());
        args.extend(option_if_present("--output", parameters.lookup(keys::OUTPUT), None));
        args.extend(option_if_present("--report", parameters.lookup(keys::REPORT), None));
        args.extend(option_if_present("--log", parameters.lookup(keys::LOG), None));
    } else {
        // Paths are meaningless without a base directory, so disable the artifacts.
        for (flag, key) in [
            ("--output", keys::OUTPUT),
            ("--report", keys::REPORT),
            ("--log", keys::LOG),
        ] {
            args.push(flag.to_string());
            args.push(parameters.get(key, NONE).to_string());
        }
    }

    args.extend(option_if_present("--xunit", parameters.lookup(keys::XUNIT), None));
    args.extend(option_if_present("--debugfile", parameters.lookup(keys::DEBUG_FILE), None));

    if let Some(level) = parameters.lookup(keys::LOG_LEVEL) {
        args.push("--loglevel".to_string());
        args.push(LogLevel::parse(level).as_str().to_string());
    }

    if parameters.flag(keys::NO_STATUS_RC) {
        args.push("--nostatusrc".to_string());
    }

    args
}
