//! Request/response trace buffers for one logical action

/// First response line of every primary invocation.
pub const PREAMBLE: &str = "<?xml version=\"1.0\"?>";

/// Per-action trace state.
///
/// Lines are collected in order and joined with `\n` once the result is
/// produced. A secondary invocation continues the buffers of the primary
/// one, so its rendered trace is the concatenation of both.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trace {
    request: Vec<String>,
    response: Vec<String>,
}

impl Trace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_request(&mut self, line: impl Into<String>) {
        self.request.push(line.into());
    }

    pub fn record_response(&mut self, line: impl Into<String>) {
        self.response.push(line.into());
    }

    pub fn record_console(&mut self, stdout: &str) {
        self.record_response(format!("<console>\n{stdout}</console>"));
    }

    pub fn record_exit_code(&mut self, status_code: &str) {
        self.record_response(format!("<exitcode>{status_code}</exitcode>"));
    }

    pub fn record_error_message(&mut self, stderr: &str) {
        self.record_response(format!("<errormessage>\n{stderr}</errormessage>"));
    }

    pub fn record_exception(&mut self, message: impl std::fmt::Display) {
        self.record_response(format!("<exception>{message}</exception>"));
    }

    pub fn request_text(&self) -> String {
        self.request.join("\n")
    }

    pub fn response_text(&self) -> String {
        self.response.join("\n")
    }

    pub fn is_empty(&self) -> bool {
        self.request.is_empty() && self.response.is_empty()
    }
}
