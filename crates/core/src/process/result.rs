use super::trace::Trace;
use serde::Serialize;
use std::time::Duration;

/// Outcome of one `execute` call.
///
/// `succeeded` is derived from `status_code` and cannot be set on its own.
#[derive(Debug, Clone, Serialize)]
pub struct InvocationResult {
    succeeded: bool,
    status_code: String,
    request_trace: String,
    response_trace: String,
    #[serde(with = "duration_millis")]
    duration: Duration,
    #[serde(skip)]
    trace: Trace,
}

impl InvocationResult {
    pub(crate) fn new(status_code: String, trace: Trace, duration: Duration) -> Self {
        Self {
            succeeded: status_code == "0",
            request_trace: trace.request_text(),
            response_trace: trace.response_text(),
            status_code,
            duration,
            trace,
        }
    }

    /// A failed result for problems that occur before any process exists.
    pub fn failure(status_code: impl Into<String>, message: impl Into<String>) -> Self {
        let mut trace = Trace::new();
        trace.record_response(message.into());
        Self::new(status_code.into(), trace, Duration::ZERO)
    }

    pub fn succeeded(&self) -> bool {
        self.succeeded
    }

    pub fn status_code(&self) -> &str {
        &self.status_code
    }

    pub fn request_trace(&self) -> &str {
        &self.request_trace
    }

    pub fn response_trace(&self) -> &str {
        &self.response_trace
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Numeric exit code, when the status is one.
    pub fn exit_code(&self) -> Option<i32> {
        self.status_code.parse().ok()
    }

    /// Hands the trace buffers to a follow-up (secondary) invocation.
    pub fn into_trace(self) -> Trace {
        self.trace
    }
}

mod duration_millis {
    use serde::Serializer;
    use std::time::Duration;

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(duration.as_millis() as u64)
    }
}
