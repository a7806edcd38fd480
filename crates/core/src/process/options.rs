use std::time::Duration;

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(20);
pub const DEFAULT_STREAM_GRACE: Duration = Duration::from_millis(500);

/// How a single invocation is driven.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecuteOptions {
    /// Block until the child exits. When false, success is assumed.
    pub wait: bool,
    /// Primary invocations emit the preamble and can be cancelled.
    pub primary: bool,
    /// Reported instead of the real exit code.
    pub forced_status: Option<String>,
    /// Kill the child once it runs longer than this. `None` waits forever.
    pub timeout: Option<Duration>,
    pub poll_interval: Duration,
    /// How long to keep reading console streams after the child exits.
    pub stream_grace: Duration,
}

impl Default for ExecuteOptions {
    fn default() -> Self {
        Self::primary()
    }
}

impl ExecuteOptions {
    pub fn primary() -> Self {
        Self {
            wait: true,
            primary: true,
            forced_status: None,
            timeout: None,
            poll_interval: DEFAULT_POLL_INTERVAL,
            stream_grace: DEFAULT_STREAM_GRACE,
        }
    }

    pub fn secondary() -> Self {
        Self {
            primary: false,
            ..Self::primary()
        }
    }

    pub fn with_wait(mut self, wait: bool) -> Self {
        self.wait = wait;
        self
    }

    pub fn with_forced_status(mut self, status: impl Into<String>) -> Self {
        self.forced_status = Some(status.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    pub fn with_stream_grace(mut self, grace: Duration) -> Self {
        self.stream_grace = grace;
        self
    }
}
