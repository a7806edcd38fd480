#![cfg(unix)]

use robotrun_core::{
    ExecuteOptions, MemoryLogger, ProcessExecutor, RobotCommand,
    process::PREAMBLE,
};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

fn sh(script: &str) -> RobotCommand {
    RobotCommand::new(vec!["sh".to_string(), "-c".to_string(), script.to_string()])
}

fn executor() -> (ProcessExecutor, Arc<MemoryLogger>) {
    let logger = Arc::new(MemoryLogger::new());
    (ProcessExecutor::new(logger.clone()), logger)
}

#[test]
fn test_successful_process_trace() {
    let (executor, logger) = executor();

    let result = executor.execute(&sh("printf 'hello\\n'"), &ExecuteOptions::primary());

    assert!(result.succeeded());
    assert_eq!(result.status_code(), "0");
    assert_eq!(result.request_trace(), "sh -c printf 'hello\\n'");
    assert_eq!(
        result.response_trace(),
        format!("{PREAMBLE}\n<console>\nhello\n</console>\n<exitcode>0</exitcode>")
    );
    assert!(logger.errors().is_empty());
}

#[test]
fn test_failing_process_captures_stderr() {
    let (executor, logger) = executor();

    let result = executor.execute(
        &sh("echo partial; echo 'boom' >&2; exit 2"),
        &ExecuteOptions::primary(),
    );

    assert!(!result.succeeded());
    assert_eq!(result.status_code(), "2");
    assert_eq!(
        result.response_trace(),
        format!(
            "{PREAMBLE}\n<console>\npartial\n</console>\n<exitcode>2</exitcode>\n<errormessage>\nboom\n</errormessage>"
        )
    );
    assert_eq!(logger.errors(), vec!["boom\n".to_string()]);
}

#[test]
fn test_failure_without_stderr_logs_nothing() {
    let (executor, logger) = executor();

    let result = executor.execute(&sh("exit 1"), &ExecuteOptions::primary());

    assert_eq!(result.status_code(), "1");
    assert!(result.response_trace().ends_with("<errormessage>\n</errormessage>"));
    assert!(logger.errors().is_empty());
}

#[test]
fn test_stderr_not_reported_on_success() {
    let (executor, logger) = executor();

    let result = executor.execute(&sh("echo noise >&2"), &ExecuteOptions::primary());

    assert!(result.succeeded());
    assert!(!result.response_trace().contains("<errormessage>"));
    assert!(logger.errors().is_empty());
}

#[test]
fn test_forced_status_overrides_exit_code() {
    let (executor, _) = executor();

    let result = executor.execute(
        &sh("exit 3"),
        &ExecuteOptions::primary().with_forced_status("0"),
    );
    assert!(result.succeeded());
    assert_eq!(result.status_code(), "0");
    assert!(result.response_trace().ends_with("<exitcode>0</exitcode>"));

    let result = executor.execute(
        &sh("exit 0"),
        &ExecuteOptions::primary().with_forced_status("PASSED"),
    );
    assert!(!result.succeeded());
    assert_eq!(result.status_code(), "PASSED");
    assert!(result.response_trace().contains("<errormessage>"));
}

#[test]
fn test_large_output_does_not_deadlock() {
    let (executor, _) = executor();
    let script = "i=0; while [ $i -lt 4000 ]; do \
                  echo 'a line of console output that is long enough to fill pipes'; \
                  echo 'and one for stderr as well' >&2; \
                  i=$((i+1)); done; exit 1";

    let result = executor.execute(
        &sh(script),
        &ExecuteOptions::primary().with_timeout(Some(Duration::from_secs(60))),
    );

    assert_eq!(result.status_code(), "1");
    assert!(result.response_trace().len() > 200_000);
}

#[test]
fn test_launch_failure_is_captured() {
    let (executor, logger) = executor();
    let command = RobotCommand::new(vec!["robotrun-no-such-executable".to_string()]);

    let result = executor.execute(&command, &ExecuteOptions::primary());

    assert!(!result.succeeded());
    assert_eq!(result.status_code(), "LaunchError");
    assert!(result.response_trace().starts_with(PREAMBLE));
    assert!(
        result
            .response_trace()
            .contains("<exception>failed to launch 'robotrun-no-such-executable'")
    );
    assert!(!result.response_trace().contains("<console>"));
    assert_eq!(logger.errors().len(), 1);
}

#[test]
fn test_empty_command_is_a_launch_failure() {
    let (executor, _) = executor();
    let result = executor.execute(&RobotCommand::default(), &ExecuteOptions::primary());
    assert_eq!(result.status_code(), "LaunchError");
}

#[test]
fn test_fire_and_forget_assumes_success() {
    let (executor, _) = executor();

    let result = executor.execute(
        &sh("sleep 1; exit 4"),
        &ExecuteOptions::primary().with_wait(false),
    );

    assert!(result.succeeded());
    assert_eq!(result.status_code(), "0");
    assert!(result.duration() < Duration::from_secs(1));
    assert!(result.response_trace().contains("<console>\n</console>"));
}

#[test]
fn test_timeout_kills_process() {
    let (executor, _) = executor();
    let started = Instant::now();

    let result = executor.execute(
        &sh("sleep 30"),
        &ExecuteOptions::primary().with_timeout(Some(Duration::from_millis(200))),
    );

    assert_eq!(result.status_code(), "TimeoutError");
    assert!(result.response_trace().contains("<exception>process did not finish"));
    assert!(started.elapsed() < Duration::from_secs(10));
    assert!(!executor.has_running_process());
}

#[test]
fn test_cancel_terminates_primary_process() {
    let (executor, _) = executor();
    let executor = Arc::new(executor);

    let worker = {
        let executor = Arc::clone(&executor);
        thread::spawn(move || executor.execute(&sh("exec sleep 30"), &ExecuteOptions::primary()))
    };

    let deadline = Instant::now() + Duration::from_secs(10);
    while !executor.has_running_process() {
        assert!(Instant::now() < deadline, "process never started");
        thread::sleep(Duration::from_millis(10));
    }
    executor.cancel();
    executor.cancel();

    let result = worker.join().unwrap();
    assert!(!result.succeeded());
    // SIGKILL
    assert_eq!(result.status_code(), "137");
    assert!(!executor.has_running_process());
}

#[test]
fn test_cancel_returns_while_grandchild_holds_pipes() {
    let (executor, _) = executor();
    let executor = Arc::new(executor);

    let worker = {
        let executor = Arc::clone(&executor);
        thread::spawn(move || {
            executor.execute(
                &sh("sleep 5; true"),
                &ExecuteOptions::primary().with_stream_grace(Duration::from_millis(200)),
            )
        })
    };

    let deadline = Instant::now() + Duration::from_secs(10);
    while !executor.has_running_process() {
        assert!(Instant::now() < deadline, "process never started");
        thread::sleep(Duration::from_millis(10));
    }
    let cancelled = Instant::now();
    executor.cancel();

    let result = worker.join().unwrap();
    assert!(cancelled.elapsed() < Duration::from_secs(3));
    assert_eq!(result.status_code(), "137");
    assert!(result.response_trace().contains("stream still open"));
}

#[test]
fn test_background_grandchild_does_not_block_exit() {
    let (executor, _) = executor();
    let started = Instant::now();

    let result = executor.execute(
        &sh("echo hi; sleep 5 & exit 0"),
        &ExecuteOptions::primary().with_stream_grace(Duration::from_millis(200)),
    );

    assert!(started.elapsed() < Duration::from_secs(3));
    assert!(result.succeeded());
    assert!(result.response_trace().contains("<console>\nhi\n</console>"));
    assert!(result.response_trace().contains(
        "<exception>failed to read process stream: stream still open after the process exited"
    ));
}

#[test]
fn test_secondary_process_is_not_cancellable() {
    let (executor, _) = executor();
    let executor = Arc::new(executor);

    let worker = {
        let executor = Arc::clone(&executor);
        thread::spawn(move || executor.execute(&sh("sleep 0.3"), &ExecuteOptions::secondary()))
    };

    thread::sleep(Duration::from_millis(100));
    assert!(!executor.has_running_process());
    executor.cancel();

    let result = worker.join().unwrap();
    assert!(result.succeeded());
}

#[test]
fn test_cancel_before_and_after_invocation_is_harmless() {
    let (executor, _) = executor();
    executor.cancel();

    let first = executor.execute(&sh("exit 0"), &ExecuteOptions::primary());
    assert!(first.succeeded());

    executor.cancel();
    let second = executor.execute(&sh("echo again"), &ExecuteOptions::primary());
    assert!(second.succeeded());
    assert!(second.response_trace().contains("again"));
}

#[test]
fn test_secondary_continues_primary_trace() {
    let (executor, _) = executor();

    let primary = executor.execute(&sh("echo one"), &ExecuteOptions::primary());
    let secondary = executor.execute_with_trace(
        primary.into_trace(),
        &sh("echo two"),
        &ExecuteOptions::secondary(),
    );

    assert_eq!(secondary.request_trace(), "sh -c echo one\nsh -c echo two");
    assert_eq!(
        secondary.response_trace(),
        format!(
            "{PREAMBLE}\n<console>\none\n</console>\n<exitcode>0</exitcode>\n<console>\ntwo\n</console>\n<exitcode>0</exitcode>"
        )
    );
}
