//! Listener and test-selection options

use crate::params::{ParameterSet, keys, option_if_present};

/// Execution-order randomisation accepted by `--randomize`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Randomize {
    Tests,
    Suites,
    All,
}

impl Randomize {
    /// `None` for anything outside `tests`, `suites`, `all`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "tests" => Some(Randomize::Tests),
            "suites" => Some(Randomize::Suites),
            "all" => Some(Randomize::All),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Randomize::Tests => "tests",
            Randomize::Suites => "suites",
            Randomize::All => "all",
        }
    }
}

pub(super) fn listener_args(parameters: &ParameterSet) -> Vec<String> {
    option_if_present("--listener", parameters.lookup(keys::LISTENER), None)
}

pub(super) fn selection_args(parameters: &ParameterSet) -> Vec<String> {
    let mut args = Vec::new();

    for (flag, key) in [
        ("--extension", keys::EXTENSION),
        ("--test", keys::TEST),
        ("--task", keys::TASK),
        ("--suite", keys::SUITE),
        ("--include", keys::INCLUDE),
        ("--exclude", keys::EXCLUDE),
    ] {
        args.extend(option_if_present(flag, parameters.lookup(key), None));
    }

    if let Some(randomize) = parameters.lookup(keys::RANDOMIZE).and_then(Randomize::parse) {
        args.push("--randomize".to_string());
        args.push(randomize.as_str().to_string());
    }

    args
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listener() {
        assert!(listener_args(&ParameterSet::new()).is_empty());

        let params = ParameterSet::new().with("listener", "Listener.py");
        assert_eq!(listener_args(&params), vec!["--listener", "Listener.py"]);
    }

    #[test]
    fn test_selection_order_is_fixed() {
        let params = ParameterSet::new()
            .with("exclude", "slow")
            .with("test", "Login*")
            .with("extension", "robot")
            .with("include", "smoke")
            .with("suite", "Checkout")
            .with("task", "Cleanup");

        assert_eq!(
            selection_args(&params),
            vec![
                "--extension", "robot", "--test", "Login*", "--task", "Cleanup", "--suite",
                "Checkout", "--include", "smoke", "--exclude", "slow",
            ]
        );
    }

    #[test]
    fn test_selection_is_last_wins() {
        let params = ParameterSet::new().with("test", "first").with("test", "second");
        assert_eq!(selection_args(&params), vec!["--test", "second"]);
    }

    #[test]
    fn test_randomize_validation() {
        let params = ParameterSet::new().with("randomize", "ALL");
        assert_eq!(selection_args(&params), vec!["--randomize", "all"]);

        let params = ParameterSet::new().with("randomize", "Suites");
        assert_eq!(selection_args(&params), vec!["--randomize", "suites"]);

        let params = ParameterSet::new().with("randomize", "bogus");
        assert!(selection_args(&params).is_empty());
    }
}
