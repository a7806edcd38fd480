//! Execution-mode selector: which executable prefix launches the test runner

use crate::params::{ParameterSet, keys};

/// How the test runner is launched.
///
/// Parsing never fails: unknown values fall back to [`Environment::Python`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// `python -m robot`
    #[default]
    Python,
    /// `java -jar robotframework.jar`
    Java,
    /// A native `robot` launcher on the PATH.
    Ubuntu,
}

impl Environment {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_uppercase().as_str() {
            "JAVA" => Environment::Java,
            "UBUNTU" => Environment::Ubuntu,
            _ => Environment::Python,
        }
    }

    pub fn from_parameters(parameters: &ParameterSet) -> Self {
        Self::parse(parameters.get(keys::ENVIRONMENT, "PYTHON"))
    }

    pub fn prefix(&self) -> &'static [&'static str] {
        match self {
            Environment::Python => &["python", "-m", "robot"],
            Environment::Java => &["java", "-jar", "robotframework.jar"],
            Environment::Ubuntu => &["robot"],
        }
    }
}

pub(super) fn mode_args(parameters: &ParameterSet) -> Vec<String> {
    Environment::from_parameters(parameters)
        .prefix()
        .iter()
        .map(|s| s.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_case_insensitive() {
        assert_eq!(Environment::parse("java"), Environment::Java);
        assert_eq!(Environment::parse(" Ubuntu "), Environment::Ubuntu);
        assert_eq!(Environment::parse("PYTHON"), Environment::Python);
    }

    #[test]
    fn test_unknown_environment_falls_back_to_python() {
        assert_eq!(Environment::parse("windows"), Environment::Python);
        assert_eq!(Environment::parse(""), Environment::Python);
    }

    #[test]
    fn test_mode_args_default() {
        let args = mode_args(&ParameterSet::new());
        assert_eq!(args, vec!["python", "-m", "robot"]);
    }

    #[test]
    fn test_mode_args_java() {
        let params = ParameterSet::new().with("environment", "Java");
        assert_eq!(mode_args(&params), vec!["java", "-jar", "robotframework.jar"]);
    }
}
