use anyhow::{Context, Result};
use robotrun_core::{Config, ParameterSet};
use std::env;
use tracing::debug;

use crate::cli::ParameterArgs;

/// Loads the parameter file (explicit or discovered) and appends the `-p` entries.
pub fn load_config(args: &ParameterArgs) -> Result<Config> {
    let path = match &args.config {
        Some(path) => Some(path.clone()),
        None => {
            let cwd = env::current_dir().context("Failed to get current directory")?;
            Config::find_config_file(&cwd)
        }
    };

    let mut config = match path {
        Some(path) => {
            debug!("Loading parameters from {}", path.display());
            Config::load_from_file(&path)
                .with_context(|| format!("Failed to load parameter file {}", path.display()))?
        }
        None => Config::default(),
    };

    config
        .parameters
        .extend(ParameterSet::from(args.params.clone()));
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use robotrun_core::Parameter;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_cli_params_follow_file_params() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("params.json");
        fs::write(
            &path,
            r#"{"parameters":[{"name":"test","value":"from-file"},{"name":"variable","value":"a:1"}]}"#,
        )
        .unwrap();

        let args = ParameterArgs {
            config: Some(path),
            params: vec![
                Parameter::new("test", "from-cli"),
                Parameter::new("variable", "b:2"),
            ],
        };
        let config = load_config(&args).unwrap();

        assert_eq!(config.parameters.lookup("test"), Some("from-cli"));
        assert_eq!(config.parameters.collect_all("variable"), vec!["a:1", "b:2"]);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let args = ParameterArgs {
            config: Some("/nonexistent/robotrun.json".into()),
            params: Vec::new(),
        };
        assert!(load_config(&args).is_err());
    }
}
