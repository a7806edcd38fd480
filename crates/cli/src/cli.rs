use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use robotrun_core::{Parameter, command::ActionType};
use std::path::PathBuf;

use crate::commands::{check_command, init_command, run_command};

#[derive(Parser, Debug)]
#[command(name = "robotrun")]
#[command(version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Where parameters come from: a parameter file plus `-p` overrides.
#[derive(Args, Debug, Clone, Default)]
pub struct ParameterArgs {
    /// Parameter file (defaults to the nearest .robotrun.json / robotrun.json)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Extra parameter, appended after the file's entries (repeatable)
    #[arg(short = 'p', long = "param", value_name = "NAME=VALUE", value_parser = parse_parameter)]
    pub params: Vec<Parameter>,
}

fn parse_parameter(s: &str) -> Result<Parameter, String> {
    s.parse().map_err(|e: robotrun_core::Error| e.to_string())
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Assemble the test-runner command from parameters and run it
    #[command(visible_alias = "r")]
    Run {
        #[command(flatten)]
        parameters: ParameterArgs,

        /// Action type to assemble
        #[arg(long, default_value_t = ActionType::default().to_string())]
        action: String,

        /// Print the command without executing it
        #[arg(short, long)]
        dry_run: bool,

        /// Launch without waiting; success is assumed
        #[arg(long)]
        no_wait: bool,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Run the configured launcher with --version
    Check {
        #[command(flatten)]
        parameters: ParameterArgs,
    },
    /// Write a parameter file with the default parameters
    Init {
        /// Directory to write into (defaults to the current directory)
        #[arg(long)]
        cwd: Option<String>,

        /// Overwrite an existing parameter file
        #[arg(short, long)]
        force: bool,
    },
}

impl Commands {
    /// Execute the command
    pub fn execute(self) -> Result<()> {
        match self {
            Commands::Run {
                parameters,
                action,
                dry_run,
                no_wait,
                json,
            } => run_command(&parameters, &action, dry_run, !no_wait, json),
            Commands::Check { parameters } => check_command(&parameters),
            Commands::Init { cwd, force } => init_command(cwd.as_deref(), force),
        }
    }
}
