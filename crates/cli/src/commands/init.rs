use anyhow::{Context, Result};
use robotrun_core::{Config, ParameterSet};
use std::{env, path::PathBuf};
use tracing::info;

pub fn init_command(cwd: Option<&str>, force: bool) -> Result<()> {
    let root = match cwd {
        Some(cwd) => PathBuf::from(cwd),
        None => env::current_dir().context("Failed to get current directory")?,
    };
    let root = root
        .canonicalize()
        .with_context(|| format!("Failed to canonicalize {}", root.display()))?;

    let config_path = root.join(".robotrun.json");
    if config_path.exists() && !force {
        println!("❌ Parameter file already exists at: {}", config_path.display());
        println!("   Use --force to overwrite");
        return Ok(());
    }

    let config = Config::with_parameters(ParameterSet::defaults());
    config
        .save_to_file(&config_path)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    info!("Wrote default parameters to {}", config_path.display());
    println!("✅ Created parameter file: {}", config_path.display());
    println!("\n📌 Edit the placeholder values, then run:");
    println!("   robotrun run --dry-run");
    Ok(())
}
