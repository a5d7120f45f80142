//! Init command - Write the default `.zaplintrc.json`.
//!
//! The file holds the default rule preset, so running `check` right after
//! `init` behaves exactly like running it without a config file.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use colored::Colorize;

use super::super::exit_status::ExitStatus;
use super::super::report::SUCCESS_MARK;
use crate::config::{CONFIG_FILE_NAME, default_config_json};

pub fn init() -> Result<ExitStatus> {
    let config_path = Path::new(CONFIG_FILE_NAME);

    // Never clobber a hand-tuned rule set.
    if config_path.exists() {
        eprintln!(
            "{} {} already exists, remove it first to regenerate the defaults",
            "Error:".red().bold(),
            CONFIG_FILE_NAME
        );
        return Ok(ExitStatus::Failure);
    }

    let json = default_config_json().context("Failed to render the default rule preset")?;
    fs::write(config_path, json)
        .with_context(|| format!("Failed to write {}", CONFIG_FILE_NAME))?;
    println!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Created {} with the default rule preset", CONFIG_FILE_NAME).green()
    );

    Ok(ExitStatus::Success)
}
