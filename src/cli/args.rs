//! CLI argument definitions using clap.
//!
//! This module defines the command-line interface structure for all zaplint
//! commands. It uses clap's derive API for declarative argument parsing.
//!
//! ## Commands
//!
//! - `check`: Check logging call sites against the configured rules
//! - `fix`: Apply suggested fixes (key renames) to Go sources
//! - `init`: Initialize zaplint configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::core::policy::Options;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Check(cmd)) => cmd.args.common.verbose,
            Some(Command::Fix(cmd)) => cmd.args.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Root the dumps' Go file paths are relative to; the config file is searched from here
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    #[command(flatten)]
    pub rules: RuleArgs,
}

/// Rule switches. Each one overrides the config file.
#[derive(Debug, Clone, Default, Args)]
pub struct RuleArgs {
    /// Forbid the global loggers zap.L() and zap.S()
    #[arg(long, value_name = "BOOL", num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub no_global: Option<bool>,

    /// Forbid SugaredLogger
    #[arg(long, value_name = "BOOL", num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub no_sugar: Option<bool>,

    /// Require messages to be string literals or constants
    #[arg(long, value_name = "BOOL", num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub static_msg: Option<bool>,

    /// Message style: lowercased or capitalized (empty to disable)
    #[arg(long, value_name = "STYLE")]
    pub msg_style: Option<String>,

    /// Forbid keys written as string literals
    #[arg(long, value_name = "BOOL", num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub no_raw_keys: Option<bool>,

    /// Key naming case: snake, kebab, camel or pascal (empty to disable)
    #[arg(long, value_name = "CASE")]
    pub key_naming_case: Option<String>,

    /// Comma-separated keys to forbid, added to the configured ones
    #[arg(long, value_name = "KEYS", value_delimiter = ',')]
    pub forbidden_keys: Vec<String>,

    /// Require trailing arguments to be put on separate lines
    #[arg(long, value_name = "BOOL", num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub args_on_sep_lines: Option<bool>,
}

impl RuleArgs {
    /// Apply the switches that were given on top of `options`.
    pub fn apply_to(&self, options: &mut Options) {
        if let Some(value) = self.no_global {
            options.no_global = value;
        }
        if let Some(value) = self.no_sugar {
            options.no_sugar = value;
        }
        if let Some(value) = self.static_msg {
            options.static_msg = value;
        }
        if let Some(ref style) = self.msg_style {
            options.msg_style = Some(style.clone());
        }
        if let Some(value) = self.no_raw_keys {
            options.no_raw_keys = value;
        }
        if let Some(ref case) = self.key_naming_case {
            options.key_naming_case = Some(case.clone());
        }
        options.forbidden_keys.extend(
            self.forbidden_keys
                .iter()
                .map(|key| key.trim())
                .filter(|key| !key.is_empty())
                .map(String::from),
        );
        if let Some(value) = self.args_on_sep_lines {
            options.args_on_sep_lines = value;
        }
    }
}

#[derive(Debug, Parser)]
pub struct CheckArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Syntax dumps or directories to check (default: configured includes)
    pub paths: Vec<PathBuf>,
    #[command(flatten)]
    pub args: CheckArgs,
}

#[derive(Debug, Parser)]
pub struct FixArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Actually rewrite the Go sources (default is dry-run)
    #[arg(long)]
    pub apply: bool,
}

#[derive(Debug, Args)]
pub struct FixCommand {
    /// Syntax dumps or directories to fix (default: configured includes)
    pub paths: Vec<PathBuf>,
    #[command(flatten)]
    pub args: FixArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check zap logging calls for style issues
    Check(CheckCommand),
    /// Apply suggested key renames to the Go sources
    Fix(FixCommand),
    /// Initialize a new .zaplintrc.json configuration file
    Init,
}
