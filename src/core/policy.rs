//! Rule options and their validated form.
//!
//! [`Options`] is the configuration surface: plain booleans and strings as
//! they appear in `.zaplintrc.json` or on the command line. [`Options::validate`]
//! turns it into a [`Policy`] once, before any file is analyzed.

use std::collections::HashSet;

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

use crate::core::case::{KeyCase, MessageStyle};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Options {
    #[serde(default = "default_true")]
    pub no_global: bool,
    #[serde(default = "default_true")]
    pub no_sugar: bool,
    #[serde(default = "default_true")]
    pub static_msg: bool,
    /// `lowercased`, `capitalized`, or empty/null to disable.
    #[serde(default = "default_msg_style")]
    pub msg_style: Option<String>,
    #[serde(default)]
    pub no_raw_keys: bool,
    /// `snake`, `kebab`, `camel`, `pascal`, or empty/null to disable.
    #[serde(default = "default_key_naming_case")]
    pub key_naming_case: Option<String>,
    #[serde(default)]
    pub forbidden_keys: Vec<String>,
    #[serde(default = "default_true")]
    pub args_on_sep_lines: bool,
}

fn default_true() -> bool {
    true
}

fn default_msg_style() -> Option<String> {
    Some(MessageStyle::Lowercased.as_str().to_string())
}

fn default_key_naming_case() -> Option<String> {
    Some("snake".to_string())
}

impl Default for Options {
    fn default() -> Self {
        Self {
            no_global: true,
            no_sugar: true,
            static_msg: true,
            msg_style: default_msg_style(),
            no_raw_keys: false,
            key_naming_case: default_key_naming_case(),
            forbidden_keys: Vec::new(),
            args_on_sep_lines: true,
        }
    }
}

/// Treat a missing value and an empty string alike.
fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl Options {
    /// Check the string options and build the typed policy.
    pub fn validate(&self) -> Result<Policy> {
        let msg_style = match non_empty(&self.msg_style) {
            None => None,
            Some(value) => match MessageStyle::from_option(value) {
                Some(style) => Some(style),
                None => bail!(
                    "invalid value for msgStyle: \"{}\" (expected \"lowercased\" or \"capitalized\")",
                    value
                ),
            },
        };

        let key_case = match non_empty(&self.key_naming_case) {
            None => None,
            Some(value) => match KeyCase::from_option(value) {
                Some(case) => Some(case),
                None => bail!(
                    "invalid value for keyNamingCase: \"{}\" (expected \"snake\", \"kebab\", \"camel\" or \"pascal\")",
                    value
                ),
            },
        };

        Ok(Policy {
            no_global: self.no_global,
            no_sugar: self.no_sugar,
            static_msg: self.static_msg,
            msg_style,
            no_raw_keys: self.no_raw_keys,
            key_case,
            forbidden_keys: self.forbidden_keys.iter().cloned().collect(),
            args_on_sep_lines: self.args_on_sep_lines,
        })
    }
}

/// Validated rule configuration consumed by the analyzer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Policy {
    pub no_global: bool,
    pub no_sugar: bool,
    pub static_msg: bool,
    pub msg_style: Option<MessageStyle>,
    pub no_raw_keys: bool,
    pub key_case: Option<KeyCase>,
    pub forbidden_keys: HashSet<String>,
    pub args_on_sep_lines: bool,
}

impl Policy {
    /// Whether any per-key rule is active.
    pub fn checks_keys(&self) -> bool {
        self.no_raw_keys || !self.forbidden_keys.is_empty() || self.key_case.is_some()
    }
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            no_global: true,
            no_sugar: true,
            static_msg: true,
            msg_style: Some(MessageStyle::Lowercased),
            no_raw_keys: false,
            key_case: Some(KeyCase::Snake),
            forbidden_keys: HashSet::new(),
            args_on_sep_lines: true,
        }
    }
}
