//! Naming conventions for keys and messages.
//!
//! Key conversion is done by `heck`: names are split into words at
//! non-alphanumeric characters and at case boundaries (`HTTPServer` is `HTTP`
//! + `Server`, digits stick to the word they follow), then rejoined in the
//! target case. Converting an already converted name returns it unchanged.
//!
//! Letter classes follow Unicode general categories, so only `L*` characters
//! count as letters when checking message style.

use std::fmt;

use heck::{ToKebabCase, ToLowerCamelCase, ToSnakeCase, ToUpperCamelCase};
use unicode_general_category::{GeneralCategory, get_general_category};

const MAX_PASSES: usize = 8;

/// Naming convention enforced for keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCase {
    Snake,
    Kebab,
    Camel,
    Pascal,
}

impl KeyCase {
    pub const ALL: [KeyCase; 4] = [
        KeyCase::Snake,
        KeyCase::Kebab,
        KeyCase::Camel,
        KeyCase::Pascal,
    ];

    /// Parse the configuration value (`snake`, `kebab`, `camel`, `pascal`).
    pub fn from_option(value: &str) -> Option<Self> {
        match value {
            "snake" => Some(KeyCase::Snake),
            "kebab" => Some(KeyCase::Kebab),
            "camel" => Some(KeyCase::Camel),
            "pascal" => Some(KeyCase::Pascal),
            _ => None,
        }
    }

    /// Human-readable name used in diagnostics.
    pub fn display_name(self) -> &'static str {
        match self {
            KeyCase::Snake => "snake_case",
            KeyCase::Kebab => "kebab-case",
            KeyCase::Camel => "camelCase",
            KeyCase::Pascal => "PascalCase",
        }
    }

    pub fn convert(self, name: &str) -> String {
        // One-letter words run together when re-split (`x_y` -> `XY` -> `Xy`),
        // so settle on the fixed point.
        let mut converted = self.convert_once(name);
        for _ in 0..MAX_PASSES {
            let next = self.convert_once(&converted);
            if next == converted {
                break;
            }
            converted = next;
        }
        converted
    }

    fn convert_once(self, name: &str) -> String {
        match self {
            KeyCase::Snake => name.to_snake_case(),
            KeyCase::Kebab => name.to_kebab_case(),
            KeyCase::Camel => name.to_lower_camel_case(),
            KeyCase::Pascal => name.to_upper_camel_case(),
        }
    }
}

impl fmt::Display for KeyCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Required case of a message's first letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Lowercased,
    Capitalized,
}

impl MessageStyle {
    /// Parse the configuration value (`lowercased`, `capitalized`).
    pub fn from_option(value: &str) -> Option<Self> {
        match value {
            "lowercased" => Some(MessageStyle::Lowercased),
            "capitalized" => Some(MessageStyle::Capitalized),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MessageStyle::Lowercased => "lowercased",
            MessageStyle::Capitalized => "capitalized",
        }
    }

    /// Empty messages and messages that do not start with a letter always
    /// conform.
    pub fn matches(self, message: &str) -> bool {
        let Some(first) = message.chars().next() else {
            return true;
        };
        let category = get_general_category(first);
        if !is_letter(category) {
            return true;
        }
        match self {
            MessageStyle::Lowercased => category == GeneralCategory::LowercaseLetter,
            MessageStyle::Capitalized => category == GeneralCategory::UppercaseLetter,
        }
    }
}

impl fmt::Display for MessageStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn is_letter(category: GeneralCategory) -> bool {
    matches!(
        category,
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}
