//! Issue types for zap logging convention checks.
//!
//! Each issue is self-contained with all information needed by:
//! - Reporter: to display the issue to users
//! - Action: to apply its suggested fix to the Go source

use enum_dispatch::enum_dispatch;

use crate::core::ast::Span;
use crate::core::case::{KeyCase, MessageStyle};
use crate::core::source::SourceContext;

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    NoGlobal,
    NoSugar,
    StaticMsg,
    MsgStyle,
    NoRawKeys,
    ForbiddenKeys,
    KeyNamingCase,
    ArgsOnSepLines,
    ParseError,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Same names as the command line switches
        match self {
            Rule::NoGlobal => write!(f, "no-global"),
            Rule::NoSugar => write!(f, "no-sugar"),
            Rule::StaticMsg => write!(f, "static-msg"),
            Rule::MsgStyle => write!(f, "msg-style"),
            Rule::NoRawKeys => write!(f, "no-raw-keys"),
            Rule::ForbiddenKeys => write!(f, "forbidden-keys"),
            Rule::KeyNamingCase => write!(f, "key-naming-case"),
            Rule::ArgsOnSepLines => write!(f, "args-on-sep-lines"),
            Rule::ParseError => write!(f, "parse-error"),
        }
    }
}

// ============================================================
// Suggested Fixes
// ============================================================

/// Replacement of a source range with new text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEdit {
    pub span: Span,
    pub new_text: String,
}

/// A named fix holding exactly one edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestedFix {
    /// Human readable name, e.g. `Change to "user_id"`.
    pub message: String,
    pub edit: TextEdit,
}

// ============================================================
// Issue Types - Call Sites
// ============================================================

/// `zap.L()` or `zap.S()` used instead of an injected logger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobalLoggerIssue {
    pub context: SourceContext,
}

impl GlobalLoggerIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::NoGlobal
    }
}

/// Call into `SugaredLogger`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SugaredLoggerIssue {
    pub context: SourceContext,
}

impl SugaredLoggerIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::NoSugar
    }
}

/// Message argument that is neither a string literal nor a constant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DynamicMessageIssue {
    pub context: SourceContext,
}

impl DynamicMessageIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::StaticMsg
    }
}

/// Literal message whose first letter does not follow the configured style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageStyleIssue {
    pub context: SourceContext,
    pub style: MessageStyle,
}

impl MessageStyleIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::MsgStyle
    }
}

/// Call whose trailing arguments share a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgsLayoutIssue {
    pub context: SourceContext,
}

impl ArgsLayoutIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::ArgsOnSepLines
    }
}

// ============================================================
// Issue Types - Field Keys
// ============================================================

/// Key written as a string literal instead of a named constant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawKeyIssue {
    pub context: SourceContext,
}

impl RawKeyIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::NoRawKeys
    }
}

/// Key listed in the forbidden set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForbiddenKeyIssue {
    pub context: SourceContext,
    /// The unquoted key.
    pub key: String,
}

impl ForbiddenKeyIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::ForbiddenKeys
    }
}

/// Key not written in the configured naming case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyNamingIssue {
    pub context: SourceContext,
    pub case: KeyCase,
    pub fix: SuggestedFix,
}

impl KeyNamingIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::KeyNamingCase
    }
}

// ============================================================
// Issue Types - Files
// ============================================================

/// Syntax dump that could not be read or parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrorIssue {
    pub file_path: String,
    pub error: String,
}

impl ParseErrorIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::ParseError
    }
}

// ============================================================
// Issue Enum
// ============================================================

/// Unified issue type for all analysis results.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    GlobalLogger(GlobalLoggerIssue),
    SugaredLogger(SugaredLoggerIssue),
    DynamicMessage(DynamicMessageIssue),
    MessageStyle(MessageStyleIssue),
    RawKey(RawKeyIssue),
    ForbiddenKey(ForbiddenKeyIssue),
    KeyNaming(KeyNamingIssue),
    ArgsLayout(ArgsLayoutIssue),
    ParseError(ParseErrorIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        self.report_severity()
    }

    pub fn rule(&self) -> Rule {
        self.report_rule()
    }

    /// File the issue belongs to, used for ordering and grouping.
    pub fn file_path(&self) -> &str {
        match self.location() {
            ReportLocation::Source(ctx) => ctx.file_path(),
            ReportLocation::File { path } => path,
        }
    }

    /// `(line, col)` of the issue; file-level issues sort first.
    pub fn position(&self) -> (usize, usize) {
        match self.location() {
            ReportLocation::Source(ctx) => (ctx.line(), ctx.col()),
            ReportLocation::File { .. } => (0, 0),
        }
    }
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Location information for report output.
pub enum ReportLocation<'a> {
    /// Go source location (may carry the source line for display).
    Source(&'a SourceContext),
    /// File-level only (for ParseError - no line context).
    File { path: &'a str },
}

/// Trait for types that can be reported to CLI.
///
/// Implemented by all issue types, dispatched on the `Issue` enum with
/// `enum_dispatch`.
#[enum_dispatch]
pub trait Report {
    /// Get the location for this issue.
    fn location(&self) -> ReportLocation<'_>;

    /// Diagnostic message.
    fn message(&self) -> String;

    /// Severity level.
    fn report_severity(&self) -> Severity;

    /// Rule identifier.
    fn report_rule(&self) -> Rule;

    /// Suggested fix, if the rule offers one.
    fn fix(&self) -> Option<&SuggestedFix> {
        None
    }

    /// Optional details for the "= note:" line.
    fn details(&self) -> Option<String> {
        None
    }
}

// ============================================================
// Report Implementations
// ============================================================

impl Report for GlobalLoggerIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Source(&self.context)
    }

    fn message(&self) -> String {
        "global logger should not be used".to_string()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}

impl Report for SugaredLoggerIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Source(&self.context)
    }

    fn message(&self) -> String {
        "sugared logger should not be used".to_string()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}

impl Report for DynamicMessageIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Source(&self.context)
    }

    fn message(&self) -> String {
        "message should be a string literal or a constant".to_string()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}

impl Report for MessageStyleIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Source(&self.context)
    }

    fn message(&self) -> String {
        format!("message should be {}", self.style)
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}

impl Report for ArgsLayoutIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Source(&self.context)
    }

    fn message(&self) -> String {
        "arguments should be put on separate lines".to_string()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}

impl Report for RawKeyIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Source(&self.context)
    }

    fn message(&self) -> String {
        "raw keys should not be used".to_string()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}

impl Report for ForbiddenKeyIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Source(&self.context)
    }

    fn message(&self) -> String {
        format!(
            "{} key is forbidden and should not be used",
            crate::core::literal::quote(&self.key)
        )
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}

impl Report for KeyNamingIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Source(&self.context)
    }

    fn message(&self) -> String {
        format!("keys should be written in {}", self.case.display_name())
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn fix(&self) -> Option<&SuggestedFix> {
        Some(&self.fix)
    }
}

impl Report for ParseErrorIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
        }
    }

    fn message(&self) -> String {
        "syntax dump could not be parsed".to_string()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(self.error.clone())
    }
}
