//! Per-file rule engine.
//!
//! Walks a file's expressions in preorder and evaluates every catalogued
//! call site against the [`Policy`]. For one call site the rules run in a
//! fixed order:
//!
//! 1. global logger: reported, then nothing else is checked
//! 2. sugared logger: nothing else is checked, whether reported or not
//! 3. static message
//! 4. message style
//! 5. per key: raw, forbidden, naming case
//! 6. argument layout
//!
//! Issues are returned in traversal order.

use crate::core::ast::{CallExpr, FileDump, Visit, walk_call_expr};
use crate::core::catalog::CallShape;
use crate::core::extract::{Keys, message_arg};
use crate::core::policy::Policy;
use crate::core::resolve::resolve_call;
use crate::core::source::{Locator, SourceText};
use crate::issues::Issue;
use crate::rules;

pub struct FileAnalyzer<'a> {
    policy: &'a Policy,
    locator: Locator<'a>,
    issues: Vec<Issue>,
}

impl<'a> FileAnalyzer<'a> {
    /// `source` is the Go file the dump was produced from, when available.
    /// It only feeds the source line shown next to each issue.
    pub fn new(file_path: &'a str, source: Option<&'a SourceText>, policy: &'a Policy) -> Self {
        Self {
            policy,
            locator: Locator::new(file_path, source),
            issues: Vec::new(),
        }
    }

    pub fn analyze(mut self, dump: &FileDump) -> Vec<Issue> {
        for expr in &dump.exprs {
            self.visit_expr(expr);
        }
        self.issues
    }

    fn check_call(&mut self, call: &CallExpr) {
        let Some((_, shape)) = resolve_call(call) else {
            return;
        };

        if shape.is_global {
            if self.policy.no_global
                && let Some(issue) = rules::check_global(call, &shape, &self.locator)
            {
                self.issues.push(issue.into());
            }
            return;
        }

        if shape.is_sugar && self.policy.no_sugar {
            if let Some(issue) = rules::check_sugar(call, &shape, &self.locator) {
                self.issues.push(issue.into());
            }
            return;
        }

        if let Some(msg) = message_arg(call, &shape) {
            if self.policy.static_msg
                && let Some(issue) = rules::check_static_msg(msg, &self.locator)
            {
                self.issues.push(issue.into());
            }
            if let Some(style) = self.policy.msg_style
                && let Some(issue) = rules::check_msg_style(msg, style, &self.locator)
            {
                self.issues.push(issue.into());
            }
        }

        if self.policy.checks_keys() {
            self.check_keys(call, &shape);
        }

        if self.policy.args_on_sep_lines
            && let Some(issue) = rules::check_args_layout(call, &shape, &self.locator)
        {
            self.issues.push(issue.into());
        }
    }

    fn check_keys(&mut self, call: &CallExpr, shape: &CallShape) {
        let policy = self.policy;
        for key in Keys::new(call, shape) {
            if policy.no_raw_keys
                && let Some(issue) = rules::check_raw_key(key, &self.locator)
            {
                self.issues.push(issue.into());
            }
            if let Some(issue) =
                rules::check_forbidden_key(key, &policy.forbidden_keys, &self.locator)
            {
                self.issues.push(issue.into());
            }
            if let Some(case) = policy.key_case
                && let Some(issue) = rules::check_key_naming(key, case, &self.locator)
            {
                self.issues.push(issue.into());
            }
        }
    }
}

impl Visit for FileAnalyzer<'_> {
    fn visit_call_expr(&mut self, call: &CallExpr) {
        self.check_call(call);
        walk_call_expr(self, call);
    }
}
