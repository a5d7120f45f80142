use std::{
    cell::OnceCell,
    collections::BTreeSet,
    fs,
    path::{Component, Path, PathBuf},
};

use anyhow::{Context as _, Result};
use colored::Colorize;
use rayon::prelude::*;

use crate::{
    cli::args::CommonArgs,
    config::{Config, load_config},
    core::{
        analyzer::FileAnalyzer,
        ast::FileDump,
        file_scanner::{resolve_includes, scan_files},
        policy::Policy,
        source::SourceText,
    },
    issues::{Issue, ParseErrorIssue},
};

/// Analysis context shared by `check` and `fix`.
///
/// Configuration is merged once (CLI args > `.zaplintrc.json` > defaults) and
/// validated into a [`Policy`]. Dumps are read and analyzed lazily on first
/// access to [`CheckContext::issues`].
pub struct CheckContext {
    /// Merged configuration.
    pub config: Config,

    /// Root that Go file paths inside the dumps are relative to.
    pub root_dir: PathBuf,

    /// Syntax dumps to analyze.
    pub files: BTreeSet<String>,

    pub policy: Policy,

    pub verbose: bool,

    analysis: OnceCell<Analysis>,
}

struct Analysis {
    issues: Vec<Issue>,
    parse_errors: Vec<ParseErrorIssue>,
}

impl CheckContext {
    /// Create a context from the shared command line arguments.
    ///
    /// `paths` overrides the configured includes; each entry may be a dump
    /// file or a directory.
    pub fn new(common_args: &CommonArgs, paths: &[PathBuf]) -> Result<Self> {
        let verbose = common_args.verbose;

        let root_dir = common_args
            .source_root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));

        let config_result = load_config(&root_dir)?;
        if !config_result.from_file && verbose {
            eprintln!("Note: No .zaplintrc.json found, using default configuration");
        }

        let mut config = config_result.config;
        common_args.rules.apply_to(&mut config.options);
        let policy = config.options.validate()?;

        let roots = if paths.is_empty() {
            resolve_includes(&root_dir, &config.includes, verbose)
        } else {
            paths.to_vec()
        };

        let scan = scan_files(&roots, &root_dir, &config.ignores, verbose);
        if scan.skipped_count > 0 {
            eprintln!(
                "{} {} path(s) could not be accessed{}",
                "warning:".bold().yellow(),
                scan.skipped_count,
                if verbose {
                    ""
                } else {
                    " (use -v for details)"
                }
            );
        }

        Ok(Self {
            config,
            root_dir,
            files: scan.files,
            policy,
            verbose,
            analysis: OnceCell::new(),
        })
    }

    /// Rule diagnostics for every dump, sorted by file and position.
    pub fn issues(&self) -> &[Issue] {
        &self.analysis().issues
    }

    /// Dumps that could not be read or parsed.
    pub fn parse_errors(&self) -> &[ParseErrorIssue] {
        &self.analysis().parse_errors
    }

    fn analysis(&self) -> &Analysis {
        self.analysis.get_or_init(|| {
            let (root_dir, policy, verbose) = (&self.root_dir, &self.policy, self.verbose);
            let results: Vec<_> = self
                .files
                .par_iter()
                .map(|dump_path| analyze_dump(dump_path, root_dir, policy, verbose))
                .collect();

            let mut issues = Vec::new();
            let mut parse_errors = Vec::new();
            for (dump_path, result) in self.files.iter().zip(results) {
                match result {
                    Ok(file_issues) => issues.extend(file_issues),
                    Err(err) => {
                        if self.verbose {
                            eprintln!(
                                "{} Failed to parse {}: {:#}",
                                "warning:".bold().yellow(),
                                dump_path,
                                err
                            );
                        }
                        parse_errors.push(ParseErrorIssue {
                            file_path: dump_path.clone(),
                            error: format!("{:#}", err),
                        });
                    }
                }
            }

            // Stable, so call sites sharing a position keep traversal order.
            issues.sort_by(|a, b| {
                (a.file_path(), a.position()).cmp(&(b.file_path(), b.position()))
            });

            Analysis {
                issues,
                parse_errors,
            }
        })
    }
}

fn analyze_dump(
    dump_path: &str,
    root_dir: &Path,
    policy: &Policy,
    verbose: bool,
) -> Result<Vec<Issue>> {
    let content =
        fs::read_to_string(dump_path).with_context(|| format!("Failed to read {}", dump_path))?;
    let dump: FileDump = serde_json::from_str(&content).context("Invalid syntax dump")?;

    let file_path = source_path(root_dir, &dump.file);
    let source = match fs::read_to_string(&file_path) {
        Ok(text) => Some(SourceText::new(text)),
        Err(err) => {
            if verbose {
                eprintln!("Note: Cannot read Go source {}: {}", file_path, err);
            }
            None
        }
    };

    Ok(FileAnalyzer::new(&file_path, source.as_ref(), policy).analyze(&dump))
}

/// Path of a Go file named inside a dump, as shown to the user and as read
/// from disk.
fn source_path(root_dir: &Path, file: &str) -> String {
    let path = Path::new(file);
    if path.is_absolute() || is_current_dir(root_dir) {
        return file.to_string();
    }
    root_dir.join(path).to_string_lossy().into_owned()
}

fn is_current_dir(path: &Path) -> bool {
    path.components().all(|c| matches!(c, Component::CurDir))
}
