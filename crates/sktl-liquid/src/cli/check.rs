//! Check command implementation
//!
//! Converts every given document without writing output and reports which
//! ones fail, so a template library can be audited before migration.

use super::output;
use crate::diagnostics::{Diagnostic, SKL0100, SKL0101, SKL0200};
use crate::{Converter, Template};
use anyhow::Result;
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration for check command
pub struct CheckConfig {
    pub files: Vec<PathBuf>,
    /// Treat warnings (unclosed blocks) as failures
    pub strict: bool,
    pub verbose: bool,
}

/// Check result for a single file
pub struct CheckResult {
    pub file: PathBuf,
    pub diagnostics: Vec<Diagnostic>,
}

impl CheckResult {
    pub fn errors(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_error()).count()
    }

    pub fn warnings(&self) -> usize {
        self.diagnostics.len() - self.errors()
    }

    pub fn failed(&self, strict: bool) -> bool {
        self.errors() > 0 || (strict && self.warnings() > 0)
    }
}

/// Check that parsed templates convert
pub fn check(config: CheckConfig) -> Result<()> {
    if config.files.is_empty() {
        anyhow::bail!("No files specified for checking");
    }

    let results: Vec<CheckResult> = config
        .files
        .iter()
        .map(|file| {
            if config.verbose {
                eprintln!("Checking: {}", file.display());
            }
            check_file(file)
        })
        .collect();

    for result in &results {
        print_check_result(result);
    }

    let failed = results.iter().filter(|r| r.failed(config.strict)).count();
    let warnings: usize = results.iter().map(CheckResult::warnings).sum();

    println!();
    if failed == 0 {
        let mut message = format!("All {} file(s) converted successfully", results.len());
        if warnings > 0 {
            message.push_str(&format!(" ({} warning(s))", warnings));
        }
        println!("{}", output::format_success(&message));
        Ok(())
    } else {
        if config.strict && warnings > 0 {
            eprintln!("{}", "Strict mode: treating warnings as errors".yellow());
        }
        anyhow::bail!("{} of {} file(s) failed to convert", failed, results.len())
    }
}

/// Convert a single file, collecting diagnostics instead of failing
pub fn check_file(file: &Path) -> CheckResult {
    let diagnostics = match fs::read_to_string(file) {
        Err(e) => vec![Diagnostic::error(SKL0101, e.to_string())],
        Ok(json) => match Template::from_json(&json) {
            Err(e) => vec![Diagnostic::error(SKL0100, e.to_string())],
            Ok(template) => check_template(&template),
        },
    };

    CheckResult {
        file: file.to_path_buf(),
        diagnostics,
    }
}

fn check_template(template: &Template) -> Vec<Diagnostic> {
    let mut converter = Converter::new();
    match converter.convert_document(template.segments()) {
        Err(e) => vec![e.to_diagnostic()],
        Ok(_) if converter.open_scopes().is_empty() => Vec::new(),
        Ok(_) => {
            let open: Vec<_> = converter
                .open_scopes()
                .iter()
                .map(|scope| scope.as_str())
                .collect();
            vec![Diagnostic::warning(
                SKL0200,
                format!("{} block(s) left open: {}", open.len(), open.join(", ")),
            )]
        }
    }
}

fn print_check_result(result: &CheckResult) {
    if result.diagnostics.is_empty() {
        println!("{} {}", "✓".green(), result.file.display());
        return;
    }

    let mark = if result.errors() > 0 {
        "✗".red()
    } else {
        "!".yellow()
    };
    println!("{} {}", mark, result.file.display());
    for diagnostic in &result.diagnostics {
        println!("  {}", diagnostic.render_colored());
    }
}
