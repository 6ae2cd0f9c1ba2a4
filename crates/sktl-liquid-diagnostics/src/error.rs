//! Diagnostic records

use crate::ErrorCode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Diagnostic severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    /// Error - the document cannot be converted
    Error,
    /// Warning - the document converted but needs attention
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A diagnostic message with an optional pointer to the offending input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Severity level
    pub severity: Severity,
    /// Error code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Rendering of the offending segment, if any
    pub subject: Option<String>,
    /// Additional context or help
    pub help: Option<String>,
}

impl Diagnostic {
    /// Create a new error diagnostic
    pub fn error(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
            subject: None,
            help: code.info().help.map(str::to_string),
        }
    }

    /// Create a new warning diagnostic
    pub fn warning(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
            subject: None,
            help: code.info().help.map(str::to_string),
        }
    }

    /// Attach the offending input
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Set help text
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Whether this diagnostic should fail a run
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// Render with terminal colors
    #[cfg(feature = "colored")]
    pub fn render_colored(&self) -> String {
        use colored::Colorize;

        let head = match self.severity {
            Severity::Error => format!("{}[{}]", self.severity, self.code).red().bold(),
            Severity::Warning => format!("{}[{}]", self.severity, self.code).yellow().bold(),
        };
        let mut out = format!("{}: {}", head, self.message);
        if let Some(subject) = &self.subject {
            out.push_str(&format!("\n  {} {}", "-->".blue().bold(), subject));
        }
        if let Some(help) = &self.help {
            out.push_str(&format!("\n  {} {}", "help:".cyan(), help));
        }
        out
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} - {}", self.severity, self.code, self.message)?;
        if let Some(subject) = &self.subject {
            write!(f, " in {}", subject)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{SKL0001, SKL0200};

    #[test]
    fn test_diagnostic_display() {
        let diag = Diagnostic::error(SKL0001, "Unsupported segment").with_subject("{\"ending\":null}");

        let text = diag.to_string();
        assert!(text.starts_with("error: SKL0001"));
        assert!(text.contains("ending"));
        assert!(diag.is_error());
    }

    #[test]
    fn test_warning_picks_up_code_help() {
        let diag = Diagnostic::warning(SKL0200, "1 block left open");

        assert!(!diag.is_error());
        assert_eq!(diag.help.as_deref(), SKL0200.info().help);
    }
}
