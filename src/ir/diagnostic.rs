//! Diagnostics attached to IR nodes
//!
//! The compiler front-end records problems it found while producing the IR
//! directly on the affected node. A [`Diagnostic`] carries a span, a severity,
//! a stable identifier code, and the free-text message shown to users.
//!
//! The dump never serializes the raw message text, only a fingerprint of it
//! (see the dump fingerprint module), so snapshot baselines survive cosmetic
//! rewording while still catching real message changes.

use super::span::SourceSpan;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Diagnostic severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

/// A problem recorded on an IR node by the front-end
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub span: Option<SourceSpan>,
    pub severity: Severity,
    /// Stable identifier code, e.g. "TPL1004"
    pub id: String,
    pub message: String,
}

impl Diagnostic {
    pub fn new(severity: Severity, id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            span: None,
            severity,
            id: id.into(),
            message: message.into(),
        }
    }

    /// Attach the source span the diagnostic points at
    pub fn at(mut self, span: SourceSpan) -> Self {
        self.span = Some(span);
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]: {}", self.severity, self.id, self.message)?;
        if let Some(span) = &self.span {
            write!(f, " at {}", span)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_display() {
        assert_eq!(format!("{}", Severity::Error), "error");
        assert_eq!(format!("{}", Severity::Warning), "warning");
        assert_eq!(format!("{}", Severity::Info), "info");
    }

    #[test]
    fn test_diagnostic_creation() {
        let diag = Diagnostic::new(Severity::Error, "TPL1004", "Unexpected token")
            .at(SourceSpan::new(10, 1, 2, 3).in_file("page.tpl"));

        assert_eq!(diag.severity, Severity::Error);
        assert_eq!(diag.id, "TPL1004");
        assert_eq!(diag.message, "Unexpected token");
        assert!(diag.span.is_some());
    }

    #[test]
    fn test_diagnostic_display() {
        let diag = Diagnostic::new(Severity::Warning, "TPL2001", "Unused directive");
        assert_eq!(format!("{}", diag), "warning [TPL2001]: Unused directive");
    }
}
