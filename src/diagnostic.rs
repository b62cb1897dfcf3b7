//! Diagnostics: the stable, serializable contract the engine hands back to
//! any host. Three levels share this one shape — syntax diagnostics carry
//! no `rule`, semantic and domain diagnostics always do (§4.4/§7).

use std::cmp::Ordering;
use std::fmt;

use crate::span::Span;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    // Ordered so that `max` picks the worst outcome.
    Hint,
    Info,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
            Severity::Hint => "hint",
        };
        f.write_str(s)
    }
}

/// A single diagnostic record. `rule` is `None` for parser (syntax)
/// diagnostics and `Some(_)` for every validator diagnostic; `spec_ref` is
/// populated only where the matching spec database record names one.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Diagnostic {
    pub message: String,
    pub severity: Severity,
    pub span: Span,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spec_ref: Option<String>,
}

// `rule` is `Option<&'static str>`: serde_derive's implicit-borrow detection
// treats any `Option<&'a str>` field as borrowing from the deserializer,
// which would pin this impl to `Deserialize<'static>` instead of a generic
// `'de`. Deserializing through an owned shadow and leaking sidesteps that.
#[derive(serde::Deserialize)]
#[serde(rename = "Diagnostic")]
struct DiagnosticShadow {
    message: String,
    severity: Severity,
    span: Span,
    #[serde(default)]
    rule: Option<String>,
    #[serde(default)]
    spec_ref: Option<String>,
}

impl<'de> serde::Deserialize<'de> for Diagnostic {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let shadow = DiagnosticShadow::deserialize(deserializer)?;
        Ok(Diagnostic {
            message: shadow.message,
            severity: shadow.severity,
            span: shadow.span,
            rule: shadow.rule.map(|s| -> &'static str { Box::leak(s.into_boxed_str()) }),
            spec_ref: shadow.spec_ref,
        })
    }
}

impl Diagnostic {
    pub fn syntax_error(message: impl Into<String>, span: Span) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Error,
            span,
            rule: None,
            spec_ref: None,
        }
    }

    pub fn rule(
        severity: Severity,
        rule: &'static str,
        message: impl Into<String>,
        span: Span,
    ) -> Self {
        Self {
            message: message.into(),
            severity,
            span,
            rule: Some(rule),
            spec_ref: None,
        }
    }

    pub fn with_spec_ref(mut self, spec_ref: impl Into<String>) -> Self {
        self.spec_ref = Some(spec_ref.into());
        self
    }

    /// A `(offset, length)` key a host can use to sort diagnostics by
    /// source position instead of by producer/rule order.
    pub fn sort_key(&self) -> (usize, usize) {
        (self.span.offset, self.span.length)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}: {}", self.span, self.severity, self.message)?;
        if let Some(rule) = self.rule {
            write!(f, " [{rule}]")?;
        }
        Ok(())
    }
}

/// Worst (highest) severity present in a diagnostic list, if any.
pub fn worst_severity(diagnostics: &[Diagnostic]) -> Option<Severity> {
    diagnostics.iter().map(|d| d.severity).max()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Error > Severity::Warning);
        assert!(Severity::Warning > Severity::Info);
        assert!(Severity::Info > Severity::Hint);
    }

    #[test]
    fn test_worst_severity_empty() {
        assert_eq!(worst_severity(&[]), None);
    }

    #[test]
    fn test_worst_severity_picks_error_over_warning() {
        let span = Span::start();
        let diags = vec![
            Diagnostic::rule(Severity::Warning, "required-property", "missing role", span),
            Diagnostic::rule(Severity::Error, "valid-role", "bad role", span),
        ];
        assert_eq!(worst_severity(&diags), Some(Severity::Error));
    }

    #[test]
    fn test_sort_key_matches_offset() {
        let span = Span::new(1, 1, 42, 3);
        let d = Diagnostic::syntax_error("oops", span);
        assert_eq!(d.sort_key(), (42, 3));
    }

    #[test]
    fn test_ordering_matches_partial_cmp() {
        assert_eq!(
            Severity::Error.partial_cmp(&Severity::Hint),
            Some(Ordering::Greater)
        );
    }
}
