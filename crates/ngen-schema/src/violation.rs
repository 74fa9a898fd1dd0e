//! # Violation Types
//!
//! Structured field-level violations with dotted instance paths. The
//! collection type keeps insertion order — violations surface in document
//! order, top section first, which is the order an author reads the brief.

use std::fmt;

use serde_json::Value;
use thiserror::Error;

/// A single schema violation with structured context.
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    /// Dotted path to the violating field (e.g. `meta.timestamp`).
    /// Empty for a violation at the document root.
    pub path: String,
    /// Human-readable description of the violation.
    pub message: String,
    /// The offending value, when one was present to show.
    pub offending_value: Option<Value>,
}

impl Violation {
    /// Violation with no value to display (missing field, wrong type).
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
            offending_value: None,
        }
    }

    /// Violation carrying the offending value.
    pub fn with_value(
        path: impl Into<String>,
        message: impl Into<String>,
        value: Value,
    ) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
            offending_value: Some(value),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "  (root): {}", self.message)?;
        } else {
            write!(f, "  {}: {}", self.path, self.message)?;
        }
        if let Some(value) = &self.offending_value {
            write!(f, " (got {value})")?;
        }
        Ok(())
    }
}

/// Ordered collection of schema violations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SchemaViolations {
    violations: Vec<Violation>,
}

impl SchemaViolations {
    /// Empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one violation.
    pub fn push(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    /// Returns the number of violations.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Returns true if there are no violations.
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Returns a slice of all violations, in document order.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Consumes self and returns the inner Vec.
    pub fn into_inner(self) -> Vec<Violation> {
        self.violations
    }
}

impl fmt::Display for SchemaViolations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.violations.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}

/// The document did not conform to the input schema.
///
/// Always aggregated: carries every violation found in one parse, never
/// just the first.
#[derive(Error, Debug)]
#[error("input document failed schema validation:\n{violations}")]
pub struct SchemaError {
    /// Structured list of individual violations.
    pub violations: SchemaViolations,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_violation_display_with_path_and_value() {
        let v = Violation::with_value(
            "autonomous_character_seed.evolution_parameters.autonomy_level",
            "must be one of: Low, Medium, High (exact case)",
            json!("high"),
        );
        let display = v.to_string();
        assert!(display.contains("autonomy_level"));
        assert!(display.contains("(got \"high\")"));
    }

    #[test]
    fn test_violation_display_root() {
        let v = Violation::new("", "must be a JSON object");
        assert!(v.to_string().contains("(root)"));
    }

    #[test]
    fn test_violations_display_one_per_line() {
        let mut vs = SchemaViolations::new();
        vs.push(Violation::new("meta.timestamp", "field required"));
        vs.push(Violation::new("meta.project_name", "must not be empty"));
        let display = vs.to_string();
        assert_eq!(display.lines().count(), 2);
    }
}
