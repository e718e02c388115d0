//! Bundle validation.
//!
//! Compares a translated bundle against the default-locale bundle it was
//! translated from. Partial translations are served as-is (they are never
//! merged with the default bundle), so gaps are reported here instead.

use regex::Regex;
use serde_json::Value;
use std::collections::BTreeSet;
use std::sync::OnceLock;

/// Validation report containing errors and warnings about a translation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationReport {
    /// Structural problems that would break a typed page
    pub errors: Vec<String>,

    /// Gaps and drift that degrade the page but do not break it
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

/// Validator for translated bundles.
pub struct BundleValidator;

static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();

impl BundleValidator {
    /// Validate `translated` against `reference`.
    ///
    /// This checks that:
    /// - every key of the reference is present
    /// - no keys exist that the reference does not have
    /// - values have the same JSON kind (string, object, array, ...)
    /// - arrays have the same length
    /// - `{placeholder}` names in strings are preserved
    pub fn validate(reference: &Value, translated: &Value) -> ValidationReport {
        let mut report = ValidationReport::new();
        Self::compare("", reference, translated, &mut report);
        report
    }

    fn compare(path: &str, reference: &Value, translated: &Value, report: &mut ValidationReport) {
        match (reference, translated) {
            (Value::Object(expected), Value::Object(actual)) => {
                for (key, expected_value) in expected {
                    let child = join_path(path, key);
                    match actual.get(key) {
                        Some(actual_value) => {
                            Self::compare(&child, expected_value, actual_value, report)
                        }
                        None => report.warnings.push(format!("Missing key '{}'", child)),
                    }
                }
                for key in actual.keys().filter(|key| !expected.contains_key(*key)) {
                    report
                        .warnings
                        .push(format!("Unexpected key '{}'", join_path(path, key)));
                }
            }
            (Value::Array(expected), Value::Array(actual)) => {
                if expected.len() != actual.len() {
                    report.warnings.push(format!(
                        "Length mismatch at '{}': expected {} items, found {}",
                        display_path(path),
                        expected.len(),
                        actual.len()
                    ));
                }
                for (i, (e, a)) in expected.iter().zip(actual).enumerate() {
                    Self::compare(&format!("{}[{}]", path, i), e, a, report);
                }
            }
            (Value::String(expected), Value::String(actual)) => {
                let expected_placeholders = Self::extract_placeholders(expected);
                let actual_placeholders = Self::extract_placeholders(actual);
                if expected_placeholders != actual_placeholders {
                    report.warnings.push(format!(
                        "Placeholder mismatch at '{}': expected {:?}, found {:?}",
                        display_path(path),
                        expected_placeholders,
                        actual_placeholders
                    ));
                }
            }
            (expected, actual) if kind(expected) != kind(actual) => {
                report.errors.push(format!(
                    "Type mismatch at '{}': expected {}, found {}",
                    display_path(path),
                    kind(expected),
                    kind(actual)
                ));
            }
            _ => {}
        }
    }

    /// Extract `{name}` placeholders from a string
    fn extract_placeholders(text: &str) -> BTreeSet<String> {
        let regex = PLACEHOLDER_REGEX.get_or_init(|| {
            Regex::new(r"\{([a-zA-Z0-9_]+)\}").expect("placeholder pattern is valid")
        });

        regex
            .captures_iter(text)
            .filter_map(|cap| cap.get(1).map(|m| m.as_str().to_string()))
            .collect()
    }
}

fn join_path(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", parent, key)
    }
}

fn display_path(path: &str) -> &str {
    if path.is_empty() {
        "<root>"
    } else {
        path
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
