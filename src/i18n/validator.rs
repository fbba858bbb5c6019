//! Structural parity validation across languages.
//!
//! Every language's content record must have the same shape as the default
//! language's: the same keys, the same optional fields populated, and lists
//! of the same length. Only the text differs.

use crate::i18n::{content_for, routes_for, Language, PageContent, RouteTable};
use serde_json::Value;

/// Validation report containing errors and warnings about content parity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Shape mismatches (missing keys, type changes, optional field drift)
    pub errors: Vec<String>,

    /// List length differences
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
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

    fn merge(&mut self, other: ValidationReport) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for content and route table parity.
pub struct ContentValidator;

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn join(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", path, key)
    }
}

impl ContentValidator {
    /// Compare two serialized records. `reference` is the source of truth.
    pub fn validate(reference: &Value, candidate: &Value) -> ValidationReport {
        let mut report = ValidationReport::new();
        Self::compare("", reference, candidate, &mut report);
        report
    }

    /// Compare two content records.
    pub fn validate_content(reference: &PageContent, candidate: &PageContent) -> ValidationReport {
        match (serde_json::to_value(reference), serde_json::to_value(candidate)) {
            (Ok(reference), Ok(candidate)) => Self::validate(&reference, &candidate),
            (Err(e), _) | (_, Err(e)) => {
                let mut report = ValidationReport::new();
                report
                    .errors
                    .push(format!("Content could not be serialized: {}", e));
                report
            }
        }
    }

    /// Compare the route names of two route tables.
    pub fn validate_routes(reference: &RouteTable, candidate: &RouteTable) -> ValidationReport {
        let mut report = ValidationReport::new();

        for name in reference.names() {
            if candidate.get(name).is_none() {
                report.errors.push(format!("Route '{}' is missing", name));
            }
        }
        for name in candidate.names() {
            if reference.get(name).is_none() {
                report.errors.push(format!("Route '{}' is unexpected", name));
            }
        }

        report
    }

    /// Check every supported language against the default language.
    ///
    /// Findings are prefixed with the language code they were found in.
    pub fn validate_all() -> ValidationReport {
        let default = Language::default_language();
        let mut report = ValidationReport::new();

        for language in Language::all().into_iter().filter(|l| *l != default) {
            let mut found = Self::validate_content(content_for(default), content_for(language));
            found.merge(Self::validate_routes(routes_for(default), routes_for(language)));

            let prefix = |message: String| format!("[{}] {}", language.code(), message);
            report.errors.extend(found.errors.into_iter().map(prefix));
            report.warnings.extend(found.warnings.into_iter().map(prefix));
        }

        report
    }

    fn compare(path: &str, reference: &Value, candidate: &Value, report: &mut ValidationReport) {
        match (reference, candidate) {
            (Value::Object(expected), Value::Object(actual)) => {
                for (key, value) in expected {
                    match actual.get(key) {
                        Some(other) => Self::compare(&join(path, key), value, other, report),
                        None => report
                            .errors
                            .push(format!("Key '{}' is missing", join(path, key))),
                    }
                }
                for key in actual.keys().filter(|k| !expected.contains_key(*k)) {
                    report
                        .errors
                        .push(format!("Key '{}' is unexpected", join(path, key)));
                }
            }
            (Value::Array(expected), Value::Array(actual)) => {
                if expected.len() != actual.len() {
                    report.warnings.push(format!(
                        "List '{}' length mismatch: expected {}, found {}",
                        path,
                        expected.len(),
                        actual.len()
                    ));
                }
                for (index, (value, other)) in expected.iter().zip(actual.iter()).enumerate() {
                    Self::compare(&format!("{}[{}]", path, index), value, other, report);
                }
            }
            (Value::Null, Value::Null) => {}
            (Value::Null, _) | (_, Value::Null) => {
                report
                    .errors
                    .push(format!("Value '{}' is present in only one language", path));
            }
            (expected, actual) if kind(expected) != kind(actual) => {
                report.errors.push(format!(
                    "Value '{}' type mismatch: expected {}, found {}",
                    path,
                    kind(expected),
                    kind(actual)
                ));
            }
            _ => {}
        }
    }
}
