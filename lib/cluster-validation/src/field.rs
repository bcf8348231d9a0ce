//! Structured field errors
//!
//! Every violation names the field it applies to, the offending value and a
//! human-readable detail. Validators return lists of these instead of failing
//! on the first problem, so a rejection reports everything in one round trip.

use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// Violations collected by a validation pass, in discovery order
pub type ErrorList = Vec<FieldError>;

/// Path to a field inside the resource, e.g. `spec.networkSpec.subnets[1].name`
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FieldPath(String);

impl FieldPath {
    pub fn new(root: &str) -> Self {
        Self(root.to_string())
    }

    /// Path to a named child field
    pub fn child(&self, name: &str) -> Self {
        Self(format!("{}.{}", self.0, name))
    }

    /// Path to an element of a list field
    pub fn index(&self, index: usize) -> Self {
        Self(format!("{}[{}]", self.0, index))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Kind of violation, as reported to the API client
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ErrorType {
    Invalid,
    Required,
    Duplicate,
    Forbidden,
    NotSupported,
}

impl fmt::Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorType::Invalid => "Invalid value",
            ErrorType::Required => "Required value",
            ErrorType::Duplicate => "Duplicate value",
            ErrorType::Forbidden => "Forbidden",
            ErrorType::NotSupported => "Unsupported value",
        };
        f.write_str(s)
    }
}

/// What went wrong, independent of how it is reported
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Category {
    /// Unparsable CIDR or IP, invalid DNS name, pattern mismatch
    Malformed,
    /// Missing role, duplicate name or identity, wrong cardinality
    Structural,
    /// Priority, idle timeout or frontend IP count out of bounds
    Range,
    /// Disallowed value or combination of values
    Policy,
    /// Change to a field frozen after creation
    Immutability,
}

/// A single violation
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldError {
    pub error_type: ErrorType,
    pub category: Category,
    pub field: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bad_value: Option<Value>,
    pub detail: String,
}

impl FieldError {
    fn build(
        error_type: ErrorType,
        category: Category,
        path: &FieldPath,
        bad_value: Option<Value>,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            error_type,
            category,
            field: path.to_string(),
            bad_value,
            detail: detail.into(),
        }
    }

    /// Invalid value of the given category
    pub fn invalid<V: Serialize + ?Sized>(
        path: &FieldPath,
        value: &V,
        detail: impl Into<String>,
        category: Category,
    ) -> Self {
        Self::build(ErrorType::Invalid, category, path, Some(to_value(value)), detail)
    }

    /// Value that does not parse or match its pattern
    pub fn malformed<V: Serialize + ?Sized>(path: &FieldPath, value: &V, detail: impl Into<String>) -> Self {
        Self::invalid(path, value, detail, Category::Malformed)
    }

    /// Numeric value outside its bounds
    pub fn out_of_range<V: Serialize + ?Sized>(path: &FieldPath, value: &V, detail: impl Into<String>) -> Self {
        Self::invalid(path, value, detail, Category::Range)
    }

    pub fn required(path: &FieldPath, detail: impl Into<String>) -> Self {
        Self::build(ErrorType::Required, Category::Structural, path, None, detail)
    }

    pub fn duplicate<V: Serialize + ?Sized>(path: &FieldPath, value: &V) -> Self {
        Self::build(ErrorType::Duplicate, Category::Structural, path, Some(to_value(value)), "")
    }

    pub fn not_supported<V: Serialize + ?Sized>(path: &FieldPath, value: &V, supported: &[&str]) -> Self {
        let quoted: Vec<String> = supported.iter().map(|s| format!("\"{}\"", s)).collect();
        Self::build(
            ErrorType::NotSupported,
            Category::Policy,
            path,
            Some(to_value(value)),
            format!("supported values: {}", quoted.join(", ")),
        )
    }

    pub fn forbidden(path: &FieldPath, detail: impl Into<String>) -> Self {
        Self::build(ErrorType::Forbidden, Category::Policy, path, None, detail)
    }

    /// Change to a field that may not be modified after creation
    pub fn immutable(path: &FieldPath, detail: impl Into<String>) -> Self {
        Self::build(ErrorType::Forbidden, Category::Immutability, path, None, detail)
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.bad_value, self.detail.is_empty()) {
            (Some(value), false) => write!(f, "{}: {}: {}: {}", self.field, self.error_type, value, self.detail),
            (Some(value), true) => write!(f, "{}: {}: {}", self.field, self.error_type, value),
            (None, _) => write!(f, "{}: {}: {}", self.field, self.error_type, self.detail),
        }
    }
}

fn to_value<V: Serialize + ?Sized>(value: &V) -> Value {
    serde_json::to_value(value).unwrap_or(Value::Null)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_path() {
        let path = FieldPath::new("spec")
            .child("networkSpec")
            .child("subnets")
            .index(1)
            .child("cidrBlocks");
        assert_eq!(path.as_str(), "spec.networkSpec.subnets[1].cidrBlocks");
    }

    #[test]
    fn test_display() {
        let path = FieldPath::new("spec").child("sku");
        assert_eq!(
            FieldError::not_supported(&path, "Basic", &["Standard"]).to_string(),
            "spec.sku: Unsupported value: \"Basic\": supported values: \"Standard\""
        );
        assert_eq!(
            FieldError::out_of_range(&path, &50, "too big").to_string(),
            "spec.sku: Invalid value: 50: too big"
        );
        assert_eq!(
            FieldError::duplicate(&path, "a").to_string(),
            "spec.sku: Duplicate value: \"a\""
        );
        assert_eq!(
            FieldError::immutable(&path, "frozen").to_string(),
            "spec.sku: Forbidden: frozen"
        );
    }

    #[test]
    fn test_categories() {
        let path = FieldPath::new("x");
        assert_eq!(FieldError::malformed(&path, "x", "").category, Category::Malformed);
        assert_eq!(FieldError::required(&path, "").category, Category::Structural);
        assert_eq!(FieldError::forbidden(&path, "").category, Category::Policy);
        let immutable = FieldError::immutable(&path, "");
        assert_eq!(immutable.category, Category::Immutability);
        assert_eq!(immutable.error_type, ErrorType::Forbidden);
    }
}
