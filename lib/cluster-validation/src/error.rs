use thiserror::Error;

use crate::field::{ErrorList, FieldError};

pub type Result<T> = std::result::Result<T, ValidationError>;

#[derive(Error, Debug)]
pub enum ValidationError {
    /// The resource was rejected; carries every violation found
    #[error("{kind}.{group} \"{name}\" is invalid: {}", join_errors(.errors))]
    Invalid {
        group: String,
        kind: String,
        name: String,
        errors: ErrorList,
    },

    #[error("invalid CIDR address: {0}")]
    MalformedCidr(String),

    #[error("invalid IP address: {0}")]
    MalformedIp(String),
}

impl ValidationError {
    /// Violations carried by a rejection; empty for parse errors
    pub fn errors(&self) -> &[FieldError] {
        match self {
            ValidationError::Invalid { errors, .. } => errors,
            _ => &[],
        }
    }
}

fn join_errors(errors: &[FieldError]) -> String {
    let rendered: Vec<String> = errors.iter().map(ToString::to_string).collect();
    format!("[{}]", rendered.join(", "))
}
