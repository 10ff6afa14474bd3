use thiserror::Error;

/// Rejections raised while checking or decoding customer fields.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("invalid {field}: {reason}")]
    InvalidField { field: &'static str, reason: &'static str },
    #[error("unknown gender `{0}`; expected MALE or FEMALE")]
    UnknownGender(String),
}

impl ModelError {
    pub fn invalid(field: &'static str, reason: &'static str) -> Self {
        Self::InvalidField { field, reason }
    }
}
