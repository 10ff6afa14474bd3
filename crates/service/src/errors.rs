use thiserror::Error;

/// Failures surfaced by the customer service and its storage backends.
///
/// `NotFound`, `Conflict` and `Validation` are domain outcomes whose message is meant
/// for the caller verbatim. `Db`, `Storage` and `Model` are infrastructure failures.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("database error: {0}")]
    Db(#[from] sea_orm::DbErr),
    #[error("storage unavailable: {0}")]
    Storage(String),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
}

impl ServiceError {
    pub fn customer_not_found(id: i32) -> Self {
        Self::NotFound(format!("customer with id [{}] not found", id))
    }

    pub fn email_taken() -> Self { Self::Conflict("email already taken".into()) }

    pub fn no_changes() -> Self { Self::Validation("no data changes found".into()) }

    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            ServiceError::Validation(_) => 1001,
            ServiceError::Conflict(_) => 1002,
            ServiceError::NotFound(_) => 1003,
            ServiceError::Model(_) => 1101,
            ServiceError::Db(_) => 1200,
            ServiceError::Storage(_) => 1201,
        }
    }
}
