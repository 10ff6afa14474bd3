//! Service layer providing the customer business rules on top of pluggable storage.
//! - Separates business logic from data access.
//! - Reuses entity definitions in `models` crate.
//! - Provides clear error types and documented interfaces.

pub mod errors;
pub mod customer;
#[cfg(test)]
pub mod test_support;
