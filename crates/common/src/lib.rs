//! Shared building blocks for the customer workspace: logging setup and
//! small transport types reused by the HTTP layer.

pub mod types;
pub mod utils;
