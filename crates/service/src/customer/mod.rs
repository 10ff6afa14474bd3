//! Customer module: three-layer architecture (domain, repository, service).
//!
//! The service is the only caller of the repository and the only place where
//! email uniqueness and no-op update rejection are checked.

pub mod domain;
pub mod repository;
pub mod repo;
pub mod service;

pub use domain::{Customer, CustomerRegistration, CustomerUpdate, Gender, NewCustomer};
pub use repository::CustomerRepository;
pub use service::CustomerService;
