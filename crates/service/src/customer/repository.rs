use async_trait::async_trait;

use super::domain::{Customer, NewCustomer};
use crate::errors::ServiceError;

/// Storage port for customers. Every backend must behave identically through this
/// contract; business rules live in [`super::CustomerService`], never here.
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// All stored customers, in backend-defined order.
    async fn select_all_customers(&self) -> Result<Vec<Customer>, ServiceError>;
    async fn select_customer_by_id(&self, id: i32) -> Result<Option<Customer>, ServiceError>;
    /// Persist a new customer; the backend assigns the id.
    async fn insert_customer(&self, customer: NewCustomer) -> Result<(), ServiceError>;
    /// Persist the fields of `update` for the customer with the same id.
    async fn update_customer(&self, update: Customer) -> Result<(), ServiceError>;
    /// Remove the customer if present; absent ids are a no-op.
    async fn delete_customer_by_id(&self, id: i32) -> Result<(), ServiceError>;
    async fn exists_customer_with_email(&self, email: &str) -> Result<bool, ServiceError>;
    async fn exists_customer_with_id(&self, id: i32) -> Result<bool, ServiceError>;
}

/// In-memory mock repository that records write calls, for tests and doc examples
pub mod mock {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::customer::repo::memory::InMemoryCustomerRepository;

    #[derive(Default)]
    pub struct MockCustomerRepository {
        inner: InMemoryCustomerRepository,
        inserts: AtomicUsize,
        updates: AtomicUsize,
        deletes: AtomicUsize,
    }

    impl MockCustomerRepository {
        pub fn with_customers(customers: Vec<Customer>) -> Self {
            Self { inner: InMemoryCustomerRepository::with_customers(customers), ..Default::default() }
        }

        pub fn inserts(&self) -> usize { self.inserts.load(Ordering::SeqCst) }
        pub fn updates(&self) -> usize { self.updates.load(Ordering::SeqCst) }
        pub fn deletes(&self) -> usize { self.deletes.load(Ordering::SeqCst) }

        /// Total number of mutating calls that reached the repository.
        pub fn writes(&self) -> usize { self.inserts() + self.updates() + self.deletes() }
    }

    #[async_trait]
    impl CustomerRepository for MockCustomerRepository {
        async fn select_all_customers(&self) -> Result<Vec<Customer>, ServiceError> {
            self.inner.select_all_customers().await
        }

        async fn select_customer_by_id(&self, id: i32) -> Result<Option<Customer>, ServiceError> {
            self.inner.select_customer_by_id(id).await
        }

        async fn insert_customer(&self, customer: NewCustomer) -> Result<(), ServiceError> {
            self.inserts.fetch_add(1, Ordering::SeqCst);
            self.inner.insert_customer(customer).await
        }

        async fn update_customer(&self, update: Customer) -> Result<(), ServiceError> {
            self.updates.fetch_add(1, Ordering::SeqCst);
            self.inner.update_customer(update).await
        }

        async fn delete_customer_by_id(&self, id: i32) -> Result<(), ServiceError> {
            self.deletes.fetch_add(1, Ordering::SeqCst);
            self.inner.delete_customer_by_id(id).await
        }

        async fn exists_customer_with_email(&self, email: &str) -> Result<bool, ServiceError> {
            self.inner.exists_customer_with_email(email).await
        }

        async fn exists_customer_with_id(&self, id: i32) -> Result<bool, ServiceError> {
            self.inner.exists_customer_with_id(id).await
        }
    }
}
