use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::customer::domain::{Customer, Gender, NewCustomer};
use crate::customer::repository::CustomerRepository;
use crate::errors::ServiceError;

/// Process-local customer list. Nothing survives a restart.
///
/// The lock only protects the list itself; it does not make the service's
/// check-then-act sequences atomic.
#[derive(Default)]
pub struct InMemoryCustomerRepository {
    customers: RwLock<Vec<Customer>>,
}

impl InMemoryCustomerRepository {
    pub fn new() -> Self { Self::default() }

    pub fn with_customers(customers: Vec<Customer>) -> Self {
        Self { customers: RwLock::new(customers) }
    }

    /// Store pre-populated with the two sample customers (ids 1 and 2).
    pub fn seeded() -> Self {
        Self::with_customers(vec![
            Customer { id: 1, name: "alex".into(), email: "alex@gmail.com".into(), age: 21, gender: Gender::Male },
            Customer { id: 2, name: "jamila".into(), email: "jamila@gmail.com".into(), age: 19, gender: Gender::Female },
        ])
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn select_all_customers(&self) -> Result<Vec<Customer>, ServiceError> {
        Ok(self.customers.read().await.clone())
    }

    async fn select_customer_by_id(&self, id: i32) -> Result<Option<Customer>, ServiceError> {
        let customers = self.customers.read().await;
        Ok(customers.iter().find(|c| c.id == id).cloned())
    }

    async fn insert_customer(&self, customer: NewCustomer) -> Result<(), ServiceError> {
        let mut customers = self.customers.write().await;
        let next_id = customers.iter().map(|c| c.id).max().unwrap_or(0) + 1;
        customers.push(customer.with_id(next_id));
        Ok(())
    }

    async fn update_customer(&self, update: Customer) -> Result<(), ServiceError> {
        let mut customers = self.customers.write().await;
        if let Some(slot) = customers.iter_mut().find(|c| c.id == update.id) {
            *slot = update;
        }
        Ok(())
    }

    async fn delete_customer_by_id(&self, id: i32) -> Result<(), ServiceError> {
        self.customers.write().await.retain(|c| c.id != id);
        Ok(())
    }

    async fn exists_customer_with_email(&self, email: &str) -> Result<bool, ServiceError> {
        let customers = self.customers.read().await;
        Ok(customers.iter().any(|c| c.email == email))
    }

    async fn exists_customer_with_id(&self, id: i32) -> Result<bool, ServiceError> {
        let customers = self.customers.read().await;
        Ok(customers.iter().any(|c| c.id == id))
    }
}
