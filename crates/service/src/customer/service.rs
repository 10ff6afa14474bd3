use std::sync::Arc;

use tracing::{debug, info, instrument};

use super::domain::{Customer, CustomerRegistration, CustomerUpdate, NewCustomer};
use super::repository::CustomerRepository;
use crate::errors::ServiceError;

/// Customer business service independent of web framework and storage backend.
pub struct CustomerService<R: CustomerRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: CustomerRepository + ?Sized> Clone for CustomerService<R> {
    fn clone(&self) -> Self { Self { repo: Arc::clone(&self.repo) } }
}

impl<R: CustomerRepository + ?Sized> CustomerService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    pub async fn get_all_customers(&self) -> Result<Vec<Customer>, ServiceError> {
        self.repo.select_all_customers().await
    }

    pub async fn get_customer(&self, id: i32) -> Result<Customer, ServiceError> {
        self.repo
            .select_customer_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::customer_not_found(id))
    }

    /// Register a new customer; the email must not be in use.
    ///
    /// # Examples
    /// ```
    /// use service::customer::{CustomerService, CustomerRegistration, Gender};
    /// use service::customer::repo::InMemoryCustomerRepository;
    /// use std::sync::Arc;
    /// let svc = CustomerService::new(Arc::new(InMemoryCustomerRepository::new()));
    /// let input = CustomerRegistration { name: "Alex".into(), email: "alex@x.com".into(), age: 21, gender: Gender::Male };
    /// tokio_test::block_on(svc.add_customer(input.clone())).unwrap();
    /// assert!(tokio_test::block_on(svc.add_customer(input)).is_err());
    /// ```
    #[instrument(skip(self, registration), fields(email = %registration.email))]
    pub async fn add_customer(&self, registration: CustomerRegistration) -> Result<(), ServiceError> {
        if self.repo.exists_customer_with_email(&registration.email).await? {
            debug!("email already registered");
            return Err(ServiceError::email_taken());
        }

        let email = registration.email.clone();
        self.repo.insert_customer(NewCustomer::from(registration)).await?;
        info!(%email, "customer_registered");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn delete_customer_by_id(&self, id: i32) -> Result<(), ServiceError> {
        if !self.repo.exists_customer_with_id(id).await? {
            return Err(ServiceError::customer_not_found(id));
        }

        self.repo.delete_customer_by_id(id).await?;
        info!(customer_id = id, "customer_deleted");
        Ok(())
    }

    /// Apply the fields of `update` that differ from the stored customer.
    ///
    /// Fails with `Conflict` when the new email belongs to someone else and with
    /// `Validation` when nothing would change; storage is untouched in both cases.
    ///
    /// # Examples
    /// ```
    /// use service::customer::{CustomerService, CustomerUpdate};
    /// use service::customer::repo::InMemoryCustomerRepository;
    /// use std::sync::Arc;
    /// let svc = CustomerService::new(Arc::new(InMemoryCustomerRepository::seeded()));
    /// let patch = CustomerUpdate { age: Some(22), ..Default::default() };
    /// tokio_test::block_on(svc.update_customer(1, patch.clone())).unwrap();
    /// assert_eq!(tokio_test::block_on(svc.get_customer(1)).unwrap().age, 22);
    /// assert!(tokio_test::block_on(svc.update_customer(1, patch)).is_err());
    /// ```
    #[instrument(skip(self, update))]
    pub async fn update_customer(&self, id: i32, update: CustomerUpdate) -> Result<(), ServiceError> {
        let mut customer = self.get_customer(id).await?;
        let mut changes = false;

        if let Some(name) = update.name {
            if name != customer.name {
                customer.name = name;
                changes = true;
            }
        }

        if let Some(email) = update.email {
            if email != customer.email {
                if self.repo.exists_customer_with_email(&email).await? {
                    debug!(%email, "email already registered");
                    return Err(ServiceError::email_taken());
                }
                customer.email = email;
                changes = true;
            }
        }

        if let Some(age) = update.age {
            if age != customer.age {
                customer.age = age;
                changes = true;
            }
        }

        if !changes {
            debug!("update carries no changes");
            return Err(ServiceError::no_changes());
        }

        self.repo.update_customer(customer).await?;
        info!(customer_id = id, "customer_updated");
        Ok(())
    }
}
