use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, PaginatorTrait, QueryFilter, Set};

use models::customer;

use crate::customer::domain::{Customer, NewCustomer};
use crate::customer::repository::CustomerRepository;
use crate::errors::ServiceError;

/// SeaORM-backed repository implementation.
pub struct SeaOrmCustomerRepository {
    db: DatabaseConnection,
}

impl SeaOrmCustomerRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl CustomerRepository for SeaOrmCustomerRepository {
    async fn select_all_customers(&self) -> Result<Vec<Customer>, ServiceError> {
        let rows = customer::Entity::find().all(&self.db).await?;
        rows.into_iter().map(|m| Customer::try_from(m).map_err(ServiceError::from)).collect()
    }

    async fn select_customer_by_id(&self, id: i32) -> Result<Option<Customer>, ServiceError> {
        let row = customer::Entity::find_by_id(id).one(&self.db).await?;
        Ok(row.map(Customer::try_from).transpose()?)
    }

    async fn insert_customer(&self, new: NewCustomer) -> Result<(), ServiceError> {
        let am = customer::ActiveModel {
            id: NotSet,
            name: Set(new.name),
            email: Set(new.email),
            age: Set(new.age),
            gender: Set(new.gender.as_str().to_string()),
        };
        am.insert(&self.db).await?;
        Ok(())
    }

    /// Merge by id: only columns whose value differs from the stored row are written.
    async fn update_customer(&self, update: Customer) -> Result<(), ServiceError> {
        let Some(stored) = customer::Entity::find_by_id(update.id).one(&self.db).await? else {
            return Ok(());
        };

        let mut am: customer::ActiveModel = stored.clone().into();
        if stored.name != update.name { am.name = Set(update.name); }
        if stored.email != update.email { am.email = Set(update.email); }
        if stored.age != update.age { am.age = Set(update.age); }
        if stored.gender != update.gender.as_str() { am.gender = Set(update.gender.as_str().to_string()); }

        if am.is_changed() {
            am.save(&self.db).await?;
        }
        Ok(())
    }

    async fn delete_customer_by_id(&self, id: i32) -> Result<(), ServiceError> {
        customer::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(())
    }

    async fn exists_customer_with_email(&self, email: &str) -> Result<bool, ServiceError> {
        let count = customer::Entity::find()
            .filter(customer::Column::Email.eq(email))
            .count(&self.db)
            .await?;
        Ok(count > 0)
    }

    async fn exists_customer_with_id(&self, id: i32) -> Result<bool, ServiceError> {
        let count = customer::Entity::find_by_id(id).count(&self.db).await?;
        Ok(count > 0)
    }
}
