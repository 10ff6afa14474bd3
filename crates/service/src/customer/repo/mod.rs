//! Storage backends for the customer repository.
//!
//! - `memory`: process-local list, optionally seeded with sample customers
//! - `sql`: hand-built SQL statements over the raw connection
//! - `seaorm`: sea-orm entity operations
//!
//! [`build_repository`] picks one from the configured backend tag.

pub mod memory;
pub mod seaorm;
pub mod sql;

use std::sync::Arc;

use configs::StorageBackend;
use sea_orm::DatabaseConnection;
use tracing::info;

use super::repository::CustomerRepository;
use crate::errors::ServiceError;

pub use memory::InMemoryCustomerRepository;
pub use seaorm::SeaOrmCustomerRepository;
pub use sql::SqlCustomerRepository;

/// Compose the repository for `backend`. Relational backends require `db`.
pub fn build_repository(
    backend: StorageBackend,
    db: Option<DatabaseConnection>,
    seed: bool,
) -> Result<Arc<dyn CustomerRepository>, ServiceError> {
    info!(backend = backend.as_str(), seed, "building customer repository");
    let repo: Arc<dyn CustomerRepository> = match (backend, db) {
        (StorageBackend::Memory, _) if seed => Arc::new(InMemoryCustomerRepository::seeded()),
        (StorageBackend::Memory, _) => Arc::new(InMemoryCustomerRepository::new()),
        (StorageBackend::Sql, Some(db)) => Arc::new(SqlCustomerRepository::new(db)),
        (StorageBackend::Orm, Some(db)) => Arc::new(SeaOrmCustomerRepository::new(db)),
        (other, None) => {
            return Err(ServiceError::Storage(format!("storage backend `{}` needs a database connection", other.as_str())));
        }
    };
    Ok(repo)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn memory_backend_honours_seed_flag() -> Result<(), anyhow::Error> {
        let seeded = build_repository(StorageBackend::Memory, None, true)?;
        assert_eq!(seeded.select_all_customers().await?.len(), 2);

        let empty = build_repository(StorageBackend::Memory, None, false)?;
        assert!(empty.select_all_customers().await?.is_empty());
        Ok(())
    }

    #[test]
    fn relational_backends_require_connection() {
        assert!(matches!(build_repository(StorageBackend::Sql, None, true), Err(ServiceError::Storage(_))));
        assert!(matches!(build_repository(StorageBackend::Orm, None, false), Err(ServiceError::Storage(_))));
    }

    #[tokio::test]
    async fn relational_backends_share_one_database() -> Result<(), anyhow::Error> {
        let db = crate::test_support::get_db().await?;
        let sql = build_repository(StorageBackend::Sql, Some(db.clone()), true)?;
        let orm = build_repository(StorageBackend::Orm, Some(db), true)?;

        sql.insert_customer(crate::customer::NewCustomer {
            name: "alex".into(),
            email: "alex@gmail.com".into(),
            age: 21,
            gender: crate::customer::Gender::Male,
        })
        .await?;
        assert!(orm.exists_customer_with_email("alex@gmail.com").await?);
        Ok(())
    }
}
