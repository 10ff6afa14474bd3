use async_trait::async_trait;
use sea_orm::sea_query::{Alias, Expr, Query, SimpleExpr};
use sea_orm::{ConnectionTrait, DatabaseConnection, QueryResult, Statement, StatementBuilder, TransactionTrait};
use tracing::debug;

use crate::customer::domain::{Customer, NewCustomer};
use crate::customer::repository::CustomerRepository;
use crate::errors::ServiceError;

const TABLE: &str = "customer";
const COLUMNS: [&str; 5] = ["id", "name", "email", "age", "gender"];

/// Customer store speaking SQL directly: every operation is a parameterized
/// statement built with `sea_query` and run on the raw connection, with rows
/// read back by column name. No entity mapping is involved.
pub struct SqlCustomerRepository {
    db: DatabaseConnection,
}

fn ident(name: &str) -> Alias { Alias::new(name) }

fn row_to_customer(row: &QueryResult) -> Result<Customer, ServiceError> {
    let gender: String = row.try_get("", "gender")?;
    Ok(Customer {
        id: row.try_get("", "id")?,
        name: row.try_get("", "name")?,
        email: row.try_get("", "email")?,
        age: row.try_get("", "age")?,
        gender: gender.parse()?,
    })
}

impl SqlCustomerRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }

    fn build<S: StatementBuilder>(&self, stmt: &S) -> Statement {
        let stmt = self.db.get_database_backend().build(stmt);
        debug!(sql = %stmt.sql, "customer statement");
        stmt
    }

    async fn count_where(&self, column: &str, value: SimpleExpr) -> Result<i64, ServiceError> {
        let query = Query::select()
            .expr_as(Expr::col(ident("id")).count(), ident("count"))
            .from(ident(TABLE))
            .and_where(Expr::col(ident(column)).eq(value))
            .to_owned();
        let row = self.db.query_one(self.build(&query)).await?;
        match row {
            Some(row) => Ok(row.try_get("", "count")?),
            None => Ok(0),
        }
    }
}

#[async_trait]
impl CustomerRepository for SqlCustomerRepository {
    async fn select_all_customers(&self) -> Result<Vec<Customer>, ServiceError> {
        let query = Query::select()
            .columns(COLUMNS.map(ident))
            .from(ident(TABLE))
            .to_owned();
        let rows = self.db.query_all(self.build(&query)).await?;
        rows.iter().map(row_to_customer).collect()
    }

    async fn select_customer_by_id(&self, id: i32) -> Result<Option<Customer>, ServiceError> {
        let query = Query::select()
            .columns(COLUMNS.map(ident))
            .from(ident(TABLE))
            .and_where(Expr::col(ident("id")).eq(id))
            .to_owned();
        let row = self.db.query_one(self.build(&query)).await?;
        row.as_ref().map(row_to_customer).transpose()
    }

    async fn insert_customer(&self, customer: NewCustomer) -> Result<(), ServiceError> {
        let mut insert = Query::insert();
        insert
            .into_table(ident(TABLE))
            .columns([ident("name"), ident("email"), ident("age"), ident("gender")])
            .values([
                customer.name.into(),
                customer.email.into(),
                customer.age.into(),
                customer.gender.as_str().into(),
            ])
            .map_err(|e| sea_orm::DbErr::Custom(e.to_string()))?;
        self.db.execute(self.build(&insert)).await?;
        Ok(())
    }

    /// One `UPDATE` per column, all inside a single transaction so a failure
    /// part-way leaves the row untouched.
    async fn update_customer(&self, update: Customer) -> Result<(), ServiceError> {
        let assignments: [(&str, SimpleExpr); 4] = [
            ("name", update.name.into()),
            ("email", update.email.into()),
            ("age", update.age.into()),
            ("gender", update.gender.as_str().into()),
        ];

        let txn = self.db.begin().await?;
        for (column, value) in assignments {
            let stmt = Query::update()
                .table(ident(TABLE))
                .value(ident(column), value)
                .and_where(Expr::col(ident("id")).eq(update.id))
                .to_owned();
            if let Err(e) = txn.execute(self.build(&stmt)).await {
                txn.rollback().await?;
                return Err(e.into());
            }
        }
        txn.commit().await?;
        Ok(())
    }

    async fn delete_customer_by_id(&self, id: i32) -> Result<(), ServiceError> {
        let stmt = Query::delete()
            .from_table(ident(TABLE))
            .and_where(Expr::col(ident("id")).eq(id))
            .to_owned();
        self.db.execute(self.build(&stmt)).await?;
        Ok(())
    }

    async fn exists_customer_with_email(&self, email: &str) -> Result<bool, ServiceError> {
        Ok(self.count_where("email", email.into()).await? > 0)
    }

    async fn exists_customer_with_id(&self, id: i32) -> Result<bool, ServiceError> {
        Ok(self.count_where("id", id.into()).await? > 0)
    }
}
