use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Customer: lookups by name for the admin listing
        manager
            .create_index(
                Index::create()
                    .name("idx_customer_name")
                    .table(Customer::Table)
                    .col(Customer::Name)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_customer_name").table(Customer::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Customer { Table, Name }
