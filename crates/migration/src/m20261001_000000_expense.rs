//! Creates the `expense` table.
//!
//! `expense_date` is the only nullable column: the service always fills it,
//! but rows written by other tools may leave it empty.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Expense::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Expense::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Expense::Amount).double().not_null())
                    .col(ColumnDef::new(Expense::Category).text().not_null())
                    .col(ColumnDef::new(Expense::Description).text().not_null())
                    .col(ColumnDef::new(Expense::ExpenseDate).timestamp())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Expense::Table).to_owned())
            .await
    }
}

/// Learn more at https://docs.rs/sea-query#iden
#[derive(Iden)]
enum Expense {
    Table,
    Id,
    Amount,
    Category,
    Description,
    ExpenseDate,
}
