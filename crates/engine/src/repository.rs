//! Persistence of [`Expense`] values in the `expense` table.
//!
//! Every operation is a single SQL statement, so the store's per-statement
//! transaction is the only concurrency control involved.
use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, QueryResult, Statement, Value};

use crate::Expense;

const COLUMNS: &str = "id, amount, category, description, expense_date";

const SELECT_ALL: &str =
    "SELECT id, amount, category, description, expense_date FROM expense ORDER BY id";

const SELECT_BY_ID: &str =
    "SELECT id, amount, category, description, expense_date FROM expense WHERE id = ?";

const INSERT: &str =
    "INSERT INTO expense (amount, category, description, expense_date) VALUES (?, ?, ?, ?)";

const UPSERT: &str = "INSERT INTO expense (id, amount, category, description, expense_date) \
     VALUES (?, ?, ?, ?, ?) \
     ON CONFLICT(id) DO UPDATE SET \
     amount = excluded.amount, \
     category = excluded.category, \
     description = excluded.description, \
     expense_date = excluded.expense_date";

const DELETE_BY_ID: &str = "DELETE FROM expense WHERE id = ?";

/// Maps expenses to and from rows of the `expense` table.
#[derive(Clone, Debug)]
pub struct ExpenseRepository {
    database: DatabaseConnection,
}

impl ExpenseRepository {
    pub fn new(database: DatabaseConnection) -> Self {
        Self { database }
    }

    /// Every persisted expense, ordered by id.
    pub async fn find_all(&self) -> Result<Vec<Expense>, DbErr> {
        let rows = self.database.query_all(self.statement(SELECT_ALL, vec![])).await?;
        rows.iter().map(decode_row).collect()
    }

    /// The expense stored under `id`, `None` when there is no such row.
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Expense>, DbErr> {
        self.database
            .query_one(self.statement(SELECT_BY_ID, vec![id.into()]))
            .await?
            .as_ref()
            .map(decode_row)
            .transpose()
    }

    /// Persist `expense` and return the stored row.
    ///
    /// Without an id the store assigns a fresh one. With an id the row is
    /// overwritten field by field, or inserted under that id when missing.
    pub async fn save(&self, expense: &Expense) -> Result<Expense, DbErr> {
        let mut values: Vec<Value> = Vec::with_capacity(5);
        let sql = match expense.id {
            None => returning(INSERT),
            Some(id) => {
                values.push(id.into());
                returning(UPSERT)
            }
        };
        values.extend([
            Value::from(expense.amount),
            Value::from(expense.category.clone()),
            Value::from(expense.description.clone()),
            Value::from(expense.date),
        ]);

        let row = self
            .database
            .query_one(self.statement(&sql, values))
            .await?
            .ok_or(DbErr::RecordNotInserted)?;
        let saved = decode_row(&row)?;
        tracing::debug!("saved expense {:?}", saved.id);
        Ok(saved)
    }

    /// Remove the row stored under `id`. Missing rows are not an error.
    pub async fn delete_by_id(&self, id: i64) -> Result<(), DbErr> {
        let result = self
            .database
            .execute(self.statement(DELETE_BY_ID, vec![id.into()]))
            .await?;
        tracing::debug!("deleted expense {id}: {} row(s)", result.rows_affected());
        Ok(())
    }

    fn statement(&self, sql: &str, values: Vec<Value>) -> Statement {
        Statement::from_sql_and_values(self.database.get_database_backend(), sql, values)
    }
}

fn returning(sql: &str) -> String {
    format!("{sql} RETURNING {COLUMNS}")
}

fn decode_row(row: &QueryResult) -> Result<Expense, DbErr> {
    Ok(Expense {
        id: Some(row.try_get("", "id")?),
        amount: row.try_get("", "amount")?,
        category: row.try_get("", "category")?,
        description: row.try_get("", "description")?,
        date: row.try_get("", "expense_date")?,
    })
}
