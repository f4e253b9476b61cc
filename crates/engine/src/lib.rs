//! Domain and persistence layer of the expense tracker.
//!
//! [`ExpenseRepository`] maps [`Expense`] values to the `expense` table and
//! [`Engine`] is the service the HTTP layer talks to.
use chrono::NaiveDate;

pub use error::EngineError;
pub use expense::Expense;
pub use repository::ExpenseRepository;
pub use stats::{CategoryTotal, ExpenseStats};

mod error;
mod expense;
mod repository;
mod stats;

type ResultEngine<T> = Result<T, EngineError>;

#[derive(Debug)]
pub struct Engine {
    repository: ExpenseRepository,
}

impl Engine {
    /// Return a builder for `Engine`. Help to build the struct.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }

    /// Every persisted expense.
    pub async fn get_all_expenses(&self) -> ResultEngine<Vec<Expense>> {
        Ok(self.repository.find_all().await?)
    }

    /// The expense stored under `id`.
    ///
    /// A missing row is reported as [`EngineError::KeyNotFound`].
    pub async fn get_expense_by_id(&self, id: i64) -> ResultEngine<Expense> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| EngineError::KeyNotFound(id.to_string()))
    }

    /// Insert or replace `expense`, see [`ExpenseRepository::save`].
    pub async fn save_expense(&self, expense: Expense) -> ResultEngine<Expense> {
        Ok(self.repository.save(&expense).await?)
    }

    pub async fn delete_expense(&self, id: i64) -> ResultEngine<()> {
        Ok(self.repository.delete_by_id(id).await?)
    }

    /// Totals over every expense, with the category breakdown limited to the
    /// month containing `today`.
    pub async fn expense_stats(&self, today: NaiveDate) -> ResultEngine<ExpenseStats> {
        let expenses = self.repository.find_all().await?;
        Ok(ExpenseStats::from_expenses(&expenses, today))
    }
}

/// The builder for `Engine`
#[derive(Default)]
pub struct EngineBuilder {
    repository: Option<ExpenseRepository>,
}

impl EngineBuilder {
    /// Pass the required repository
    pub fn repository(mut self, repository: ExpenseRepository) -> EngineBuilder {
        self.repository = Some(repository);
        self
    }

    /// Construct `Engine`
    pub fn build(self) -> ResultEngine<Engine> {
        let repository = self
            .repository
            .ok_or_else(|| EngineError::MissingComponent("repository".to_string()))?;
        Ok(Engine { repository })
    }
}
