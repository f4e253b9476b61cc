//! The module contains the `Expense` type, the only record kept by the engine.
use core::fmt;

use chrono::{Local, NaiveDateTime};

/// A single recorded outlay.
///
/// `id` is `None` until the record has been persisted once; the repository
/// hands back a new value carrying the id assigned by the store.
#[derive(Clone, Debug, PartialEq)]
pub struct Expense {
    pub id: Option<i64>,
    pub amount: f64,
    pub category: String,
    pub description: String,
    pub date: Option<NaiveDateTime>,
}

impl Expense {
    /// Build a not yet persisted expense. A missing `date` defaults to the
    /// current local wall-clock time.
    pub fn new(
        amount: f64,
        category: impl Into<String>,
        description: impl Into<String>,
        date: Option<NaiveDateTime>,
    ) -> Self {
        Self {
            id: None,
            amount,
            category: category.into(),
            description: description.into(),
            date: Some(date.unwrap_or_else(|| Local::now().naive_local())),
        }
    }

    /// Return the same expense addressed by `id`.
    pub fn with_id(self, id: i64) -> Self {
        Self {
            id: Some(id),
            ..self
        }
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.amount, self.category, self.description)
    }
}
