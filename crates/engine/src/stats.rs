//! Aggregates computed over the persisted expenses.
use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

use crate::Expense;

/// Amount spent in one category and its share of the total.
#[derive(Clone, Debug, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    pub amount: f64,
    pub percentage: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ExpenseStats {
    pub total_amount: f64,
    pub total_entries: usize,
    pub average_amount: f64,
    /// Expenses dated in the month of `today`, per category and sorted by
    /// name. Percentages are relative to the all-time `total_amount`.
    pub monthly_breakdown: Vec<CategoryTotal>,
}

impl ExpenseStats {
    pub fn from_expenses(expenses: &[Expense], today: NaiveDate) -> Self {
        let total_amount: f64 = expenses.iter().map(|e| e.amount).sum();
        let total_entries = expenses.len();
        let average_amount = if total_entries > 0 {
            total_amount / total_entries as f64
        } else {
            0.0
        };

        let by_category = expenses
            .iter()
            .filter(|e| {
                e.date.is_some_and(|date| {
                    date.year() == today.year() && date.month() == today.month()
                })
            })
            .fold(BTreeMap::<&str, f64>::new(), |mut acc, expense| {
                *acc.entry(expense.category.as_str()).or_default() += expense.amount;
                acc
            });

        let monthly_breakdown = by_category
            .into_iter()
            .map(|(category, amount)| CategoryTotal {
                category: category.to_string(),
                amount,
                percentage: if total_amount != 0.0 {
                    amount / total_amount * 100.0
                } else {
                    0.0
                },
            })
            .collect();

        Self {
            total_amount,
            total_entries,
            average_amount,
            monthly_breakdown,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDateTime;

    use super::*;

    fn at(year: i32, month: u32, day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 20).unwrap()
    }

    #[test]
    fn empty_store_has_zero_average() {
        let stats = ExpenseStats::from_expenses(&[], today());
        assert_eq!(stats.total_entries, 0);
        assert_eq!(stats.total_amount, 0.0);
        assert_eq!(stats.average_amount, 0.0);
        assert!(stats.monthly_breakdown.is_empty());
    }

    #[test]
    fn current_month_is_grouped_by_category() {
        let expenses = [
            Expense::new(10.0, "food", "lunch", Some(at(2024, 5, 1))),
            Expense::new(5.0, "coffee", "espresso", Some(at(2024, 5, 2))),
            Expense::new(5.0, "food", "snack", Some(at(2024, 5, 31))),
        ];

        let stats = ExpenseStats::from_expenses(&expenses, today());
        assert_eq!(stats.total_entries, 3);
        assert_eq!(stats.total_amount, 20.0);
        assert!((stats.average_amount - 20.0 / 3.0).abs() < 1e-9);
        assert_eq!(
            stats.monthly_breakdown,
            vec![
                CategoryTotal {
                    category: "coffee".to_string(),
                    amount: 5.0,
                    percentage: 25.0,
                },
                CategoryTotal {
                    category: "food".to_string(),
                    amount: 15.0,
                    percentage: 75.0,
                },
            ]
        );
    }

    #[test]
    fn older_expenses_count_in_totals_but_not_in_breakdown() {
        let expenses = [
            Expense::new(15.0, "food", "lunch", Some(at(2024, 5, 3))),
            Expense::new(80.0, "travel", "train", Some(at(2024, 4, 28))),
            Expense::new(5.0, "food", "snack", Some(at(2023, 5, 3))),
        ];

        let stats = ExpenseStats::from_expenses(&expenses, today());
        assert_eq!(stats.total_amount, 100.0);
        assert_eq!(stats.total_entries, 3);
        assert_eq!(
            stats.monthly_breakdown,
            vec![CategoryTotal {
                category: "food".to_string(),
                amount: 15.0,
                percentage: 15.0,
            }]
        );
    }

    #[test]
    fn undated_expenses_are_left_out_of_breakdown() {
        let undated = Expense {
            date: None,
            ..Expense::new(5.0, "misc", "imported", None)
        };

        let stats = ExpenseStats::from_expenses(&[undated], today());
        assert_eq!(stats.total_amount, 5.0);
        assert!(stats.monthly_breakdown.is_empty());
    }

    #[test]
    fn zero_total_yields_zero_percentages() {
        let expenses = [
            Expense::new(5.0, "refund", "returned", Some(at(2024, 5, 1))),
            Expense::new(-5.0, "refund", "returned", Some(at(2024, 5, 1))),
        ];

        let stats = ExpenseStats::from_expenses(&expenses, today());
        assert_eq!(stats.monthly_breakdown.len(), 1);
        assert_eq!(stats.monthly_breakdown[0].percentage, 0.0);
    }
}
