//! Statistics API endpoints

use api_types::stats::{CategoryTotal, ExpenseStats};
use axum::{Json, extract::State};
use chrono::Local;

use crate::{ServerError, server::ServerState};

/// Handle requests for totals over every stored expense
///
/// The category breakdown is for the server's current local month.
pub async fn get_stats(State(state): State<ServerState>) -> Result<Json<ExpenseStats>, ServerError> {
    let today = Local::now().date_naive();
    let stats = state.engine.expense_stats(today).await?;

    Ok(Json(ExpenseStats {
        total_amount: stats.total_amount,
        total_entries: stats.total_entries as u64,
        average_amount: stats.average_amount,
        monthly_breakdown: stats
            .monthly_breakdown
            .into_iter()
            .map(|c| CategoryTotal {
                category: c.category,
                amount: c.amount,
                percentage: c.percentage,
            })
            .collect(),
    }))
}
