//! Expense API endpoints, mounted under `/api/expense`.

use api_types::expense::Expense;
use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};

use crate::{ServerError, server::ServerState};

fn map_expense(expense: engine::Expense) -> Expense {
    Expense {
        id: expense.id,
        amount: expense.amount,
        category: expense.category,
        description: expense.description,
        date: expense.date,
    }
}

/// Turn a request body into a not yet persisted expense. A client supplied
/// `id` is dropped; the path decides which row gets written.
fn unsaved_expense(body: Expense) -> engine::Expense {
    engine::Expense::new(body.amount, body.category, body.description, body.date)
}

/// Handle requests for listing every expense
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<Expense>>, ServerError> {
    let expenses = state
        .engine
        .get_all_expenses()
        .await?
        .into_iter()
        .map(map_expense)
        .collect();

    Ok(Json(expenses))
}

pub async fn get(
    State(state): State<ServerState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Expense>, ServerError> {
    let Path(id) = id?;
    let expense = state.engine.get_expense_by_id(id).await?;

    Ok(Json(map_expense(expense)))
}

/// Handle requests for creating a new expense. The store assigns the id.
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<Expense>, JsonRejection>,
) -> Result<Json<Expense>, ServerError> {
    let Json(payload) = payload?;
    let expense = state.engine.save_expense(unsaved_expense(payload)).await?;

    Ok(Json(map_expense(expense)))
}

/// Handle requests replacing the expense at `id`, creating it when missing.
pub async fn update(
    State(state): State<ServerState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<Expense>, JsonRejection>,
) -> Result<Json<Expense>, ServerError> {
    let Path(id) = id?;
    let Json(payload) = payload?;
    let expense = state
        .engine
        .save_expense(unsaved_expense(payload).with_id(id))
        .await?;

    Ok(Json(map_expense(expense)))
}

pub async fn delete(
    State(state): State<ServerState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, ServerError> {
    let Path(id) = id?;
    state.engine.delete_expense(id).await?;

    Ok(StatusCode::OK)
}
