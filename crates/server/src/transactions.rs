//! Transactions API endpoints.

use api_types::{
    PageQuery, PaginatedResult, TransactionType,
    transaction::{Transaction, TransactionNew},
};
use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
};
use engine::{Page, TransactionInput};
use uuid::Uuid;

use crate::{ServerError, server::ServerState};

pub(crate) fn paginated<T>(page: Page<T>) -> PaginatedResult<T> {
    PaginatedResult {
        data: page.data,
        current_page: page.current_page,
        page_size: page.page_size,
        total_records: page.total_records,
        total_pages: page.total_pages,
    }
}

fn input(payload: TransactionNew) -> TransactionInput {
    let kind = match payload.kind {
        TransactionType::Expense => engine::TransactionType::Expense,
        TransactionType::Income => engine::TransactionType::Income,
    };
    TransactionInput {
        description: payload.description,
        amount: payload.amount,
        kind,
        person_id: payload.person_id,
        category_id: payload.category_id,
    }
}

fn map_transaction(tx: engine::Transaction) -> Transaction {
    let kind = match tx.kind {
        engine::TransactionType::Expense => TransactionType::Expense,
        engine::TransactionType::Income => TransactionType::Income,
    };
    Transaction {
        id: tx.id,
        description: tx.description,
        amount: tx.amount.to_decimal(),
        kind,
        person_id: tx.person_id,
        category_id: tx.category_id,
    }
}

pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<TransactionNew>, JsonRejection>,
) -> Result<(StatusCode, Json<Transaction>), ServerError> {
    let Json(payload) = payload?;
    let tx = state.engine.create_transaction(input(payload)).await?;
    Ok((StatusCode::CREATED, Json(map_transaction(tx))))
}

pub async fn list(
    State(state): State<ServerState>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<Json<PaginatedResult<Transaction>>, ServerError> {
    let Query(query) = query?;
    let page = state
        .engine
        .transactions(query.page, query.page_size)
        .await?;
    Ok(Json(paginated(page.map(map_transaction))))
}

pub async fn get(
    State(state): State<ServerState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<Transaction>, ServerError> {
    let Path(id) = id?;
    let tx = state.engine.transaction(id).await?;
    Ok(Json(map_transaction(tx)))
}

pub async fn update(
    State(state): State<ServerState>,
    id: Result<Path<Uuid>, PathRejection>,
    payload: Result<Json<TransactionNew>, JsonRejection>,
) -> Result<Json<Transaction>, ServerError> {
    let Path(id) = id?;
    let Json(payload) = payload?;
    let tx = state.engine.update_transaction(id, input(payload)).await?;
    Ok(Json(map_transaction(tx)))
}
