//! Categories API endpoints.

use api_types::{
    CategoryPurpose, IdQuery, PageQuery, PaginatedResult,
    category::{CategoriesSummary, Category, CategoryNew, CategoryTotals},
};
use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
};
use engine::CategoryInput;
use uuid::Uuid;

use crate::{ServerError, server::ServerState, transactions::paginated};

fn map_purpose(purpose: engine::CategoryPurpose) -> CategoryPurpose {
    match purpose {
        engine::CategoryPurpose::Expense => CategoryPurpose::Expense,
        engine::CategoryPurpose::Income => CategoryPurpose::Income,
        engine::CategoryPurpose::Both => CategoryPurpose::Both,
    }
}

fn input(payload: CategoryNew) -> CategoryInput {
    let purpose = match payload.purpose {
        CategoryPurpose::Expense => engine::CategoryPurpose::Expense,
        CategoryPurpose::Income => engine::CategoryPurpose::Income,
        CategoryPurpose::Both => engine::CategoryPurpose::Both,
    };
    CategoryInput {
        description: payload.description,
        purpose,
    }
}

fn map_category(category: engine::Category) -> Category {
    Category {
        id: category.id,
        description: category.description,
        purpose: map_purpose(category.purpose),
    }
}

pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<CategoryNew>, JsonRejection>,
) -> Result<(StatusCode, Json<Category>), ServerError> {
    let Json(payload) = payload?;
    let category = state.engine.create_category(input(payload)).await?;
    Ok((StatusCode::CREATED, Json(map_category(category))))
}

pub async fn list(
    State(state): State<ServerState>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<Json<PaginatedResult<Category>>, ServerError> {
    let Query(query) = query?;
    let page = state.engine.categories(query.page, query.page_size).await?;
    Ok(Json(paginated(page.map(map_category))))
}

pub async fn get(
    State(state): State<ServerState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<Category>, ServerError> {
    let Path(id) = id?;
    let category = state.engine.category(id).await?;
    Ok(Json(map_category(category)))
}

pub async fn update(
    State(state): State<ServerState>,
    query: Result<Query<IdQuery>, QueryRejection>,
    payload: Result<Json<CategoryNew>, JsonRejection>,
) -> Result<Json<Category>, ServerError> {
    let Query(IdQuery { id }) = query?;
    let Json(payload) = payload?;
    let category = state.engine.update_category(id, input(payload)).await?;
    Ok(Json(map_category(category)))
}

pub async fn summary(
    State(state): State<ServerState>,
) -> Result<Json<CategoriesSummary>, ServerError> {
    let summary = state.engine.category_summary().await?;
    let category_summary = summary
        .rows
        .into_iter()
        .map(|row| CategoryTotals {
            id: row.category.id,
            description: row.category.description,
            purpose: map_purpose(row.category.purpose),
            income: row.totals.income,
            expense: row.totals.expense,
            balance: row.totals.balance,
        })
        .collect();

    Ok(Json(CategoriesSummary {
        category_summary,
        total_income: summary.total.income,
        total_expense: summary.total.expense,
        total_balance: summary.total.balance,
    }))
}
