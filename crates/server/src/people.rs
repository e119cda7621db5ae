//! People API endpoints.

use api_types::{
    IdQuery, PageQuery, PaginatedResult,
    person::{NameQuery, PeopleSummary, Person, PersonNew, PersonTotals},
};
use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
};
use engine::PersonInput;
use uuid::Uuid;

use crate::{ServerError, server::ServerState, transactions::paginated};

fn map_person(person: engine::Person) -> Person {
    Person {
        id: person.id,
        name: person.name,
        age: person.age,
    }
}

fn input(payload: PersonNew) -> PersonInput {
    PersonInput {
        name: payload.name,
        age: payload.age,
    }
}

pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<PersonNew>, JsonRejection>,
) -> Result<(StatusCode, Json<Person>), ServerError> {
    let Json(payload) = payload?;
    let person = state.engine.create_person(input(payload)).await?;
    Ok((StatusCode::CREATED, Json(map_person(person))))
}

pub async fn list(
    State(state): State<ServerState>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<Json<PaginatedResult<Person>>, ServerError> {
    let Query(query) = query?;
    let page = state.engine.people(query.page, query.page_size).await?;
    Ok(Json(paginated(page.map(map_person))))
}

pub async fn get(
    State(state): State<ServerState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<Person>, ServerError> {
    let Path(id) = id?;
    let person = state.engine.person(id).await?;
    Ok(Json(map_person(person)))
}

pub async fn search(
    State(state): State<ServerState>,
    query: Result<Query<NameQuery>, QueryRejection>,
) -> Result<Json<Person>, ServerError> {
    let Query(query) = query?;
    let person = state.engine.person_by_name(&query.name).await?;
    Ok(Json(map_person(person)))
}

pub async fn update(
    State(state): State<ServerState>,
    query: Result<Query<IdQuery>, QueryRejection>,
    payload: Result<Json<PersonNew>, JsonRejection>,
) -> Result<Json<Person>, ServerError> {
    let Query(IdQuery { id }) = query?;
    let Json(payload) = payload?;
    let person = state.engine.update_person(id, input(payload)).await?;
    Ok(Json(map_person(person)))
}

pub async fn delete(
    State(state): State<ServerState>,
    query: Result<Query<IdQuery>, QueryRejection>,
) -> Result<StatusCode, ServerError> {
    let Query(IdQuery { id }) = query?;
    state.engine.delete_person(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn summary(
    State(state): State<ServerState>,
) -> Result<Json<PeopleSummary>, ServerError> {
    let summary = state.engine.person_summary().await?;
    let person_summary = summary
        .rows
        .into_iter()
        .map(|row| PersonTotals {
            id: row.person.id,
            name: row.person.name,
            age: row.person.age,
            income: row.totals.income,
            expense: row.totals.expense,
            balance: row.totals.balance,
        })
        .collect();

    Ok(Json(PeopleSummary {
        person_summary,
        total_income: summary.total.income,
        total_expense: summary.total.expense,
        total_balance: summary.total.balance,
    }))
}
