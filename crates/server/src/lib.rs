use api_types::ErrorBody;
use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::IntoResponse,
};
use engine::EngineError;

pub use server::{ServerState, router, run_with_listener};

mod categories;
mod people;
mod server;
mod transactions;

pub enum ServerError {
    Engine(EngineError),
    /// Malformed path or query string.
    Generic(String),
    Json(JsonRejection),
}

fn status_for_engine_error(err: &EngineError) -> StatusCode {
    match err {
        EngineError::KeyNotFound(_) => StatusCode::NOT_FOUND,
        EngineError::ExistingKey(_) | EngineError::StillReferenced(..) => StatusCode::CONFLICT,
        EngineError::Database(_) | EngineError::Overflow(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
        EngineError::InvalidInput(_) | EngineError::RuleViolation(_) => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
    }
}

fn message_for_engine_error(err: &EngineError) -> String {
    match err {
        EngineError::Database(db_err) => {
            tracing::error!("database error: {db_err}");
            "internal server error".to_string()
        }
        other => other.to_string(),
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let (status, error, reason) = match self {
            ServerError::Engine(err) => (
                status_for_engine_error(&err),
                message_for_engine_error(&err),
                err.reason(),
            ),
            ServerError::Generic(err) => (StatusCode::BAD_REQUEST, err, "bad-request".to_string()),
            ServerError::Json(rejection) => (
                rejection.status(),
                rejection.body_text(),
                "invalid-body".to_string(),
            ),
        };

        (status, Json(ErrorBody { error, reason })).into_response()
    }
}

impl From<EngineError> for ServerError {
    fn from(value: EngineError) -> Self {
        Self::Engine(value)
    }
}

impl From<QueryRejection> for ServerError {
    fn from(value: QueryRejection) -> Self {
        Self::Generic(value.body_text())
    }
}

impl From<PathRejection> for ServerError {
    fn from(value: PathRejection) -> Self {
        Self::Generic(value.body_text())
    }
}

impl From<JsonRejection> for ServerError {
    fn from(value: JsonRejection) -> Self {
        Self::Json(value)
    }
}
