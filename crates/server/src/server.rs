use axum::{
    Router,
    extract::{MatchedPath, Request},
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use std::sync::Arc;

use crate::{categories, people, transactions};
use engine::Engine;

#[derive(Clone)]
pub struct ServerState {
    pub engine: Arc<Engine>,
}

fn api() -> Router<ServerState> {
    Router::new()
        .route(
            "/person",
            post(people::create)
                .put(people::update)
                .delete(people::delete),
        )
        .route("/person/All", get(people::list))
        .route("/person/search", get(people::search))
        .route("/person/GetPeopleSummary", get(people::summary))
        .route("/person/{id}", get(people::get))
        .route("/category", post(categories::create).put(categories::update))
        .route("/category/All", get(categories::list))
        .route("/category/GetCategoriesSummary", get(categories::summary))
        .route("/category/{id}", get(categories::get))
        .route("/transaction", post(transactions::create))
        .route("/transaction/All", get(transactions::list))
        .route(
            "/transaction/{id}",
            get(transactions::get).put(transactions::update),
        )
}

/// The full application router, with request tracing and CORS for the
/// browser front-end.
pub fn router(state: ServerState) -> Router {
    let tracing_layer = TraceLayer::new_for_http().make_span_with(|req: &Request| {
        let method = req.method();
        let uri = req.uri();
        let matched_path = req
            .extensions()
            .get::<MatchedPath>()
            .map(|matched_path| matched_path.as_str());

        tracing::debug_span!("request", %method, %uri, matched_path)
    });

    Router::new()
        .nest("/api/v1.0", api())
        .layer(tracing_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn run_with_listener(
    engine: Engine,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    let state = ServerState {
        engine: Arc::new(engine),
    };

    axum::serve(listener, router(state)).await
}
