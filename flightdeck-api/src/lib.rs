use axum::{
    http::{header, Method},
    routing::get,
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod error;
pub mod graphql;
pub mod state;

pub use graphql::{build_schema, FlightSchema};
pub use state::AppState;

/// Single endpoint: `POST /` runs GraphQL operations, `GET /` serves the
/// playground.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::USER_AGENT]);

    Router::new()
        .route(
            "/",
            get(graphql::graphql_playground).post(graphql::graphql_handler),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
