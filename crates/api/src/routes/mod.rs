pub mod catalog;
pub mod health;
pub mod orders;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /categories                  list categories
/// /products                    list product summaries
/// /products/{id}               product detail
/// /catalog/report              catalog verification report
/// /orders/validate             validate an order (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(catalog::router())
        .nest("/orders", orders::router())
}
