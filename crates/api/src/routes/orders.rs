//! Route definitions for the `/orders` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::orders;
use crate::state::AppState;

/// Routes mounted at `/orders`.
///
/// ```text
/// POST /validate   -> validate_order
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/validate", post(orders::validate_order))
}
