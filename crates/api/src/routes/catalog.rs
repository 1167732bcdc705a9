//! Route definitions for the read-only catalog resources.

use axum::routing::get;
use axum::Router;

use crate::handlers::catalog;
use crate::state::AppState;

/// ```text
/// GET /categories       -> list_categories
/// GET /products         -> list_products
/// GET /products/{id}    -> get_product
/// GET /catalog/report   -> catalog_report
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/categories", get(catalog::list_categories))
        .route("/products", get(catalog::list_products))
        .route("/products/{id}", get(catalog::get_product))
        .route("/catalog/report", get(catalog::catalog_report))
}
