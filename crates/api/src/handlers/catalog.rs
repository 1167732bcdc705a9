//! Handlers for the read-only catalog resources.

use axum::extract::{Path, State};
use axum::Json;
use configurator_core::catalog::verify::{verify_catalog, CatalogReport};
use configurator_core::catalog::{CategoryDefinition, Product};
use configurator_core::error::CoreError;
use serde::Serialize;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Product list entry: the detail view minus properties and dependencies.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSummary {
    pub id: String,
    pub name: String,
    pub category_id: String,
}

impl From<&Product> for ProductSummary {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            category_id: product.category_id.clone(),
        }
    }
}

/// GET /api/v1/categories
pub async fn list_categories(
    State(state): State<AppState>,
) -> Json<DataResponse<Vec<CategoryDefinition>>> {
    Json(DataResponse {
        data: state.catalog.categories.clone(),
    })
}

/// GET /api/v1/products
pub async fn list_products(State(state): State<AppState>) -> Json<DataResponse<Vec<ProductSummary>>> {
    let data = state.catalog.products.iter().map(ProductSummary::from).collect();
    Json(DataResponse { data })
}

/// GET /api/v1/products/{id}
///
/// Full product including properties and dependencies. 404 if unknown.
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<DataResponse<Product>>> {
    let product = state
        .catalog
        .product(&id)
        .cloned()
        .ok_or(CoreError::NotFound {
            entity: "Product",
            id,
        })?;
    Ok(Json(DataResponse { data: product }))
}

/// GET /api/v1/catalog/report
pub async fn catalog_report(State(state): State<AppState>) -> Json<DataResponse<CatalogReport>> {
    Json(DataResponse {
        data: verify_catalog(&state.catalog),
    })
}
