//! Handlers for the `/orders` resource.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use configurator_core::error::CoreError;
use configurator_core::{OrderItem, ValidationResult};
use serde::Deserialize;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// One line of the request body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemRequest {
    pub product_id: String,
    pub quantity: i64,
}

/// Request body for `POST /api/v1/orders/validate`.
#[derive(Debug, Deserialize)]
pub struct ValidateOrderRequest {
    pub items: Vec<OrderItemRequest>,
}

impl ValidateOrderRequest {
    /// Reject request-shape problems before the order reaches the checker.
    pub fn validate(&self) -> Result<(), CoreError> {
        for (index, item) in self.items.iter().enumerate() {
            if item.product_id.trim().is_empty() {
                return Err(CoreError::Validation(format!(
                    "items[{index}].productId must not be empty"
                )));
            }
            if item.quantity <= 0 {
                return Err(CoreError::Validation(format!(
                    "items[{index}].quantity must be a positive integer, got {}",
                    item.quantity
                )));
            }
        }
        Ok(())
    }
}

impl From<OrderItemRequest> for OrderItem {
    fn from(item: OrderItemRequest) -> Self {
        OrderItem::new(item.product_id, item.quantity)
    }
}

/// POST /api/v1/orders/validate
///
/// Check the order against the catalog's dependency rules. An invalid order
/// is still a 200: the body lists every problem found.
pub async fn validate_order(
    State(state): State<AppState>,
    payload: Result<Json<ValidateOrderRequest>, JsonRejection>,
) -> AppResult<Json<DataResponse<ValidationResult>>> {
    let Json(input) = payload?;
    input.validate()?;

    let order: Vec<OrderItem> = input.items.into_iter().map(OrderItem::from).collect();
    let result = state.catalog.check_order(&order);

    tracing::debug!(
        items = order.len(),
        valid = result.valid,
        errors = result.errors.len(),
        "Order validated"
    );

    Ok(Json(DataResponse { data: result }))
}
