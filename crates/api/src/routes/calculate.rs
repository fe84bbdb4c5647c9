//! Denomination calculation routes.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info, warn};

use crate::{AppState, error::ApiError};

/// Creates the calculation routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/calculate", post(calculate))
}

/// Request body for a calculation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationRequest {
    /// Amount to break down.
    pub amount: Decimal,
    /// Amount to compare against, if any.
    #[serde(default)]
    pub previous_amount: Option<Decimal>,
}

/// POST `/calculate` - Break an amount down and optionally diff it.
async fn calculate(
    State(state): State<AppState>,
    Json(request): Json<CalculationRequest>,
) -> Response {
    info!(
        amount = %request.amount,
        previous_amount = ?request.previous_amount,
        "Received calculation request"
    );

    if request.amount <= Decimal::ZERO {
        warn!(amount = %request.amount, "Invalid amount provided");
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": "invalid_amount",
                "message": "Amount must be positive"
            })),
        )
            .into_response();
    }

    match state
        .service
        .calculate(request.amount, request.previous_amount)
    {
        Ok(result) => {
            info!(
                amount = %result.amount,
                units = result.breakdown.unit_count(),
                "Calculated denominations"
            );
            (StatusCode::OK, Json(result)).into_response()
        }
        Err(e) => {
            let err = ApiError::from(e);
            if err.0.is_client_error() {
                warn!(error = %err.0, "Rejected calculation request");
            } else {
                error!(error = %err.0, amount = %request.amount, "Failed to calculate denominations");
            }
            err.into_response()
        }
    }
}
