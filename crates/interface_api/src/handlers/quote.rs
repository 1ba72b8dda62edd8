//! Quote handlers

use axum::{extract::State, Json};
use domain_pricing::{CheckoutSnapshot, QuoteDisplay};
use tracing::info;
use validator::Validate;

use crate::dto::quote::{QuoteRequest, QuoteResponse};
use crate::{error::ApiError, AppState};

/// Prices a quote with its savings and display strings
pub async fn price_quote(
    State(state): State<AppState>,
    Json(request): Json<QuoteRequest>,
) -> Result<Json<QuoteResponse>, ApiError> {
    request.validate()?;
    let (vehicle, option) = request.into_parts()?;

    let breakdown = state.calculator.quote(&vehicle, &option);
    let savings = state.calculator.savings(&vehicle, &option);
    let display = QuoteDisplay::from_breakdown(&breakdown, savings);

    Ok(Json(QuoteResponse {
        breakdown,
        savings,
        display,
    }))
}

/// Freezes a quote for order creation
pub async fn checkout(
    State(state): State<AppState>,
    Json(request): Json<QuoteRequest>,
) -> Result<Json<CheckoutSnapshot>, ApiError> {
    request.validate()?;
    let (vehicle, option) = request.into_parts()?;

    let breakdown = state.calculator.quote(&vehicle, &option);
    let snapshot = CheckoutSnapshot::capture(&vehicle, &option, &breakdown);

    info!(
        quote_id = %snapshot.quote_id,
        vehicle = %vehicle.summary(),
        plan_category = %snapshot.plan_category,
        total = %snapshot.total_price.amount(),
        cover_months = snapshot.cover_months,
        "Quote captured for checkout"
    );

    Ok(Json(snapshot))
}
