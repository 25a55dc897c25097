use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::AppState;
use crate::models::country::{self, Country};
use crate::models::quote::{quote, TransferQuote};
use crate::services::availability::registry_with_availability;
use crate::utils::error::ApiError;

/// Raw query values, parsed by hand so bad input gets the JSON error body.
#[derive(Deserialize)]
pub struct QuoteParams {
    pub amount: Option<String>,
    pub rate: Option<String>,
    pub fee: Option<String>,
    /// Target country code; picks the rounding precision.
    pub target: Option<String>,
}

fn number(name: &str, raw: Option<&str>) -> Result<Option<Decimal>, ApiError> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(None),
        Some(s) => Decimal::from_str(s)
            .map(Some)
            .map_err(|_| ApiError::Validation(format!("{name} must be a number"))),
    }
}

fn required(name: &str, raw: Option<&str>) -> Result<Decimal, ApiError> {
    number(name, raw)?.ok_or_else(|| ApiError::Validation(format!("{name} is required")))
}

#[derive(Serialize)]
pub struct QuoteResponse {
    #[serde(flatten)]
    pub quote: TransferQuote,
    pub currency: &'static str,
    pub minor_units: u32,
    pub receive_amount_rounded: Decimal,
}

pub async fn get_quote(Query(p): Query<QuoteParams>) -> Result<impl IntoResponse, ApiError> {
    let currency = match p.target.as_deref() {
        Some(code) => country::lookup(code)
            .map(|c| c.currency.code)
            .ok_or_else(|| ApiError::Validation(format!("unknown target country: {code}")))?,
        None => "USD",
    };
    let minor_units = country::minor_units(currency);
    let amount = required("amount", p.amount.as_deref())?;
    let rate = required("rate", p.rate.as_deref())?;
    let fee = number("fee", p.fee.as_deref())?.unwrap_or(Decimal::ZERO);
    let q = quote(amount, rate, fee)?;

    Ok((
        StatusCode::OK,
        Json(QuoteResponse {
            receive_amount_rounded: q.receive_rounded(minor_units),
            quote: q,
            currency,
            minor_units,
        }),
    ))
}

pub async fn list_countries(State(state): State<AppState>) -> impl IntoResponse {
    let countries: Vec<Country> = registry_with_availability(state.content.as_ref()).await;
    (StatusCode::OK, Json(countries))
}

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(serde_json::json!({ "ok": true })))
}
