use std::str::FromStr;

use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap},
    response::{Html, IntoResponse, Redirect},
};
use chrono::Utc;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::config::AppState;
use crate::models::country;
use crate::services::pages::{self, HomeOutcome, SendMoneyOutcome};
use crate::utils::error::ApiError;
use crate::views;

#[derive(Deserialize)]
pub struct PageParams {
    pub amount: Option<String>,
}

/// Blank means "use the page default"; anything else must be a non-negative number.
fn parse_amount(p: &PageParams) -> Result<Option<Decimal>, ApiError> {
    let Some(raw) = p.amount.as_deref().map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };
    let amount = Decimal::from_str(raw)
        .map_err(|_| ApiError::Validation("amount must be a number".into()))?;
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(ApiError::Validation("amount must not be negative".into()));
    }
    Ok(Some(amount))
}

pub async fn root(headers: HeaderMap) -> impl IntoResponse {
    let lang = headers.get(header::ACCEPT_LANGUAGE).and_then(|v| v.to_str().ok());
    Redirect::temporary(&country::from_accept_language(lang).path())
}

pub async fn home(
    State(state): State<AppState>,
    Path(code): Path<String>,
    Query(p): Query<PageParams>,
) -> Result<impl IntoResponse, ApiError> {
    let amount = parse_amount(&p)?;
    match pages::home_page(state.content.as_ref(), &code, amount, Utc::now()).await {
        HomeOutcome::NotFound => Err(ApiError::NotFound(format!("country {code}"))),
        HomeOutcome::Rendered(view) => Ok(Html(views::home::render(&view))),
    }
}

pub async fn send_money(
    State(state): State<AppState>,
    Path((source, target)): Path<(String, String)>,
    Query(p): Query<PageParams>,
) -> Result<impl IntoResponse, ApiError> {
    let amount = parse_amount(&p)?;
    let html = match pages::send_money_page(state.content.as_ref(), &source, &target, amount, Utc::now()).await {
        SendMoneyOutcome::NotFound => {
            return Err(ApiError::NotFound(format!("pair {source}/{target}")));
        }
        SendMoneyOutcome::Unavailable(u) => views::unavailable::render(&u),
        SendMoneyOutcome::Rendered(view) => views::send_money::render(&view),
    };
    Ok(Html(html))
}

pub async fn not_found() -> ApiError {
    ApiError::NotFound("route".into())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(v: Option<&str>) -> PageParams {
        PageParams { amount: v.map(String::from) }
    }

    #[test]
    fn amount_parsing() {
        assert_eq!(parse_amount(&params(None)).unwrap(), None);
        assert_eq!(parse_amount(&params(Some(" "))).unwrap(), None);
        assert_eq!(parse_amount(&params(Some("250.5"))).unwrap(), Some(Decimal::new(2505, 1)));
        assert!(matches!(parse_amount(&params(Some("abc"))), Err(ApiError::Validation(_))));
        assert!(matches!(parse_amount(&params(Some("-3"))), Err(ApiError::Validation(_))));
    }
}
