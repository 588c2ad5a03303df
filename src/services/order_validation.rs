//! Business rules an order must satisfy before it reaches the ledger.
//!
//! Rules are checked in a fixed order and the first failure wins, so a
//! request with several problems always reports the same one.

use chrono::{Datelike, NaiveDateTime};
use thiserror::Error;

use crate::models::OrderRequest;

pub const MIN_QUANTITY: u32 = 1;
pub const MAX_QUANTITY: u32 = 100_000;
pub const MIN_PRICE: f64 = 1.0;
pub const MAX_PRICE: f64 = 10_000.0;
/// Orders dated before Jan 01 of this year are rejected.
pub const MIN_ORDER_YEAR: i32 = 2000;

/// Why an order was refused. The messages are shown to users as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OrderError {
    #[error("Order request must be supplied")]
    MissingRequest,

    #[error("Stock symbol cannot be null or empty")]
    InvalidSymbol,

    #[error("Quantity must be between 1 and 100000")]
    InvalidQuantity,

    #[error("Price must be between 1 and 10000")]
    InvalidPrice,

    #[error("Date and time of order must not be older than Jan 01, 2000")]
    InvalidDate,
}

impl OrderError {
    /// Stable machine-readable tag, used by the JSON API.
    pub fn kind(&self) -> &'static str {
        match self {
            OrderError::MissingRequest => "missing_request",
            OrderError::InvalidSymbol => "invalid_symbol",
            OrderError::InvalidQuantity => "invalid_quantity",
            OrderError::InvalidPrice => "invalid_price",
            OrderError::InvalidDate => "invalid_date",
        }
    }
}

pub fn validate_symbol(symbol: &str) -> Result<(), OrderError> {
    if symbol.trim().is_empty() {
        return Err(OrderError::InvalidSymbol);
    }
    Ok(())
}

pub fn validate_quantity(quantity: u32) -> Result<(), OrderError> {
    if !(MIN_QUANTITY..=MAX_QUANTITY).contains(&quantity) {
        return Err(OrderError::InvalidQuantity);
    }
    Ok(())
}

/// NaN never falls inside the range, so it is rejected too.
pub fn validate_price(price: f64) -> Result<(), OrderError> {
    if !(MIN_PRICE..=MAX_PRICE).contains(&price) {
        return Err(OrderError::InvalidPrice);
    }
    Ok(())
}

pub fn validate_timestamp(timestamp: NaiveDateTime) -> Result<(), OrderError> {
    if timestamp.year() < MIN_ORDER_YEAR {
        return Err(OrderError::InvalidDate);
    }
    Ok(())
}

/// Single entry point used by the order service.
pub fn validate_order(request: Option<&OrderRequest>) -> Result<&OrderRequest, OrderError> {
    let request = request.ok_or(OrderError::MissingRequest)?;

    validate_symbol(&request.stock_symbol)?;
    validate_quantity(request.quantity)?;
    validate_price(request.price)?;
    validate_timestamp(request.timestamp)?;

    Ok(request)
}
