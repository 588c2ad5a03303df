use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Which ledger an order belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderSide {
    Buy,
    Sell,
}

impl OrderSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderSide::Buy => "buy",
            OrderSide::Sell => "sell",
        }
    }
}

/// An accepted order as held by the ledger. Buy and sell orders share this
/// shape; the ledger side tells them apart.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: Uuid,
    pub stock_symbol: String,
    pub stock_name: String,
    pub timestamp: NaiveDateTime,
    pub quantity: u32,
    pub price: f64,
}

impl Order {
    pub fn trade_amount(&self) -> f64 {
        f64::from(self.quantity) * self.price
    }
}

fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Fields of a proposed order, before validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    #[serde(default)]
    pub stock_symbol: String,
    #[serde(default)]
    pub stock_name: String,
    #[serde(default = "now")]
    pub timestamp: NaiveDateTime,
    pub quantity: u32,
    pub price: f64,
}

/// JSON body of an order placement. Numbers and the timestamp are taken
/// loosely so that out-of-range or malformed values reach the validator
/// instead of failing to decode.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderPayload {
    pub stock_symbol: Option<String>,
    pub stock_name: Option<String>,
    pub timestamp: Option<String>,
    pub quantity: Option<serde_json::Value>,
    pub price: Option<serde_json::Value>,
}

impl OrderPayload {
    pub fn into_request(self) -> OrderRequest {
        let timestamp = match self.timestamp.as_deref() {
            None => now(),
            // unreadable dates become the epoch, which the date rule rejects
            Some(raw) => parse_timestamp(raw).unwrap_or_default(),
        };

        OrderRequest {
            stock_symbol: self.stock_symbol.unwrap_or_default(),
            stock_name: self.stock_name.unwrap_or_default(),
            timestamp,
            quantity: self.quantity.as_ref().map(quantity_from).unwrap_or(0),
            price: self.price.as_ref().map(price_from).unwrap_or(f64::NAN),
        }
    }
}

/// Accepts RFC 3339 (offsets normalized to UTC), `YYYY-MM-DDTHH:MM:SS[.f]`
/// with `T` or a space, and a bare `YYYY-MM-DD` meaning midnight.
fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

fn quantity_from(value: &serde_json::Value) -> u32 {
    let n = match value {
        serde_json::Value::Number(n) => n.as_u64(),
        serde_json::Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    };
    // negative, fractional and oversized quantities all fail the range rule
    n.and_then(|n| u32::try_from(n).ok()).unwrap_or(0)
}

fn price_from(value: &serde_json::Value) -> f64 {
    match value {
        serde_json::Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        serde_json::Value::String(s) => s.trim().parse::<f64>().unwrap_or(f64::NAN),
        _ => f64::NAN,
    }
}

/// What callers get back for an accepted order. `trade_amount` is always
/// derived from quantity and price, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub id: Uuid,
    pub stock_symbol: String,
    pub stock_name: String,
    pub timestamp: NaiveDateTime,
    pub quantity: u32,
    pub price: f64,
    pub trade_amount: f64,
}

impl From<&Order> for OrderResponse {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id,
            stock_symbol: order.stock_symbol.clone(),
            stock_name: order.stock_name.clone(),
            timestamp: order.timestamp,
            quantity: order.quantity,
            price: order.price,
            trade_amount: order.trade_amount(),
        }
    }
}

/// Both ledgers at once.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Orders {
    pub buy_orders: Vec<OrderResponse>,
    pub sell_orders: Vec<OrderResponse>,
}
