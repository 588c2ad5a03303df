use std::env;

use crate::services::finnhub;

pub const DEFAULT_ORDER_QUANTITY: u32 = 100;

#[derive(Debug, Clone)]
pub struct Settings {
    pub host: String,
    pub port: u16,

    pub finnhub_api_key: String,
    pub finnhub_base_url: String,
    pub finnhub_timeout_secs: u64,
    // live price feed on the trade page
    pub quote_poll_secs: u64,

    // trade page defaults
    pub default_stock_symbol: String,
    pub default_order_quantity: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            finnhub_api_key: String::new(),
            finnhub_base_url: finnhub::DEFAULT_BASE_URL.to_string(),
            finnhub_timeout_secs: 5,
            quote_poll_secs: 5,
            default_stock_symbol: "MSFT".to_string(),
            default_order_quantity: DEFAULT_ORDER_QUANTITY,
        }
    }
}

/// Zero or unparseable quantities fall back to the built-in default.
pub fn parse_order_quantity(raw: Option<&str>) -> u32 {
    raw.and_then(|s| s.trim().parse::<u32>().ok())
        .filter(|q| *q > 0)
        .unwrap_or(DEFAULT_ORDER_QUANTITY)
}

pub fn load() -> Settings {
    // Loads .env if present (no crash if missing)
    dotenvy::dotenv().ok();

    let defaults = Settings::default();

    let host = env::var("HOST").unwrap_or(defaults.host);

    let port = env::var("PORT")
        .ok()
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(defaults.port);

    let finnhub_api_key = env::var("FINNHUB_API_KEY").unwrap_or_default();
    let finnhub_base_url = env::var("FINNHUB_BASE_URL").unwrap_or(defaults.finnhub_base_url);
    let finnhub_timeout_secs = env::var("FINNHUB_TIMEOUT_SECS")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(defaults.finnhub_timeout_secs);

    let quote_poll_secs = env::var("QUOTE_POLL_SECS")
        .ok()
        .and_then(|s| s.trim().parse::<u64>().ok())
        .filter(|s| *s > 0)
        .unwrap_or(defaults.quote_poll_secs);

    let default_stock_symbol = env::var("DEFAULT_STOCK_SYMBOL")
        .ok()
        .map(|s| s.trim().to_uppercase())
        .filter(|s| !s.is_empty())
        .unwrap_or(defaults.default_stock_symbol);

    let default_order_quantity = parse_order_quantity(env::var("DEFAULT_ORDER_QUANTITY").ok().as_deref());

    Settings {
        host,
        port,
        finnhub_api_key,
        finnhub_base_url,
        finnhub_timeout_secs,
        quote_poll_secs,
        default_stock_symbol,
        default_order_quantity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_quantity_falls_back_to_default() {
        assert_eq!(parse_order_quantity(None), 100);
        assert_eq!(parse_order_quantity(Some("0")), 100);
        assert_eq!(parse_order_quantity(Some("-3")), 100);
        assert_eq!(parse_order_quantity(Some("lots")), 100);
        assert_eq!(parse_order_quantity(Some(" 25 ")), 25);
    }

    #[test]
    fn defaults_point_at_finnhub() {
        let s = Settings::default();
        assert_eq!(s.finnhub_base_url, "https://finnhub.io/api/v1");
        assert_eq!(s.default_stock_symbol, "MSFT");
        assert!(s.finnhub_api_key.is_empty());
        assert_eq!(s.quote_poll_secs, 5);
    }
}
