use serde::Serialize;

/// What the trade page shows for one symbol: the latest price plus the
/// quantity the order form starts with.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockTrade {
    pub stock_symbol: String,
    pub stock_name: String,
    pub price: f64,
    pub quantity: u32,
}
