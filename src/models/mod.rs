pub mod order;
pub mod stock_trade;

pub use order::{Order, OrderPayload, OrderRequest, OrderResponse, OrderSide, Orders};
pub use stock_trade::StockTrade;
