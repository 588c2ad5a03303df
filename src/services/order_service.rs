use crate::models::{OrderRequest, OrderResponse, OrderSide};

use super::{
    order_ledger::OrderLedger,
    order_validation::{self, OrderError},
};

/// Places and lists simulated orders. One instance is shared by every
/// request for the life of the process; it is the only owner of the ledger.
#[derive(Debug, Default)]
pub struct OrderService {
    ledger: OrderLedger,
}

impl OrderService {
    pub fn new() -> Self {
        Self::with_ledger(OrderLedger::new())
    }

    pub fn with_ledger(ledger: OrderLedger) -> Self {
        Self { ledger }
    }

    pub fn place_buy_order(&self, request: Option<OrderRequest>) -> Result<OrderResponse, OrderError> {
        self.place(OrderSide::Buy, request.as_ref())
    }

    pub fn place_sell_order(&self, request: Option<OrderRequest>) -> Result<OrderResponse, OrderError> {
        self.place(OrderSide::Sell, request.as_ref())
    }

    pub fn list_buy_orders(&self) -> Vec<OrderResponse> {
        self.list(OrderSide::Buy)
    }

    pub fn list_sell_orders(&self) -> Vec<OrderResponse> {
        self.list(OrderSide::Sell)
    }

    pub fn place(&self, side: OrderSide, request: Option<&OrderRequest>) -> Result<OrderResponse, OrderError> {
        let request = order_validation::validate_order(request)?;
        let order = self.ledger.append(side, request);
        Ok(OrderResponse::from(&order))
    }

    pub fn list(&self, side: OrderSide) -> Vec<OrderResponse> {
        self.ledger
            .snapshot(side)
            .iter()
            .map(OrderResponse::from)
            .collect()
    }
}
