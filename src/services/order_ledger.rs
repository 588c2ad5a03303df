use parking_lot::RwLock;
use uuid::Uuid;

use crate::models::{Order, OrderRequest, OrderSide};

/// In-memory, append-only record of accepted orders, one list per side.
///
/// Identifier assignment and the append happen under the same write lock,
/// so concurrent placements can't collide and readers never see a
/// half-inserted order.
#[derive(Debug, Default)]
pub struct OrderLedger {
    buy_orders: RwLock<Vec<Order>>,
    sell_orders: RwLock<Vec<Order>>,
}

impl OrderLedger {
    pub fn new() -> Self {
        Self::default()
    }

    fn side(&self, side: OrderSide) -> &RwLock<Vec<Order>> {
        match side {
            OrderSide::Buy => &self.buy_orders,
            OrderSide::Sell => &self.sell_orders,
        }
    }

    /// Stores an already-validated request and returns the stored copy.
    pub fn append(&self, side: OrderSide, request: &OrderRequest) -> Order {
        let mut orders = self.side(side).write();

        let order = Order {
            id: Uuid::new_v4(),
            stock_symbol: request.stock_symbol.clone(),
            stock_name: request.stock_name.clone(),
            timestamp: request.timestamp,
            quantity: request.quantity,
            price: request.price,
        };
        orders.push(order.clone());
        order
    }

    /// Copy of one side in insertion order.
    pub fn snapshot(&self, side: OrderSide) -> Vec<Order> {
        self.side(side).read().clone()
    }

    #[cfg(test)]
    fn len(&self, side: OrderSide) -> usize {
        self.side(side).read().len()
    }

    #[cfg(test)]
    fn is_empty(&self, side: OrderSide) -> bool {
        self.len(side) == 0
    }
}
