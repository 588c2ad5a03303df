use axum::{Router, routing::get};

use crate::{AppState, controllers::orders_api_controller};

pub fn add_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/api/orders", get(orders_api_controller::get_orders))
        .route(
            "/api/orders/buy",
            get(orders_api_controller::get_buy_orders).post(orders_api_controller::post_buy_order),
        )
        .route(
            "/api/orders/sell",
            get(orders_api_controller::get_sell_orders).post(orders_api_controller::post_sell_order),
        )
}
