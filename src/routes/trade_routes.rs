use axum::{Router, routing::{get, post}};

use crate::{AppState, controllers::{realtime_controller, trade_controller}};

pub fn add_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/", get(trade_controller::get_index))
        .route("/Trade/Index", get(trade_controller::get_index))
        .route("/Trade/BuyOrder", post(trade_controller::post_buy_order))
        .route("/Trade/SellOrder", post(trade_controller::post_sell_order))
        .route("/Trade/Orders", get(trade_controller::get_orders))
        .route("/Trade/Price/:symbol", get(realtime_controller::sse_price))
}
