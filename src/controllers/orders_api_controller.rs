use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::{
    models::{OrderPayload, OrderSide, Orders},
    services::order_validation::OrderError,
    AppState,
};

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub kind: &'static str,
}

impl From<OrderError> for ErrorResponse {
    fn from(err: OrderError) -> Self {
        Self {
            error: err.to_string(),
            kind: err.kind(),
        }
    }
}

type OrderBody = Result<Json<Option<OrderPayload>>, JsonRejection>;

fn place(state: &AppState, side: OrderSide, body: OrderBody) -> Response {
    // an absent, `null` or non-object body counts as no request at all
    let request = match body {
        Ok(Json(payload)) => payload.map(OrderPayload::into_request),
        Err(rejection) => {
            tracing::debug!(side = side.as_str(), "unreadable order body: {rejection}");
            None
        }
    };

    match state.orders.place(side, request.as_ref()) {
        Ok(order) => (StatusCode::CREATED, Json(order)).into_response(),
        Err(err) => {
            tracing::warn!(side = side.as_str(), kind = err.kind(), "order rejected: {err}");
            (StatusCode::BAD_REQUEST, Json(ErrorResponse::from(err))).into_response()
        }
    }
}

// POST /api/orders/buy
pub async fn post_buy_order(
    State(state): State<AppState>,
    body: OrderBody,
) -> Response {
    place(&state, OrderSide::Buy, body)
}

// POST /api/orders/sell
pub async fn post_sell_order(
    State(state): State<AppState>,
    body: OrderBody,
) -> Response {
    place(&state, OrderSide::Sell, body)
}

// GET /api/orders/buy
pub async fn get_buy_orders(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.orders.list_buy_orders())
}

// GET /api/orders/sell
pub async fn get_sell_orders(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.orders.list_sell_orders())
}

// GET /api/orders
pub async fn get_orders(State(state): State<AppState>) -> impl IntoResponse {
    Json(Orders {
        buy_orders: state.orders.list_buy_orders(),
        sell_orders: state.orders.list_sell_orders(),
    })
}
