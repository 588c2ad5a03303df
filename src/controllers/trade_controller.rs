use axum::{
    extract::{Form, State},
    http::{HeaderMap, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
};
use chrono::{Local, NaiveDateTime};
use serde::Deserialize;
use serde_json::json;

use crate::{
    models::{OrderRequest, OrderResponse, OrderSide, Orders, StockTrade},
    render,
    services::{order_validation::OrderError, stocks_service},
    AppState,
};

pub const ORDERS_PATH: &str = "/Trade/Orders";

fn fmt2(v: f64) -> String {
    format!("{:.2}", v)
}

fn page_response(result: Result<String, String>, status: StatusCode) -> Response {
    match result {
        Ok(page) => (status, Html(page)).into_response(),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, Html(e)).into_response(),
    }
}

fn render_trade_page(
    state: &AppState,
    headers: &HeaderMap,
    trade: &StockTrade,
    error: Option<&str>,
    status: StatusCode,
) -> Response {
    let ctx = json!({
        "trade": trade,
        "price": fmt2(trade.price),
        "error": error,
        // the live feed needs a key on the server side
        "live": !state.settings.finnhub_api_key.trim().is_empty(),
    });

    page_response(
        render::render_page(state, headers, "Trade", "pages/trade", &ctx),
        status,
    )
}

// GET / and /Trade/Index
pub async fn get_index(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let symbol = state.settings.default_stock_symbol.clone();
    let trade = stocks_service::stock_trade_view(&state, &symbol).await;

    render_trade_page(&state, &headers, &trade, None, StatusCode::OK)
}

/// Order form as posted by the trade page. Numbers arrive as text so a bad
/// value surfaces as the matching validation message instead of a
/// rejected body. Symbol and name are kept exactly as submitted.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderForm {
    pub stock_symbol: String,
    pub stock_name: String,
    pub quantity: String,
    pub price: String,
}

impl OrderForm {
    pub fn into_request(self, timestamp: NaiveDateTime) -> OrderRequest {
        OrderRequest {
            stock_symbol: self.stock_symbol,
            stock_name: self.stock_name,
            timestamp,
            quantity: self.quantity.trim().parse().unwrap_or(0),
            price: self.price.trim().parse().unwrap_or(f64::NAN),
        }
    }
}

async fn post_order(
    state: AppState,
    headers: HeaderMap,
    side: OrderSide,
    form: Option<Form<OrderForm>>,
) -> Response {
    // the server decides when an order was placed
    let request = form.map(|Form(f)| f.into_request(Local::now().naive_local()));

    match state.orders.place(side, request.as_ref()) {
        Ok(order) => {
            tracing::info!(
                side = side.as_str(),
                id = %order.id,
                symbol = %order.stock_symbol,
                quantity = order.quantity,
                price = order.price,
                "order placed"
            );
            Redirect::to(ORDERS_PATH).into_response()
        }
        Err(err) => {
            tracing::warn!(side = side.as_str(), kind = err.kind(), "order rejected: {err}");
            let trade = match request {
                Some(req) if err != OrderError::MissingRequest => StockTrade {
                    stock_symbol: req.stock_symbol,
                    stock_name: req.stock_name,
                    price: if req.price.is_finite() { req.price } else { 0.0 },
                    quantity: req.quantity,
                },
                _ => {
                    let symbol = state.settings.default_stock_symbol.clone();
                    stocks_service::stock_trade_view(&state, &symbol).await
                }
            };
            let message = err.to_string();
            render_trade_page(&state, &headers, &trade, Some(&message), StatusCode::UNPROCESSABLE_ENTITY)
        }
    }
}

// POST /Trade/BuyOrder
pub async fn post_buy_order(
    State(state): State<AppState>,
    headers: HeaderMap,
    form: Option<Form<OrderForm>>,
) -> Response {
    post_order(state, headers, OrderSide::Buy, form).await
}

// POST /Trade/SellOrder
pub async fn post_sell_order(
    State(state): State<AppState>,
    headers: HeaderMap,
    form: Option<Form<OrderForm>>,
) -> Response {
    post_order(state, headers, OrderSide::Sell, form).await
}

fn order_rows(orders: Vec<OrderResponse>) -> Vec<serde_json::Value> {
    orders
        .into_iter()
        .map(|o| {
            json!({
                "id": o.id.to_string(),
                "stock_symbol": o.stock_symbol,
                "stock_name": o.stock_name,
                "timestamp": o.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
                "quantity": o.quantity,
                "price": fmt2(o.price),
                "trade_amount": fmt2(o.trade_amount),
            })
        })
        .collect()
}

// GET /Trade/Orders
pub async fn get_orders(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let orders = Orders {
        buy_orders: state.orders.list_buy_orders(),
        sell_orders: state.orders.list_sell_orders(),
    };

    let ctx = json!({
        "buy": { "title": "Buy Orders", "side": "buy", "rows": order_rows(orders.buy_orders) },
        "sell": { "title": "Sell Orders", "side": "sell", "rows": order_rows(orders.sell_orders) },
    });

    page_response(
        render::render_page(&state, &headers, "Orders", "pages/orders", &ctx),
        StatusCode::OK,
    )
}
