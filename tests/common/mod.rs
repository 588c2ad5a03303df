#![allow(dead_code)]

use std::{collections::HashMap, net::SocketAddr};

use axum::{
    extract::Query,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use stocks_app::{config, templates, AppState};

pub const KEY: &str = "test-key";

type Params = Query<HashMap<String, String>>;

fn authorized(params: &HashMap<String, String>) -> bool {
    params.get("token").map(String::as_str) == Some(KEY)
}

async fn profile(Query(params): Params) -> Response {
    if !authorized(&params) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    match params.get("symbol").map(String::as_str) {
        Some("MSFT") => Json(json!({
            "ticker": "MSFT",
            "name": "Microsoft Corp",
            "exchange": "NASDAQ NMS - GLOBAL MARKET",
            "finnhubIndustry": "Technology"
        }))
        .into_response(),
        // Finnhub answers unknown symbols with an empty object
        _ => Json(json!({})).into_response(),
    }
}

async fn quote(Query(params): Params) -> Response {
    if !authorized(&params) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    match params.get("symbol").map(String::as_str) {
        Some("DOWN") => (StatusCode::INTERNAL_SERVER_ERROR, "upstream error").into_response(),
        Some("MSFT") => Json(json!({
            "c": 412.5, "d": 1.25, "dp": 0.3, "h": 415.0, "l": 410.0, "o": 411.0, "pc": 411.25, "t": 1704067200
        }))
        .into_response(),
        _ => Json(json!({ "c": 0, "d": null, "dp": null, "h": 0, "l": 0, "o": 0, "pc": 0, "t": 0 }))
            .into_response(),
    }
}

/// Serves canned Finnhub responses on an ephemeral local port.
pub async fn fake_finnhub() -> SocketAddr {
    let app = Router::new()
        .route("/stock/profile2", get(profile))
        .route("/quote", get(quote));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

pub async fn state_for(addr: SocketAddr, key: &str) -> AppState {
    let settings = config::Settings {
        finnhub_api_key: key.to_string(),
        finnhub_base_url: format!("http://{addr}"),
        default_order_quantity: 25,
        ..config::Settings::default()
    };
    AppState::new(settings, templates::build_handlebars().unwrap())
}
