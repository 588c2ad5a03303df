use std::{convert::Infallible, time::Duration as StdDuration};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{
        sse::{Event, KeepAlive, Sse},
        IntoResponse, Response,
    },
};
use tokio::time::{interval, MissedTickBehavior};

use crate::AppState;

// GET /Trade/Price/:symbol  (SSE)
//
// Polls Finnhub on the server and pushes the current price, so the API
// token never reaches the browser.
pub async fn sse_price(State(state): State<AppState>, Path(symbol): Path<String>) -> Response {
    let symbol = symbol.trim().to_uppercase();

    if symbol.is_empty() {
        return (StatusCode::BAD_REQUEST, "missing symbol").into_response();
    }
    if state.settings.finnhub_api_key.trim().is_empty() {
        return (StatusCode::SERVICE_UNAVAILABLE, "missing FINNHUB_API_KEY").into_response();
    }

    tracing::debug!(%symbol, "price stream opened");

    let mut ticker = interval(StdDuration::from_secs(state.settings.quote_poll_secs.max(1)));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let finnhub = state.finnhub.clone();

    // the first tick fires immediately, later ones every poll interval
    let stream = futures_util::stream::unfold((finnhub, symbol, ticker), |(finnhub, symbol, mut ticker)| async move {
        ticker.tick().await;

        let evt = match finnhub.quote(&symbol).await {
            Ok(q) => Event::default().event("price").data(format!("{:.2}", q.c)),
            Err(err) => {
                tracing::warn!(%symbol, error = %err, "price poll failed");
                Event::default().event("ping").data("unavailable")
            }
        };

        Some((Ok::<_, Infallible>(evt), (finnhub, symbol, ticker)))
    });

    Sse::new(stream)
        .keep_alive(
            KeepAlive::new()
                .interval(StdDuration::from_secs(20))
                .text("keep-alive"),
        )
        .into_response()
}
