use axum::http::HeaderMap;
use serde::Serialize;
use serde_json::json;

use crate::AppState;

fn header_is_true(headers: &HeaderMap, name: &str) -> bool {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

pub fn is_htmx(headers: &HeaderMap) -> bool {
    header_is_true(headers, "HX-Request")
}

/// `hx-boost` navigation: htmx swaps the whole `<body>`, so it needs the
/// layout even though `HX-Request` is set.
pub fn is_boosted(headers: &HeaderMap) -> bool {
    header_is_true(headers, "HX-Boosted")
}

pub fn render_body<T: Serialize>(state: &AppState, template: &str, ctx: &T) -> Result<String, String> {
    state
        .hbs
        .render(template, ctx)
        .map_err(|e| format!("template error: {e}"))
}

pub fn render_full(state: &AppState, title: &str, body_html: String) -> Result<String, String> {
    let ctx = json!({
        "title": title,
        "body": body_html,
        "default_symbol": state.settings.default_stock_symbol,
    });

    render_body(state, "layouts/base", &ctx)
}

/// Render `template` and, unless this is a non-boosted HTMX request, wrap
/// it in the base layout.
pub fn render_page<T: Serialize>(
    state: &AppState,
    headers: &HeaderMap,
    title: &str,
    template: &str,
    ctx: &T,
) -> Result<String, String> {
    let body = render_body(state, template, ctx)?;

    if is_htmx(headers) && !is_boosted(headers) {
        return Ok(body);
    }

    render_full(state, title, body)
}
