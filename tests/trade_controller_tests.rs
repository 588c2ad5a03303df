use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use stocks_app::{config, routes, templates, AppState};
use tower::ServiceExt;

fn test_state() -> AppState {
    // no API key, so quote lookups fail fast and the page shows placeholders
    let settings = config::Settings::default();
    AppState::new(settings, templates::build_handlebars().unwrap())
}

async fn response_body_string(res: axum::response::Response) -> String {
    let bytes = res.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8_lossy(&bytes).to_string()
}

fn post_form(uri: &str, body: &'static str) -> Request<axum::body::Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(axum::body::Body::from(body))
        .unwrap()
}

fn get(uri: &str) -> Request<axum::body::Body> {
    Request::builder()
        .uri(uri)
        .body(axum::body::Body::empty())
        .unwrap()
}

#[tokio::test]
async fn buy_order_redirects_to_orders_and_is_stored() {
    let state = test_state();
    let app = routes::app(state.clone());

    let res = app
        .oneshot(post_form(
            "/Trade/BuyOrder",
            "stockSymbol=MSFT&stockName=Microsoft+Corp&quantity=10&price=100",
        ))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(res.headers()[header::LOCATION], "/Trade/Orders");

    let buys = state.orders.list_buy_orders();
    assert_eq!(buys.len(), 1);
    assert_eq!(buys[0].stock_symbol, "MSFT");
    assert_eq!(buys[0].stock_name, "Microsoft Corp");
    assert_eq!(buys[0].trade_amount, 1000.0);
    assert!(state.orders.list_sell_orders().is_empty());
}

#[tokio::test]
async fn sell_order_goes_to_sell_ledger() {
    let state = test_state();
    let app = routes::app(state.clone());

    let res = app
        .oneshot(post_form(
            "/Trade/SellOrder",
            "stockSymbol=AAPL&stockName=Apple+Inc&quantity=3&price=150.5",
        ))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::SEE_OTHER);

    let sells = state.orders.list_sell_orders();
    assert_eq!(sells.len(), 1);
    assert_eq!(sells[0].trade_amount, 451.5);
    assert!(state.orders.list_buy_orders().is_empty());
}

#[tokio::test]
async fn zero_quantity_renders_error_and_stores_nothing() {
    let state = test_state();
    let app = routes::app(state.clone());

    let res = app
        .oneshot(post_form(
            "/Trade/BuyOrder",
            "stockSymbol=MSFT&stockName=Microsoft+Corp&quantity=0&price=100",
        ))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = response_body_string(res).await;
    assert!(body.contains("Quantity must be between 1 and 100000"));
    // the submitted values are kept on the form
    assert!(body.contains("Microsoft Corp"));
    assert!(state.orders.list_buy_orders().is_empty());
}

#[tokio::test]
async fn non_numeric_quantity_is_a_quantity_error() {
    let state = test_state();
    let app = routes::app(state.clone());

    let res = app
        .oneshot(post_form(
            "/Trade/SellOrder",
            "stockSymbol=MSFT&stockName=Microsoft+Corp&quantity=lots&price=100",
        ))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = response_body_string(res).await;
    assert!(body.contains("Quantity must be between 1 and 100000"));
    assert!(state.orders.list_sell_orders().is_empty());
}

#[tokio::test]
async fn placeholder_price_is_rejected() {
    let state = test_state();
    let app = routes::app(state.clone());

    // what the trade page posts when the quote couldn't be loaded
    let res = app
        .oneshot(post_form(
            "/Trade/BuyOrder",
            "stockSymbol=MSFT&stockName=N%2FA&quantity=100&price=0",
        ))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = response_body_string(res).await;
    assert!(body.contains("Price must be between 1 and 10000"));
}

#[tokio::test]
async fn blank_symbol_is_rejected() {
    let state = test_state();
    let app = routes::app(state.clone());

    let res = app
        .oneshot(post_form(
            "/Trade/BuyOrder",
            "stockSymbol=%20%20&stockName=Nothing&quantity=1&price=1",
        ))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = response_body_string(res).await;
    assert!(body.contains("Stock symbol cannot be null or empty"));
}

#[tokio::test]
async fn unreadable_form_is_a_missing_request() {
    let state = test_state();
    let app = routes::app(state.clone());

    // no form content type, so the body can't be read as a form
    let req = Request::builder()
        .method("POST")
        .uri("/Trade/BuyOrder")
        .body(axum::body::Body::from("quantity=1"))
        .unwrap();

    let res = app.oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = response_body_string(res).await;
    assert!(body.contains("Order request must be supplied"));
    assert!(body.contains("N/A"));
    assert!(state.orders.list_buy_orders().is_empty());
}

#[tokio::test]
async fn index_falls_back_to_placeholders_without_quotes() {
    let app = routes::app(test_state());

    let res = app.oneshot(get("/Trade/Index")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body = response_body_string(res).await;
    assert!(body.contains("<html"));
    assert!(body.contains("MSFT"));
    assert!(body.contains("N/A"));
    assert!(body.contains("0.00"));
    assert!(body.contains(r#"value="100""#));
}

#[tokio::test]
async fn index_uses_configured_defaults() {
    let mut settings = config::Settings::default();
    settings.default_stock_symbol = "TSLA".to_string();
    settings.default_order_quantity = 7;
    let app = routes::app(AppState::new(settings, templates::build_handlebars().unwrap()));

    let res = app.oneshot(get("/")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body = response_body_string(res).await;
    assert!(body.contains("TSLA"));
    assert!(body.contains(r#"value="7""#));
}

#[tokio::test]
async fn htmx_request_gets_page_without_layout() {
    let app = routes::app(test_state());

    let req = Request::builder()
        .uri("/Trade/Index")
        .header("HX-Request", "true")
        .body(axum::body::Body::empty())
        .unwrap();

    let res = app.oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body = response_body_string(res).await;
    assert!(!body.contains("<html"));
    assert!(body.contains("/Trade/BuyOrder"));
}

#[tokio::test]
async fn boosted_navigation_keeps_navbar_and_footer() {
    let app = routes::app(test_state());

    let req = Request::builder()
        .uri("/Trade/Orders")
        .header("HX-Request", "true")
        .header("HX-Boosted", "true")
        .body(axum::body::Body::empty())
        .unwrap();

    let res = app.oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body = response_body_string(res).await;
    assert!(body.contains("navbar"));
    assert!(body.contains("Simulated trading only"));
    assert!(body.contains("Buy Orders"));
}

#[tokio::test]
async fn boosted_rejection_is_a_full_page_htmx_will_swap() {
    let state = test_state();
    let app = routes::app(state.clone());

    let req = Request::builder()
        .method("POST")
        .uri("/Trade/BuyOrder")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .header("HX-Request", "true")
        .header("HX-Boosted", "true")
        .body(axum::body::Body::from("stockSymbol=MSFT&stockName=Microsoft+Corp&quantity=0&price=100"))
        .unwrap();

    let res = app.oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = response_body_string(res).await;
    assert!(body.contains("navbar"));
    assert!(body.contains("Quantity must be between 1 and 100000"));
    // the layout tells htmx to swap 422 responses instead of dropping them
    assert!(body.contains("htmx:beforeSwap"));
    assert!(body.contains("422"));
    assert!(state.orders.list_buy_orders().is_empty());
}

#[tokio::test]
async fn form_symbol_and_name_are_stored_as_submitted() {
    let state = test_state();
    let app = routes::app(state.clone());

    let res = app
        .oneshot(post_form(
            "/Trade/BuyOrder",
            "stockSymbol=%20MSFT%20&stockName=Microsoft+Corp+&quantity=+10+&price=100",
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::SEE_OTHER);

    let buys = state.orders.list_buy_orders();
    assert_eq!(buys[0].stock_symbol, " MSFT ");
    assert_eq!(buys[0].stock_name, "Microsoft Corp ");
    assert_eq!(buys[0].quantity, 10);
}

#[tokio::test]
async fn orders_page_lists_both_sides() {
    let state = test_state();
    state
        .orders
        .place_buy_order(Some(stocks_app::models::OrderRequest {
            stock_symbol: "MSFT".into(),
            stock_name: "Microsoft Corp".into(),
            timestamp: chrono::NaiveDate::from_ymd_opt(2024, 1, 1)
                .unwrap()
                .and_hms_opt(10, 0, 0)
                .unwrap(),
            quantity: 10,
            price: 100.0,
        }))
        .unwrap();

    let app = routes::app(state.clone());
    let res = app.oneshot(get("/Trade/Orders")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body = response_body_string(res).await;
    assert!(body.contains("Buy Orders"));
    assert!(body.contains("Sell Orders"));
    assert!(body.contains("Microsoft Corp"));
    assert!(body.contains("2024-01-01 10:00:00"));
    assert!(body.contains("1000.00"));
    assert!(body.contains("No sell orders yet."));
}

#[tokio::test]
async fn unknown_route_renders_not_found() {
    let app = routes::app(test_state());

    let res = app.oneshot(get("/nope")).await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let body = response_body_string(res).await;
    assert!(body.contains("404"));
}

#[tokio::test]
async fn health_is_ok() {
    let app = routes::app(test_state());

    let res = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(response_body_string(res).await, "ok");
}
