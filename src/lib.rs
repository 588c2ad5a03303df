//! Library entrypoint for the stocks app.
//!
//! This file exists mainly to make controller tests easy (integration tests
//! under `tests/` can import the app state, routers, controllers, services).

use std::{sync::Arc, time::Duration};

pub mod config;
pub mod models;

pub mod services;

#[path = "views/render.rs"]
pub mod render;
#[path = "views/templates.rs"]
pub mod templates;

pub mod controllers;
pub mod routes;

#[derive(Clone)]
pub struct AppState {
    pub hbs: templates::Hbs,
    pub settings: config::Settings,
    pub finnhub: services::finnhub::FinnhubClient,
    pub orders: Arc<services::order_service::OrderService>,
}

impl AppState {
    /// Wires a fresh, empty order service and a Finnhub client built from
    /// `settings`.
    pub fn new(settings: config::Settings, hbs: templates::Hbs) -> Self {
        let finnhub = services::finnhub::FinnhubClient::with_base_url(
            settings.finnhub_api_key.clone(),
            settings.finnhub_base_url.clone(),
            Duration::from_secs(settings.finnhub_timeout_secs),
        );

        Self {
            hbs,
            settings,
            finnhub,
            orders: Arc::new(services::order_service::OrderService::new()),
        }
    }
}
