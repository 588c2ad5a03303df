pub mod home_controller;
pub mod orders_api_controller;
pub mod realtime_controller;
pub mod trade_controller;
