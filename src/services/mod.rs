pub mod finnhub;
pub mod stocks_service;

pub mod order_ledger;
pub mod order_service;
pub mod order_validation;
