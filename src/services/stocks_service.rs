use crate::{
    models::StockTrade,
    services::finnhub::{CompanyProfile, QuoteResponse},
    AppState,
};

pub const PLACEHOLDER_NAME: &str = "N/A";

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Combine a profile and a quote into the trade page model.
///
/// - blank/missing ticker => the symbol that was asked for
/// - blank/missing name => "N/A"
/// - price is the quote's current price
pub fn stock_trade_from(symbol: &str, quantity: u32, profile: CompanyProfile, quote: QuoteResponse) -> StockTrade {
    StockTrade {
        stock_symbol: non_blank(profile.ticker).unwrap_or_else(|| symbol.to_string()),
        stock_name: non_blank(profile.name).unwrap_or_else(|| PLACEHOLDER_NAME.to_string()),
        price: quote.c,
        quantity,
    }
}

/// Model shown when either lookup failed.
pub fn placeholder_trade(symbol: &str, quantity: u32) -> StockTrade {
    StockTrade {
        stock_symbol: symbol.to_string(),
        stock_name: PLACEHOLDER_NAME.to_string(),
        price: 0.0,
        quantity,
    }
}

/// Build the model used by the `pages/trade` template for `symbol`.
///
/// Both Finnhub lookups run at once. If either fails the page still
/// renders, with placeholder values.
pub async fn stock_trade_view(state: &AppState, symbol: &str) -> StockTrade {
    let quantity = state.settings.default_order_quantity;

    let (profile, quote) = tokio::join!(
        state.finnhub.company_profile(symbol),
        state.finnhub.quote(symbol),
    );

    match (profile, quote) {
        (Ok(profile), Ok(quote)) => stock_trade_from(symbol, quantity, profile, quote),
        (profile, quote) => {
            let err = profile.err().or(quote.err()).unwrap_or_default();
            tracing::warn!(%symbol, error = %err, "failed to fetch quote data");
            placeholder_trade(symbol, quantity)
        }
    }
}
