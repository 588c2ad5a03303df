use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize, de::DeserializeOwned};

pub const DEFAULT_BASE_URL: &str = "https://finnhub.io/api/v1";

#[derive(Clone)]
pub struct FinnhubClient {
    http: Client,
    api_key: String,
    base_url: String,
}

impl FinnhubClient {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string(), Duration::from_secs(5))
    }

    pub fn with_base_url(api_key: String, base_url: String, timeout: Duration) -> Self {
        let http = match Client::builder().timeout(timeout).build() {
            Ok(client) => client,
            Err(err) => {
                tracing::warn!(error = %err, ?timeout, "finnhub client build failed, requests will have no timeout");
                Client::new()
            }
        };

        Self {
            http,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn has_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, symbol: &str, what: &str) -> Result<T, String> {
        if !self.has_key() {
            return Err("FINNHUB_API_KEY is missing in .env".to_string());
        }

        let url = format!("{}/{}", self.base_url, path);
        let res = self
            .http
            .get(url)
            .query(&[("symbol", symbol), ("token", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !res.status().is_success() {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            return Err(format!("Finnhub {what} failed: {status} {body}"));
        }

        res.json::<T>().await.map_err(|e| e.to_string())
    }

    pub async fn company_profile(&self, symbol: &str) -> Result<CompanyProfile, String> {
        self.get_json("stock/profile2", symbol, "profile").await
    }

    pub async fn quote(&self, symbol: &str) -> Result<QuoteResponse, String> {
        self.get_json("quote", symbol, "quote").await
    }
}

/// `/stock/profile2`. Finnhub answers `{}` for unknown symbols, so every
/// field may be missing.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct CompanyProfile {
    pub ticker: Option<String>,
    pub name: Option<String>,
    pub exchange: Option<String>,
    pub currency: Option<String>,
    pub country: Option<String>,

    #[serde(rename = "finnhubIndustry")]
    pub industry: Option<String>,

    pub logo: Option<String>,
    pub weburl: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct QuoteResponse {
    // current
    pub c: f64,
    // change
    pub d: Option<f64>,
    // percent change
    pub dp: Option<f64>,
    // high
    pub h: f64,
    // low
    pub l: f64,
    // open
    pub o: f64,
    // previous close
    pub pc: f64,
    // timestamp
    pub t: i64,
}
