use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Dashboard configuration: where market data comes from and how much of it.
///
/// Every field has a default, so partial JSON like `{"per_page": 50}` is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardSettings {
    /// Provider API root, without trailing slash
    pub base_url: String,

    /// Quote currency for prices, caps and volumes (e.g., "usd", "eur")
    pub vs_currency: String,

    /// Provider-side ordering of the fetched page
    pub order: String,

    /// Number of coins per fetch (provider maximum is 250)
    pub per_page: u32,

    /// 1-based page number
    pub page: u32,

    /// HTTP timeout. Ignored on wasm32, where the browser owns the transport.
    pub request_timeout_secs: u64,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            base_url: "https://api.coingecko.com/api/v3".to_string(),
            vs_currency: "usd".to_string(),
            order: "market_cap_desc".to_string(),
            per_page: 100,
            page: 1,
            request_timeout_secs: 30,
        }
    }
}

impl DashboardSettings {
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(json)?)
    }
}
