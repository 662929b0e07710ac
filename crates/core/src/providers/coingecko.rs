use async_trait::async_trait;
use reqwest::Client;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

use super::traits::MarketDataProvider;
use crate::errors::CoreError;
use crate::models::coin::CoinRecord;
use crate::models::settings::DashboardSettings;

const PROVIDER_NAME: &str = "CoinGecko";

/// CoinGecko `/coins/markets` provider.
///
/// - **Free**: no API key required for the public tier (rate limited).
/// - **Data**: price, market cap, rank, 24h volume and change, 7-day sparkline.
/// - **Endpoint**: `/coins/markets?vs_currency=..&sparkline=true&order=..&per_page=..&page=..`
pub struct CoinGeckoProvider {
    client: Client,
    url: String,
}

impl CoinGeckoProvider {
    pub fn new(settings: &DashboardSettings) -> Self {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(Duration::from_secs(settings.request_timeout_secs));
        Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
            url: Self::markets_url(settings),
        }
    }

    /// Full request URL for the configured page.
    #[must_use]
    pub fn markets_url(settings: &DashboardSettings) -> String {
        format!(
            "{}/coins/markets?vs_currency={}&sparkline=true&order={}&per_page={}&page={}",
            settings.base_url.trim_end_matches('/'),
            settings.vs_currency,
            settings.order,
            settings.per_page,
            settings.page,
        )
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Decode a `/coins/markets` response body.
    pub fn parse_markets(body: &str) -> Result<Vec<CoinRecord>, CoreError> {
        serde_json::from_str(body).map_err(|e| CoreError::Api {
            provider: PROVIDER_NAME.into(),
            message: format!("Failed to parse markets response: {e}"),
        })
    }
}

impl Default for CoinGeckoProvider {
    fn default() -> Self {
        Self::new(&DashboardSettings::default())
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl MarketDataProvider for CoinGeckoProvider {
    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    async fn fetch_markets(&self) -> Result<Vec<CoinRecord>, CoreError> {
        log::debug!("Fetching market snapshot from {PROVIDER_NAME}");
        let resp = self.client.get(&self.url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(CoreError::Api {
                provider: PROVIDER_NAME.into(),
                message: format!("HTTP {status}"),
            });
        }

        let body = resp.text().await?;
        Self::parse_markets(&body)
    }
}
