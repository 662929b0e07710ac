use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::coin::CoinRecord;

/// Source of market snapshots.
///
/// `CoinGeckoProvider` is the production implementation; tests swap in
/// mocks. A fetch either yields the complete snapshot or an error, never
/// a partial one.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait MarketDataProvider: Send + Sync {
    /// Human-readable name of this provider (for logs/errors).
    fn name(&self) -> &str;

    /// Fetch one page of coin market data.
    async fn fetch_markets(&self) -> Result<Vec<CoinRecord>, CoreError>;
}
