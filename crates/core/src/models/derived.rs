use serde::Serialize;

use super::coin::CoinRecord;

/// A single sparkline point: position in the 7-day series and the price there.
///
/// The core generates these; the renderer just draws them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartPoint {
    /// Zero-based position in the price history
    pub index: usize,

    pub price: f64,
}

/// Direction of the 24h move, for arrow icons and colouring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Trend {
    /// 24h change is zero or positive
    Up,
    Down,
}

impl Trend {
    #[must_use]
    pub fn from_change(pct: f64) -> Self {
        if pct >= 0.0 {
            Trend::Up
        } else {
            Trend::Down
        }
    }
}

/// Everything needed to render one coin card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoinCard<'a> {
    pub coin: &'a CoinRecord,
    pub is_favorite: bool,
    pub trend: Trend,
    pub chart: Vec<ChartPoint>,
}

/// Aggregates over the full snapshot. Independent of search, sort and
/// the favorites-only filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct MarketTotals {
    pub total_market_cap: f64,
    pub total_volume: f64,
    pub coin_count: usize,
}

/// The recomputed projection of stores and view state into what is displayed.
/// Borrows the snapshot it was derived from; never persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DerivedView<'a> {
    /// Coins passing the active filters, in sort order
    pub coins: Vec<CoinCard<'a>>,

    pub totals: MarketTotals,
}

impl DerivedView<'_> {
    /// Ids of the visible coins, in display order.
    #[must_use]
    pub fn visible_ids(&self) -> Vec<&str> {
        self.coins.iter().map(|c| c.coin.id.as_str()).collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coins.is_empty()
    }
}
