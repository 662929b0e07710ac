use std::cmp::Ordering;

use crate::models::coin::CoinRecord;
use crate::models::derived::{ChartPoint, CoinCard, DerivedView, MarketTotals, Trend};
use crate::models::favorites::FavoriteSet;
use crate::models::view::SortKey;
use crate::state::view_state::ViewState;

/// Project a snapshot, the favorites and the view controls into what is displayed.
///
/// Pure and linear in the snapshot size (plus the sort). Steps:
/// 1. keep coins whose name contains the search text (case-insensitive)
/// 2. if favorites-only is on, keep only favorited ids
/// 3. stable sort, descending by the active key
/// 4. totals over the *full* snapshot, not the filtered list
/// 5. a sparkline series per visible coin
///
/// Call it again after every mutation; nothing is cached.
#[must_use]
pub fn derive_view<'a>(
    snapshot: &'a [CoinRecord],
    favorites: &FavoriteSet,
    view: &ViewState,
) -> DerivedView<'a> {
    let mut visible = filter_by_search(snapshot, view.search());
    if view.favorites_only() {
        visible = filter_by_favorites(visible, favorites);
    }
    sort_coins(&mut visible, view.sort_key());

    let coins = visible
        .into_iter()
        .map(|coin| CoinCard {
            coin,
            is_favorite: favorites.contains(&coin.id),
            trend: Trend::from_change(coin.price_change_percentage_24h),
            chart: chart_series(coin.price_history()),
        })
        .collect();

    DerivedView {
        coins,
        totals: market_totals(snapshot),
    }
}

/// Coins whose display name contains `search`, ignoring case. Empty search keeps all.
#[must_use]
pub fn filter_by_search<'a>(coins: &'a [CoinRecord], search: &str) -> Vec<&'a CoinRecord> {
    let needle = search.to_lowercase();
    coins
        .iter()
        .filter(|c| c.name.to_lowercase().contains(&needle))
        .collect()
}

#[must_use]
pub fn filter_by_favorites<'a>(
    coins: Vec<&'a CoinRecord>,
    favorites: &FavoriteSet,
) -> Vec<&'a CoinRecord> {
    coins
        .into_iter()
        .filter(|c| favorites.contains(&c.id))
        .collect()
}

/// Descending by `key`. `sort_by` is stable, so ties keep snapshot order.
/// Incomparable values (NaN) compare as equal.
pub fn sort_coins(coins: &mut [&CoinRecord], key: SortKey) {
    let field = |c: &CoinRecord| match key {
        SortKey::MarketCap => c.market_cap,
        SortKey::PriceChange24h => c.price_change_percentage_24h,
    };
    coins.sort_by(|a, b| field(*b).partial_cmp(&field(*a)).unwrap_or(Ordering::Equal));
}

#[must_use]
pub fn market_totals(snapshot: &[CoinRecord]) -> MarketTotals {
    snapshot.iter().fold(
        MarketTotals {
            coin_count: snapshot.len(),
            ..MarketTotals::default()
        },
        |mut totals, coin| {
            totals.total_market_cap += coin.market_cap;
            totals.total_volume += coin.total_volume;
            totals
        },
    )
}

/// Pair each price with its position, preserving chronological order.
#[must_use]
pub fn chart_series(prices: &[f64]) -> Vec<ChartPoint> {
    prices
        .iter()
        .enumerate()
        .map(|(index, &price)| ChartPoint { index, price })
        .collect()
}
