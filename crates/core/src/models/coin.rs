use serde::{Deserialize, Deserializer, Serialize};

/// Seven-day price history as shipped by the markets endpoint
/// (`"sparkline_in_7d": { "price": [...] }`), oldest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sparkline {
    #[serde(default)]
    pub price: Vec<f64>,
}

/// One coin's market data from a single fetch.
///
/// Field names match the provider's JSON keys so a response array
/// deserializes straight into `Vec<CoinRecord>`. Records are never
/// mutated after a fetch; the whole snapshot is replaced instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinRecord {
    /// Provider identifier, unique within a snapshot (e.g., "bitcoin")
    pub id: String,

    /// Display name (e.g., "Bitcoin")
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,

    /// Ticker symbol as supplied (e.g., "btc")
    #[serde(default, deserialize_with = "null_as_empty")]
    pub symbol: String,

    /// Current price in the quote currency
    #[serde(default, deserialize_with = "null_as_zero")]
    pub current_price: f64,

    #[serde(default, deserialize_with = "null_as_zero")]
    pub market_cap: f64,

    /// `None` for coins the provider has not ranked yet.
    #[serde(default)]
    pub market_cap_rank: Option<u32>,

    /// 24h trading volume
    #[serde(default, deserialize_with = "null_as_zero")]
    pub total_volume: f64,

    /// Signed 24h price change, in percent
    #[serde(default, deserialize_with = "null_as_zero")]
    pub price_change_percentage_24h: f64,

    #[serde(default)]
    pub sparkline_in_7d: Sparkline,

    /// Logo URI
    #[serde(default, deserialize_with = "null_as_empty")]
    pub image: String,
}

impl CoinRecord {
    /// Minimal record with zeroed market figures. Mostly useful for fixtures.
    pub fn new(id: impl Into<String>, name: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            symbol: symbol.into(),
            current_price: 0.0,
            market_cap: 0.0,
            market_cap_rank: None,
            total_volume: 0.0,
            price_change_percentage_24h: 0.0,
            sparkline_in_7d: Sparkline::default(),
            image: String::new(),
        }
    }

    /// The 7-day price history, oldest first.
    #[must_use]
    pub fn price_history(&self) -> &[f64] {
        &self.sparkline_in_7d.price
    }
}

/// The provider sends `null` for figures it does not have (new listings,
/// delisted pairs). Those decode as `0.0`.
fn null_as_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or_default())
}

/// Same for text fields: a `null` name, symbol or logo decodes as `""`.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
