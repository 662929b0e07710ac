use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::CoreError;

/// Field the visible coin list is ordered by. Always descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortKey {
    /// Largest market capitalization first (default)
    #[default]
    #[serde(rename = "market_cap")]
    MarketCap,
    /// Largest 24h percentage gain first
    #[serde(rename = "price_change_percentage_24h")]
    PriceChange24h,
}

impl SortKey {
    /// Name used by the presentation layer's sort selector.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::MarketCap => "market_cap",
            SortKey::PriceChange24h => "price_change_percentage_24h",
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "market_cap" => Ok(SortKey::MarketCap),
            "price_change_percentage_24h" => Ok(SortKey::PriceChange24h),
            other => Err(CoreError::InvalidSortKey(other.to_string())),
        }
    }
}

/// Presentation mode. Persisted across sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    #[must_use]
    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    /// `true` → dark, `false` → light (the shape of a switch widget).
    #[must_use]
    pub fn from_dark_flag(dark: bool) -> Self {
        if dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    #[must_use]
    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(CoreError::InvalidTheme(other.to_string())),
        }
    }
}
