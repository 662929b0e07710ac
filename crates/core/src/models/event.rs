use serde::{Deserialize, Serialize};

use super::view::SortKey;

/// Input events emitted by the presentation surface.
///
/// Each variant maps to exactly one setter/toggle on `CryptoDashboard`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum UiEvent {
    /// Search box text changed
    SearchChanged(String),
    /// Sort selector changed
    SortKeyChanged(SortKey),
    /// "Favorites" switch flipped
    FavoritesOnlyToggled(bool),
    /// Theme switch flipped; `true` means dark
    ThemeToggled(bool),
    /// Star clicked on a coin card
    FavoriteToggled(String),
}
