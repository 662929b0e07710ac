use crate::errors::CoreError;
use crate::models::favorites::FavoriteSet;
use crate::storage::gateway::{PersistenceGateway, FAVORITES_KEY};

/// Favorited coin ids, loaded once at startup and written back on every toggle.
#[derive(Debug, Clone, Default)]
pub struct FavoritesStore {
    favorites: FavoriteSet,
}

impl FavoritesStore {
    /// Start from whatever a previous session persisted.
    /// Absent or malformed data yields the empty set.
    pub fn load(gateway: &PersistenceGateway) -> Self {
        let favorites: FavoriteSet = gateway.read_json(FAVORITES_KEY).unwrap_or_default();
        log::debug!("Loaded {} favorite(s)", favorites.len());
        Self { favorites }
    }

    /// Flip membership of `id`, then persist the full set.
    ///
    /// The in-memory change stands even if the write fails; the error only
    /// reports that durable storage is now behind. Returns whether `id` is a
    /// favorite afterwards.
    pub fn toggle(&mut self, id: &str, gateway: &mut PersistenceGateway) -> Result<bool, CoreError> {
        let is_favorite = self.favorites.toggle(id);
        gateway.write_json(FAVORITES_KEY, &self.favorites)?;
        Ok(is_favorite)
    }

    #[must_use]
    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.contains(id)
    }

    #[must_use]
    pub fn favorites(&self) -> &FavoriteSet {
        &self.favorites
    }
}
