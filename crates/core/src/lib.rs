pub mod errors;
pub mod models;
pub mod presentation;
pub mod providers;
pub mod services;
pub mod state;
pub mod storage;

use std::future::Future;
use std::sync::Arc;

use models::{
    coin::CoinRecord,
    derived::DerivedView,
    event::UiEvent,
    favorites::FavoriteSet,
    settings::DashboardSettings,
    view::{SortKey, Theme},
};
use presentation::ThemeSink;
use providers::{coingecko::CoinGeckoProvider, traits::MarketDataProvider};
use state::{favorites::FavoritesStore, snapshot::MarketSnapshotStore, view_state::ViewState};
use storage::gateway::PersistenceGateway;

use errors::CoreError;

/// Main entry point for the crypto dashboard core library.
///
/// Owns every store and funnels all mutation through named operations.
/// Single-threaded: the event loop calls a mutator, then `view()` to get the
/// recomputed projection. Nothing recomputes behind the caller's back.
#[must_use]
pub struct CryptoDashboard {
    snapshot: MarketSnapshotStore,
    favorites: FavoritesStore,
    view: ViewState,
    gateway: PersistenceGateway,
    provider: Arc<dyn MarketDataProvider>,
    theme_sink: Option<Box<dyn ThemeSink>>,
}

impl std::fmt::Debug for CryptoDashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CryptoDashboard")
            .field("coins", &self.snapshot.current().len())
            .field("favorites", &self.favorites.favorites().len())
            .field("view", &self.view)
            .field("gateway", &self.gateway)
            .field("provider", &self.provider.name())
            .finish()
    }
}

impl CryptoDashboard {
    /// Build a dashboard, loading favorites and theme from `gateway`.
    /// The snapshot starts empty; every control is usable before the first fetch.
    pub fn new(gateway: PersistenceGateway, provider: Arc<dyn MarketDataProvider>) -> Self {
        let favorites = FavoritesStore::load(&gateway);
        let view = ViewState::load(&gateway);
        Self {
            snapshot: MarketSnapshotStore::new(),
            favorites,
            view,
            gateway,
            provider,
            theme_sink: None,
        }
    }

    /// Dashboard backed by the CoinGecko provider configured from `settings`.
    pub fn with_settings(settings: &DashboardSettings, gateway: PersistenceGateway) -> Self {
        Self::new(gateway, Arc::new(CoinGeckoProvider::new(settings)))
    }

    /// Dashboard persisting to a JSON file at `path` (native only, not WASM).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn with_file_storage(
        settings: &DashboardSettings,
        path: impl Into<std::path::PathBuf>,
    ) -> Self {
        let backend = storage::backend::FileBackend::new(path);
        Self::with_settings(settings, PersistenceGateway::new(backend))
    }

    /// Dashboard wired to `localStorage` and the document's `dark` class (WASM only).
    #[cfg(target_arch = "wasm32")]
    pub fn in_browser(settings: &DashboardSettings) -> Result<Self, CoreError> {
        let backend = storage::backend::WebStorageBackend::local()?;
        let dashboard = Self::with_settings(settings, PersistenceGateway::new(backend))
            .with_theme_sink(presentation::DocumentThemeSink);
        Ok(dashboard)
    }

    /// Attach the presentation mode indicator. The current theme is applied immediately.
    pub fn with_theme_sink(mut self, sink: impl ThemeSink + 'static) -> Self {
        let mut sink: Box<dyn ThemeSink> = Box::new(sink);
        sink.apply_theme(self.view.theme());
        self.theme_sink = Some(sink);
        self
    }

    // ── Market Data ─────────────────────────────────────────────────

    /// Handle to the provider, for callers that run the fetch themselves
    /// (e.g. spawned) and hand the outcome to `apply_fetch_result`.
    #[must_use]
    pub fn provider(&self) -> Arc<dyn MarketDataProvider> {
        Arc::clone(&self.provider)
    }

    /// Fetch boundary. A successful fetch replaces the snapshot; a failed one
    /// is logged and the prior snapshot (possibly empty) is kept.
    /// With overlapping fetches, whichever result is applied last wins.
    /// Returns `true` if the snapshot was replaced.
    pub fn apply_fetch_result(&mut self, result: Result<Vec<CoinRecord>, CoreError>) -> bool {
        match result {
            Ok(records) => {
                self.snapshot.replace(records);
                true
            }
            Err(e) => {
                log::error!(
                    "Failed to fetch coins from {}: {e}; keeping {} cached",
                    self.provider.name(),
                    self.snapshot.current().len()
                );
                false
            }
        }
    }

    /// Fetch from the configured provider without holding on to the dashboard.
    ///
    /// The returned future owns its provider handle, so every control stays
    /// usable while it is in flight. Hand its output to `apply_fetch_result`.
    pub fn fetch(&self) -> impl Future<Output = Result<Vec<CoinRecord>, CoreError>> + 'static {
        let provider = self.provider();
        async move { provider.fetch_markets().await }
    }

    #[must_use]
    pub fn snapshot(&self) -> &MarketSnapshotStore {
        &self.snapshot
    }

    // ── Favorites ───────────────────────────────────────────────────

    /// Flip `id` in the favorite set and persist it.
    /// Any id is accepted, present in the snapshot or not.
    pub fn toggle_favorite(&mut self, id: &str) -> Result<bool, CoreError> {
        self.favorites.toggle(id, &mut self.gateway)
    }

    #[must_use]
    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.is_favorite(id)
    }

    #[must_use]
    pub fn favorites(&self) -> &FavoriteSet {
        self.favorites.favorites()
    }

    // ── View Controls ───────────────────────────────────────────────

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.view.set_search(text);
    }

    pub fn set_sort_key(&mut self, key: SortKey) {
        self.view.set_sort_key(key);
    }

    /// Set the sort key by wire name (`market_cap`, `price_change_percentage_24h`).
    /// Unknown names leave the current key in place.
    pub fn set_sort_key_named(&mut self, name: &str) -> Result<(), CoreError> {
        self.view.set_sort_key_named(name)
    }

    pub fn set_favorites_only(&mut self, enabled: bool) {
        self.view.set_favorites_only(enabled);
    }

    /// Change the theme, update the presentation surface, then persist.
    /// The surface is updated before this returns, even if the write fails.
    pub fn set_theme(&mut self, theme: Theme) -> Result<(), CoreError> {
        log::debug!("Theme {} -> {theme}", self.view.theme());
        self.view.set_theme(theme);
        if let Some(sink) = self.theme_sink.as_mut() {
            sink.apply_theme(theme);
        }
        self.view.persist_theme(&mut self.gateway)
    }

    /// Flip between light and dark. Returns the new theme.
    pub fn toggle_theme(&mut self) -> Result<Theme, CoreError> {
        let theme = self.view.theme().toggled();
        self.set_theme(theme)?;
        Ok(theme)
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.view.theme()
    }

    #[must_use]
    pub fn view_state(&self) -> &ViewState {
        &self.view
    }

    // ── Events ──────────────────────────────────────────────────────

    /// Route one presentation event to its setter/toggle.
    pub fn handle_event(&mut self, event: UiEvent) -> Result<(), CoreError> {
        match event {
            UiEvent::SearchChanged(text) => self.set_search(text),
            UiEvent::SortKeyChanged(key) => self.set_sort_key(key),
            UiEvent::FavoritesOnlyToggled(enabled) => self.set_favorites_only(enabled),
            UiEvent::ThemeToggled(dark) => self.set_theme(Theme::from_dark_flag(dark))?,
            UiEvent::FavoriteToggled(id) => {
                self.toggle_favorite(&id)?;
            }
        }
        Ok(())
    }

    // ── Derived View ────────────────────────────────────────────────

    /// Recompute what should be displayed from the current state.
    #[must_use]
    pub fn view(&self) -> DerivedView<'_> {
        services::derived_view::derive_view(
            self.snapshot.current(),
            self.favorites.favorites(),
            &self.view,
        )
    }

    // ── Persistence ─────────────────────────────────────────────────

    #[must_use]
    pub fn gateway(&self) -> &PersistenceGateway {
        &self.gateway
    }
}
