use crate::errors::CoreError;
use crate::models::view::{SortKey, Theme};
use crate::storage::gateway::{PersistenceGateway, THEME_KEY};

/// Ephemeral user controls plus the persisted theme.
///
/// Setters are plain replacements. Persisting the theme and pushing it to
/// the presentation surface is up to the owner (see `CryptoDashboard::set_theme`),
/// so the transitions here stay storage-free.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    search: String,
    sort_key: SortKey,
    favorites_only: bool,
    theme: Theme,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults, except the theme, which comes from storage.
    /// Anything stored other than `"dark"` means light.
    pub fn load(gateway: &PersistenceGateway) -> Self {
        let theme = match gateway.read(THEME_KEY) {
            Some(stored) => stored.parse().unwrap_or_else(|e| {
                log::warn!("Ignoring stored theme, using light: {e}");
                Theme::Light
            }),
            None => Theme::default(),
        };
        Self {
            theme,
            ..Self::default()
        }
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
    }

    pub fn set_sort_key(&mut self, key: SortKey) {
        self.sort_key = key;
    }

    /// Set the sort key from its wire name. Unknown names are rejected and
    /// the current key is kept.
    pub fn set_sort_key_named(&mut self, name: &str) -> Result<(), CoreError> {
        let key = name.parse::<SortKey>().inspect_err(|e| {
            log::warn!("{e}; keeping sort key '{}'", self.sort_key);
        })?;
        self.sort_key = key;
        Ok(())
    }

    pub fn set_favorites_only(&mut self, enabled: bool) {
        self.favorites_only = enabled;
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Write the current theme under the fixed theme key.
    pub fn persist_theme(&self, gateway: &mut PersistenceGateway) -> Result<(), CoreError> {
        gateway.write(THEME_KEY, self.theme.as_str())
    }

    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    #[must_use]
    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    #[must_use]
    pub fn favorites_only(&self) -> bool {
        self.favorites_only
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }
}
