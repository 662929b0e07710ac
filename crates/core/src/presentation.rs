use crate::models::view::Theme;

/// The externally observable presentation mode indicator.
///
/// `CryptoDashboard` calls `apply_theme` synchronously from inside every
/// theme change, before the setter returns, and once at startup with the
/// loaded theme.
pub trait ThemeSink {
    fn apply_theme(&mut self, theme: Theme);
}

#[cfg(target_arch = "wasm32")]
pub use web::DocumentThemeSink;

#[cfg(target_arch = "wasm32")]
mod web {
    use super::ThemeSink;
    use crate::models::view::Theme;

    /// Toggles the `dark` class on `<html>`, which the stylesheet keys off.
    #[derive(Debug, Default)]
    pub struct DocumentThemeSink;

    impl ThemeSink for DocumentThemeSink {
        fn apply_theme(&mut self, theme: Theme) {
            let Some(root) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.document_element())
            else {
                log::warn!("No document element; theme '{theme}' not applied");
                return;
            };
            if let Err(e) = root.class_list().toggle_with_force("dark", theme.is_dark()) {
                log::warn!("Failed to toggle dark class: {e:?}");
            }
        }
    }
}
