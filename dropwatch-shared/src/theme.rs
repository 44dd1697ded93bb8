//! Dark-mode flag persisted under [`THEME_STORAGE_KEY`] as `"dark"` or `"light"`.

use tracing::warn;

use crate::storage::KeyValueStorage;

/// Storage key holding the theme name.
pub const THEME_STORAGE_KEY: &str = "theme";

const DARK: &str = "dark";
const LIGHT: &str = "light";

/// Process-wide theme flag backed by durable storage.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeStore<S> {
    storage: S,
    dark: bool,
}

impl<S: KeyValueStorage> ThemeStore<S> {
    /// Restore the flag from `storage`, defaulting to dark.
    pub fn rehydrate(storage: S) -> Self {
        let dark = match storage.get(THEME_STORAGE_KEY) {
            Ok(Some(value)) if value == LIGHT => false,
            Ok(_) => true,
            Err(err) => {
                warn!(error = %err, "theme storage unreadable, using dark theme");
                true
            }
        };
        Self { storage, dark }
    }

    /// Whether dark mode is active.
    pub fn is_dark(&self) -> bool {
        self.dark
    }

    /// Value for the document `data-theme` attribute.
    pub fn as_attribute(&self) -> &'static str {
        if self.dark { DARK } else { LIGHT }
    }

    /// Flip the flag and return the new value.
    pub fn toggle(&mut self) -> bool {
        self.set_dark(!self.dark);
        self.dark
    }

    /// Set the flag and persist it.
    pub fn set_dark(&mut self, dark: bool) {
        self.dark = dark;
        if let Err(err) = self.storage.set(THEME_STORAGE_KEY, self.as_attribute()) {
            warn!(error = %err, "failed to persist theme");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn defaults_to_dark() {
        let theme = ThemeStore::rehydrate(MemoryStorage::new());
        assert!(theme.is_dark());
        assert_eq!(theme.as_attribute(), "dark");
    }

    #[test]
    fn unknown_value_defaults_to_dark() {
        let storage = MemoryStorage::with_entries([(THEME_STORAGE_KEY, "sepia")]);
        assert!(ThemeStore::rehydrate(storage).is_dark());
    }

    #[test]
    fn toggle_persists() {
        let storage = MemoryStorage::new();
        let mut theme = ThemeStore::rehydrate(storage.clone());
        assert!(!theme.toggle());
        assert_eq!(storage.get(THEME_STORAGE_KEY).unwrap().as_deref(), Some("light"));

        let restored = ThemeStore::rehydrate(storage.clone());
        assert!(!restored.is_dark());

        assert!(theme.toggle());
        assert_eq!(storage.get(THEME_STORAGE_KEY).unwrap().as_deref(), Some("dark"));
    }
}
