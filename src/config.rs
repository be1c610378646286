//! Where the list is stored

use shopping_list_storage::{AppName, MemoryStorage, SlotStorage};
use std::ffi::OsString;
use std::path::PathBuf;
use tracing::warn;

/// Slot the list is saved under
pub const DEFAULT_SLOT: &str = "shoppingList";

/// Environment variable overriding the storage directory
pub const STORAGE_DIR_VAR: &str = "SHOPPING_LIST_DIR";

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Identifies the platform config directory
    pub app_name: AppName,
    /// Slot holding the persisted list
    pub slot: String,
    /// Directory used instead of the platform one, if set
    pub storage_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: AppName::new("com", "shopping-list", "ShoppingList"),
            slot: DEFAULT_SLOT.to_string(),
            storage_dir: None,
        }
    }
}

impl Config {
    /// Default configuration with overrides from the environment
    pub fn from_env() -> Self {
        Self::default().with_storage_dir_override(std::env::var_os(STORAGE_DIR_VAR))
    }

    /// Apply a storage directory override; empty values are ignored
    pub fn with_storage_dir_override(mut self, dir: Option<OsString>) -> Self {
        if let Some(dir) = dir.filter(|dir| !dir.is_empty()) {
            self.storage_dir = Some(PathBuf::from(dir));
        }
        self
    }

    /// Directory the file backend writes to, if one can be resolved
    pub fn storage_dir(&self) -> Option<PathBuf> {
        self.storage_dir
            .clone()
            .or_else(|| self.app_name.storage_dir())
    }

    /// Open the storage backend for the current platform
    ///
    /// Falls back to memory when there is nowhere to persist to.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn open_storage(&self) -> Box<dyn SlotStorage> {
        storage_in(self.storage_dir())
    }

    /// Open the storage backend for the current platform
    ///
    /// Falls back to memory when the page denies `localStorage`.
    #[cfg(target_arch = "wasm32")]
    pub fn open_storage(&self) -> Box<dyn SlotStorage> {
        use shopping_list_storage::LocalStorage;

        if LocalStorage::is_available() {
            Box::new(LocalStorage::new())
        } else {
            memory_fallback("localStorage is unavailable")
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn storage_in(dir: Option<PathBuf>) -> Box<dyn SlotStorage> {
    match dir {
        Some(dir) => Box::new(shopping_list_storage::FileStorage::new(dir)),
        None => memory_fallback("no storage directory could be resolved"),
    }
}

fn memory_fallback(reason: &str) -> Box<dyn SlotStorage> {
    warn!(reason, "keeping the shopping list in memory only");
    Box::new(MemoryStorage::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_use_the_platform_directory() {
        let config = Config::default();
        assert_eq!(config.slot, "shoppingList");
        assert_eq!(config.storage_dir(), config.app_name.storage_dir());
        assert!(config.open_storage().is_persistent() || config.storage_dir().is_none());
    }

    #[test]
    fn override_replaces_the_directory() {
        let config = Config::default().with_storage_dir_override(Some("/tmp/lists".into()));
        assert_eq!(config.storage_dir(), Some(PathBuf::from("/tmp/lists")));
    }

    #[test]
    fn empty_override_is_ignored() {
        let config = Config::default().with_storage_dir_override(Some(OsString::new()));
        assert_eq!(config.storage_dir, None);
    }

    #[test]
    fn storage_opens_in_the_configured_directory() {
        let dir = tempfile::tempdir().unwrap();
        let config =
            Config::default().with_storage_dir_override(Some(dir.path().as_os_str().to_owned()));

        let mut storage = config.open_storage();
        storage.write(&config.slot, "[]").unwrap();

        assert!(dir.path().join("shoppingList.json").exists());
        assert!(storage.is_persistent());
    }

    #[test]
    fn unresolved_directory_falls_back_to_memory() {
        let mut storage = storage_in(None);
        assert!(!storage.is_persistent());

        storage.write(DEFAULT_SLOT, "[]").unwrap();
        assert_eq!(storage.read(DEFAULT_SLOT).unwrap().as_deref(), Some("[]"));
    }
}
