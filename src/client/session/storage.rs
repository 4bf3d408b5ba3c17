//! Durable key/value storage backing the session.
//!
//! The browser build keeps the session in `window.localStorage`, the desktop build in a
//! JSON file under the user's config directory. [`MemoryStorage`] is used by tests and by
//! builds with neither platform enabled.

use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::client::error::Error;

pub trait SessionStorage {
    fn get(&self, key: &str) -> Result<Option<String>, Error>;
    fn set(&self, key: &str, value: &str) -> Result<(), Error>;
    fn remove(&self, key: &str) -> Result<(), Error>;
}

/// In-process storage, lost when the process exits
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, Error> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Error> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());

        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), Error> {
        self.items.borrow_mut().remove(key);

        Ok(())
    }
}

/// Browser `localStorage`
#[cfg(feature = "web")]
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

#[cfg(feature = "web")]
impl LocalStorage {
    fn storage() -> Result<web_sys::Storage, Error> {
        let window =
            web_sys::window().ok_or_else(|| Error::Storage("No browser window".to_string()))?;

        window
            .local_storage()
            .map_err(|e| Error::Storage(format!("{:?}", e)))?
            .ok_or_else(|| Error::Storage("localStorage is not available".to_string()))
    }
}

#[cfg(feature = "web")]
impl SessionStorage for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, Error> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| Error::Storage(format!("{:?}", e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Error> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| Error::Storage(format!("{:?}", e)))
    }

    fn remove(&self, key: &str) -> Result<(), Error> {
        Self::storage()?
            .remove_item(key)
            .map_err(|e| Error::Storage(format!("{:?}", e)))
    }
}

/// JSON file holding the session on desktop builds
#[cfg(feature = "desktop")]
#[derive(Clone, Debug)]
pub struct FileStorage {
    path: std::path::PathBuf,
}

#[cfg(feature = "desktop")]
impl FileStorage {
    const DIR: &'static str = "devla";
    const FILE: &'static str = "session.json";

    /// Storage file in the user's config directory, `None` when there is no such directory
    pub fn new() -> Option<Self> {
        let dir = dirs::config_dir()?;
        Some(Self::at(dir.join(Self::DIR).join(Self::FILE)))
    }

    pub fn at(path: std::path::PathBuf) -> Self {
        Self { path }
    }

    /// A missing or unreadable file is an empty session
    fn load(&self) -> HashMap<String, String> {
        std::fs::read_to_string(&self.path)
            .ok()
            .and_then(|contents| serde_json::from_str(&contents).ok())
            .unwrap_or_default()
    }

    fn save(&self, items: &HashMap<String, String>) -> Result<(), Error> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| Error::Storage(e.to_string()))?;
        }

        let contents = serde_json::to_string_pretty(items)?;
        std::fs::write(&self.path, contents).map_err(|e| Error::Storage(e.to_string()))
    }
}

#[cfg(feature = "desktop")]
impl SessionStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, Error> {
        Ok(self.load().remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Error> {
        let mut items = self.load();
        items.insert(key.to_string(), value.to_string());
        self.save(&items)
    }

    fn remove(&self, key: &str) -> Result<(), Error> {
        let mut items = self.load();
        if items.remove(key).is_some() {
            self.save(&items)?;
        }

        Ok(())
    }
}

#[cfg(feature = "web")]
pub type PlatformStorage = LocalStorage;

#[cfg(all(feature = "desktop", not(feature = "web")))]
pub type PlatformStorage = FileStorage;

#[cfg(not(any(feature = "web", feature = "desktop")))]
pub type PlatformStorage = MemoryStorage;

/// Storage used by the running application
pub fn platform_storage() -> PlatformStorage {
    #[cfg(feature = "web")]
    {
        LocalStorage
    }

    #[cfg(all(feature = "desktop", not(feature = "web")))]
    {
        FileStorage::new().unwrap_or_else(|| {
            FileStorage::at(std::env::temp_dir().join(FileStorage::DIR).join(FileStorage::FILE))
        })
    }

    #[cfg(not(any(feature = "web", feature = "desktop")))]
    {
        MemoryStorage::new()
    }
}
