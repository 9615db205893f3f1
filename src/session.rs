use gloo_storage::{LocalStorage, Storage};

use crate::error::ClientError;
use crate::models::Session;

pub const TOKEN_KEY: &str = "token";
pub const USER_INFO_KEY: &str = "user-info";

/// Raw string key/value storage. `token` is stored unquoted, so this stays
/// below gloo's JSON layer.
pub trait SessionStore {
    fn get_raw(&self, key: &str) -> Option<String>;
    fn set_raw(&self, key: &str, value: &str) -> Result<(), ClientError>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BrowserStore;

impl SessionStore for BrowserStore {
    fn get_raw(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set_raw(&self, key: &str, value: &str) -> Result<(), ClientError> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|e| ClientError::Storage(format!("{key}: {e:?}")))
    }
}

pub fn token(store: &dyn SessionStore) -> Option<String> {
    store.get_raw(TOKEN_KEY).filter(|t| !t.is_empty())
}

pub fn save_token(store: &dyn SessionStore, token: &str) -> Result<(), ClientError> {
    store.set_raw(TOKEN_KEY, token)
}

pub fn load(store: &dyn SessionStore) -> Option<Session> {
    let raw = store.get_raw(USER_INFO_KEY)?;
    match serde_json::from_str(&raw) {
        Ok(s) => Some(s),
        Err(e) => {
            log::warn!("ignoring unreadable {USER_INFO_KEY}: {e}");
            None
        }
    }
}

/// Writes `user-info` then `token`.
pub fn save(store: &dyn SessionStore, session: &Session) -> Result<(), ClientError> {
    let json = serde_json::to_string(session).map_err(|e| ClientError::Storage(e.to_string()))?;
    store.set_raw(USER_INFO_KEY, &json)?;
    save_token(store, &session.token)
}

#[cfg(test)]
pub mod memory {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use super::SessionStore;
    use crate::error::ClientError;

    #[derive(Default)]
    pub struct MemoryStore {
        pub items: RefCell<HashMap<String, String>>,
    }

    impl SessionStore for MemoryStore {
        fn get_raw(&self, key: &str) -> Option<String> {
            self.items.borrow().get(key).cloned()
        }

        fn set_raw(&self, key: &str, value: &str) -> Result<(), ClientError> {
            self.items.borrow_mut().insert(key.to_string(), value.to_string());
            Ok(())
        }
    }
}
