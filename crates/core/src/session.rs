//! Stored session: the token and role marker kept in client storage

use crate::config::StorageKeys;
use crate::error::StorageResult;
use crate::role::Role;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;
use tracing::{debug, warn};

/// String key-value storage the session lives in.
///
/// In the browser this is `localStorage`; the CLI uses a JSON file.
pub trait KeyValueStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
    fn remove(&self, key: &str) -> StorageResult<()>;
}

impl<T: KeyValueStorage + ?Sized> KeyValueStorage for &T {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        (**self).remove(key)
    }
}

impl<T: KeyValueStorage + ?Sized> KeyValueStorage for Rc<T> {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        (**self).remove(key)
    }
}

/// In-memory storage; clones share the same map
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<BTreeMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// A signed-in session as far as the client knows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    /// `None` when the stored marker is missing or not a known role
    pub role: Option<Role>,
}

impl Session {
    pub fn new(token: impl Into<String>, role: Role) -> Self {
        Self {
            token: token.into(),
            role: Some(role),
        }
    }
}

/// Reads and writes the [`Session`] under the configured storage keys
#[derive(Debug, Clone)]
pub struct SessionStore<S> {
    storage: S,
    keys: StorageKeys,
}

impl<S: KeyValueStorage> SessionStore<S> {
    pub fn new(storage: S, keys: StorageKeys) -> Self {
        Self { storage, keys }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn keys(&self) -> &StorageKeys {
        &self.keys
    }

    /// Load the stored session.
    ///
    /// A missing or empty token means no session. Read failures are logged
    /// and treated the same way.
    pub fn load(&self) -> Option<Session> {
        let token = match self.storage.get(&self.keys.token) {
            Ok(Some(token)) if !token.is_empty() => token,
            Ok(_) => return None,
            Err(e) => {
                warn!(error = %e, "Failed to read stored token");
                return None;
            }
        };

        let role = match self.storage.get(&self.keys.role) {
            Ok(Some(marker)) => match marker.parse::<Role>() {
                Ok(role) => Some(role),
                Err(e) => {
                    debug!(error = %e, "Ignoring stored role marker");
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                warn!(error = %e, "Failed to read stored role marker");
                None
            }
        };

        Some(Session { token, role })
    }

    /// Persist the role marker, then the token.
    ///
    /// The token is written last, so a failed role write never leaves a
    /// token behind.
    pub fn save(&self, session: &Session) -> StorageResult<()> {
        match session.role {
            Some(role) => self.storage.set(&self.keys.role, role.as_str())?,
            None => self.storage.remove(&self.keys.role)?,
        }
        self.storage.set(&self.keys.token, &session.token)
    }

    /// Remove both keys.
    ///
    /// Both removals are attempted; the first failure is returned.
    pub fn clear(&self) -> StorageResult<()> {
        let token = self.storage.remove(&self.keys.token);
        let role = self.storage.remove(&self.keys.role);
        token.and(role)
    }
}
