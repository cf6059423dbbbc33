//! Session persistence.
//!
//! The signed-in user survives a reload only through this contract:
//! an opaque serialized record read and written under a well-known
//! key. Everything else about the session is rebuilt from scratch.

use crate::user::UserRecord;
use std::cell::RefCell;
use std::collections::HashMap;

/// Persistence contract for the signed-in user.
///
/// Implementations serialize the record however the host environment
/// stores key/value data; a load miss is simply "signed out".
pub trait SessionStore {
    /// Load the persisted user record, if any.
    fn load(&self) -> Option<UserRecord>;

    /// Persist the user record.
    fn save(&self, user: &UserRecord);

    /// Remove the persisted record.
    fn clear(&self);
}

/// An in-memory session store.
///
/// Keeps the same opaque-JSON-under-a-key shape as a browser-local
/// store so a persistent backend drops in without contract changes.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    key: String,
    entries: RefCell<HashMap<String, String>>,
}

impl MemorySessionStore {
    /// Create a store writing under the given key.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            entries: RefCell::new(HashMap::new()),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Option<UserRecord> {
        let entries = self.entries.borrow();
        let raw = entries.get(&self.key)?;
        serde_json::from_str(raw).ok()
    }

    fn save(&self, user: &UserRecord) {
        if let Ok(raw) = serde_json::to_string(user) {
            self.entries.borrow_mut().insert(self.key.clone(), raw);
        }
    }

    fn clear(&self) {
        self.entries.borrow_mut().remove(&self.key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_commerce::ids::UserId;

    #[test]
    fn test_round_trip() {
        let store = MemorySessionStore::new("vitrine.user");
        assert!(store.load().is_none());

        let user = UserRecord::email_user(UserId::new("u1"), "Jane", "jane@example.com");
        store.save(&user);

        let loaded = store.load().unwrap();
        assert_eq!(loaded, user);
    }

    #[test]
    fn test_clear() {
        let store = MemorySessionStore::new("vitrine.user");
        let user = UserRecord::email_user(UserId::new("u1"), "Jane", "jane@example.com");
        store.save(&user);
        store.clear();
        assert!(store.load().is_none());
    }

    #[test]
    fn test_corrupt_record_loads_as_signed_out() {
        let store = MemorySessionStore::new("vitrine.user");
        store
            .entries
            .borrow_mut()
            .insert("vitrine.user".to_string(), "not json".to_string());
        assert!(store.load().is_none());
    }
}
