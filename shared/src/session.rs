use uuid::Uuid;
use crate::error::{Error, ErrorCode, Result};
use crate::models::Category;

pub const VOTER_ID_KEY: &str = "voter_id";

/// Device-local persistent key-value storage, injected into the session so
/// the controller never touches an ambient browser global.
pub trait DeviceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-memory stand-in for hosts without local storage, and for tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: std::collections::HashMap<String, String>,
}

impl DeviceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Per-device voting state: a persistent voter id plus one rate-limit
/// record per category. The record enforces "already voted" and the
/// category cap; it caps repeat votes from one device, nothing more.
pub struct DeviceSession<S> {
    store: S,
}

impl<S: DeviceStore> DeviceSession<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Random id generated once per device. Weak attribution on ledger
    /// rows, not a credential.
    pub fn voter_id(&mut self) -> Result<String> {
        if let Some(id) = self.store.get(VOTER_ID_KEY) {
            return Ok(id);
        }
        let id = Uuid::new_v4().to_string();
        self.store.set(VOTER_ID_KEY, &id)?;
        Ok(id)
    }

    /// Candidate ids this device already voted for, in vote order.
    pub fn recorded(&self, category: Category) -> Vec<String> {
        self.store
            .get(category.storage_key())
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }

    /// Preconditions for a new vote, checked in order: duplicate first,
    /// then the cap. Never mutates, so a rejection costs nothing.
    pub fn check(&self, category: Category, candidate_id: &str) -> Result<()> {
        let recorded = self.recorded(category);
        if recorded.iter().any(|id| id == candidate_id) {
            return Err(Error::new(
                ErrorCode::DuplicateVote,
                format!("You already voted for this {}.", category),
            ));
        }
        if recorded.len() >= category.vote_cap() {
            return Err(Error::new(
                ErrorCode::CapExceeded,
                format!(
                    "You've already used your {} {} votes.",
                    category.vote_cap(),
                    category
                ),
            ));
        }
        Ok(())
    }

    /// Append to the rate-limit record after a confirmed ledger write.
    /// Re-runs `check`, so the record can never exceed its cap or hold a
    /// duplicate. The ledger write and this commit are not one transaction;
    /// an interrupt between them leaves the local record under-counting.
    pub fn commit(&mut self, category: Category, candidate_id: &str) -> Result<()> {
        self.check(category, candidate_id)?;
        let mut recorded = self.recorded(category);
        recorded.push(candidate_id.to_string());
        let raw = serde_json::to_string(&recorded).map_err(|e| {
            Error::with_details(ErrorCode::SystemError, "Failed to encode vote record", e.to_string())
        })?;
        self.store.set(category.storage_key(), &raw)
    }
}

// Browser-backed store. Lives behind the same trait so the controller works
// identically against `MemoryStore` outside a browser host.
#[cfg(target_arch = "wasm32")]
mod browser {
    use super::{DeviceStore, Error, ErrorCode, Result};

    #[derive(Debug, Default)]
    pub struct LocalStore;

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }

    impl DeviceStore for LocalStore {
        fn get(&self, key: &str) -> Option<String> {
            storage().and_then(|s| s.get_item(key).ok().flatten())
        }

        fn set(&mut self, key: &str, value: &str) -> Result<()> {
            let storage = storage()
                .ok_or_else(|| Error::new(ErrorCode::SystemError, "Local storage unavailable"))?;
            storage
                .set_item(key, value)
                .map_err(|_| Error::new(ErrorCode::SystemError, "Failed to persist vote record"))
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::LocalStore;
