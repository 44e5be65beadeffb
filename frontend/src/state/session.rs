use std::sync::{Arc, Mutex, MutexGuard};

#[cfg(target_arch = "wasm32")]
use crate::utils::storage;

pub const TOKEN_KEY: &str = "access_token";

/// Process-wide session credential, passed explicitly to the request layer
/// and the form controllers instead of living in a global. The in-memory
/// value is the source of truth; localStorage persistence is best-effort
/// and only exists on the wasm target.
#[derive(Clone, Default)]
pub struct Session {
    token: Arc<Mutex<Option<String>>>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the persisted token once at startup.
    pub fn load() -> Self {
        let session = Self::default();
        if let Some(token) = persisted_token() {
            *session.lock() = Some(token);
        }
        session
    }

    pub fn token(&self) -> Option<String> {
        self.lock().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.lock().is_some()
    }

    pub fn set_token(&self, token: impl Into<String>) {
        let token = token.into();
        persist_token(&token);
        *self.lock() = Some(token);
    }

    /// Logout teardown: forgets the in-memory token and the persisted copy.
    pub fn clear(&self) {
        forget_persisted_token();
        *self.lock() = None;
    }

    fn lock(&self) -> MutexGuard<'_, Option<String>> {
        // Poisoning can only come from a panicked writer; the value is
        // still a plain Option either way.
        self.token.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(target_arch = "wasm32")]
fn persisted_token() -> Option<String> {
    storage::read_item(TOKEN_KEY).filter(|token| !token.is_empty())
}

#[cfg(target_arch = "wasm32")]
fn persist_token(token: &str) {
    storage::write_item(TOKEN_KEY, token);
}

#[cfg(target_arch = "wasm32")]
fn forget_persisted_token() {
    storage::remove_item(TOKEN_KEY);
}

#[cfg(not(target_arch = "wasm32"))]
fn persisted_token() -> Option<String> {
    None
}

#[cfg(not(target_arch = "wasm32"))]
fn persist_token(_token: &str) {}

#[cfg(not(target_arch = "wasm32"))]
fn forget_persisted_token() {}
