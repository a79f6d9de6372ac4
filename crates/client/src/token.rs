//! Bearer-token storage.
//!
//! The token store is the client's single piece of shared mutable state. It
//! is read once per request and written only by login, register, and logout,
//! all idempotent. Stores mirror a browser's scoped key/value surface: the
//! token survives until an explicit clear, and store failures degrade rather
//! than surface (a token that fails to persist only costs a re-login).

use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use secrecy::SecretString;
use tracing::warn;

/// A scoped persistence surface for the bearer credential.
pub trait TokenStore: Send + Sync {
    /// Read the stored token, if any.
    fn load(&self) -> Option<SecretString>;

    /// Replace the stored token.
    fn store(&self, token: &str);

    /// Erase the stored token.
    fn clear(&self);
}

/// In-process token store; the token lives for the process lifetime.
#[derive(Default)]
pub struct MemoryTokenStore {
    slot: Mutex<Option<SecretString>>,
}

impl MemoryTokenStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<SecretString> {
        self.slot.lock().map_or(None, |slot| slot.clone())
    }

    fn store(&self, token: &str) {
        if let Ok(mut slot) = self.slot.lock() {
            *slot = Some(SecretString::from(token.to_string()));
        }
    }

    fn clear(&self) {
        if let Ok(mut slot) = self.slot.lock() {
            *slot = None;
        }
    }
}

impl std::fmt::Debug for MemoryTokenStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryTokenStore")
            .field("token", &"[REDACTED]")
            .finish()
    }
}

/// File-backed token store; the token survives process restarts until an
/// explicit clear, the analogue of browser-local storage.
#[derive(Debug)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Option<SecretString> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => {
                let token = contents.trim();
                if token.is_empty() {
                    None
                } else {
                    Some(SecretString::from(token.to_string()))
                }
            }
            Err(_) => None,
        }
    }

    fn store(&self, token: &str) {
        if let Err(e) = fs::write(&self.path, token) {
            warn!(error = %e, path = %self.path.display(), "failed to persist token");
        }
    }

    fn clear(&self) {
        if let Err(e) = fs::remove_file(&self.path)
            && e.kind() != std::io::ErrorKind::NotFound
        {
            warn!(error = %e, path = %self.path.display(), "failed to clear token");
        }
    }
}
