use std::sync::{PoisonError, RwLock};

use ghostfix_shared::ResyncConfig;

/// Process-wide configuration. Readers take a snapshot at the start of each
/// operation; only an explicit reload replaces the contents.
pub struct LiveConfig {
    inner: RwLock<ResyncConfig>,
}

impl LiveConfig {
    pub fn new(config: ResyncConfig) -> Self {
        Self {
            inner: RwLock::new(config),
        }
    }

    pub fn snapshot(&self) -> ResyncConfig {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn debug_messages(&self) -> bool {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .debug_messages
    }

    pub(crate) fn replace(&self, config: ResyncConfig) {
        *self.inner.write().unwrap_or_else(PoisonError::into_inner) = config;
    }
}
