//! Thread-safe handle to a mock

use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};
use sheets_mock_core::Result;

use crate::config::MockConfig;
use crate::service::SheetsMock;

/// A cloneable, thread-safe handle to one [`SheetsMock`]
///
/// Clones share the same spreadsheet. Each call holds the lock for its whole
/// duration, so requests from different threads never interleave.
#[derive(Debug, Clone, Default)]
pub struct SharedSheetsMock {
    inner: Arc<Mutex<SheetsMock>>,
}

impl SharedSheetsMock {
    /// Wrap a mock
    pub fn new(mock: SheetsMock) -> Self {
        Self {
            inner: Arc::new(Mutex::new(mock)),
        }
    }

    /// Create a shared mock from a configuration
    pub fn with_config(config: MockConfig) -> Result<Self> {
        SheetsMock::with_config(config).map(Self::new)
    }

    /// Run a closure with exclusive access to the mock
    pub fn with<R>(&self, f: impl FnOnce(&mut SheetsMock) -> R) -> R {
        let mut guard = self.inner.lock();
        f(&mut guard)
    }

    /// Lock the mock for several calls in a row
    pub fn lock(&self) -> MutexGuard<'_, SheetsMock> {
        self.inner.lock()
    }
}

impl From<SheetsMock> for SharedSheetsMock {
    fn from(mock: SheetsMock) -> Self {
        Self::new(mock)
    }
}
