//! Key-value storage backends.
//!
//! `Storage` is the seam to whatever session/local storage the host offers.
//! `MemoryStorage` is an in-process implementation whose clones share one
//! backing map, so a caller can keep a handle while an interceptor owns
//! another.

use std::cell::RefCell;
use std::rc::Rc;

use rustc_hash::FxHashMap;

/// Storage failures.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("Storage quota exceeded writing {key}: {needed} bytes needed, {available} available")]
    QuotaExceeded {
        key: String,
        needed: usize,
        available: usize,
    },

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Key-value storage.
pub trait Storage {
    fn get_item(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;

    fn set_item(&mut self, key: &str, value: Vec<u8>) -> Result<(), StorageError>;

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError>;
}

#[derive(Debug, Default)]
struct MemoryInner {
    items: FxHashMap<String, Vec<u8>>,
    quota: Option<usize>,
}

impl MemoryInner {
    fn used_without(&self, key: &str) -> usize {
        self.items
            .iter()
            .filter(|(k, _)| k.as_str() != key)
            .map(|(k, v)| k.len() + v.len())
            .sum()
    }
}

/// In-memory storage with an optional byte quota.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    inner: Rc<RefCell<MemoryInner>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage that rejects writes once keys plus values exceed `bytes`.
    #[must_use]
    pub fn with_quota(bytes: usize) -> Self {
        let storage = Self::default();
        storage.inner.borrow_mut().quota = Some(bytes);
        storage
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.inner.borrow().items.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.borrow().items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Bytes used by keys and values.
    #[must_use]
    pub fn used_bytes(&self) -> usize {
        self.inner.borrow().used_without("")
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        Ok(self.inner.borrow().items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: Vec<u8>) -> Result<(), StorageError> {
        let mut inner = self.inner.borrow_mut();
        if let Some(quota) = inner.quota {
            let available = quota.saturating_sub(inner.used_without(key));
            let needed = key.len() + value.len();
            if needed > available {
                return Err(StorageError::QuotaExceeded {
                    key: key.to_string(),
                    needed,
                    available,
                });
            }
        }
        inner.items.insert(key.to_string(), value);
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        self.inner.borrow_mut().items.remove(key);
        Ok(())
    }
}
