use log::debug;
use thiserror::Error;
use web_sys::window;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StorageError {
    #[error("local storage is unavailable")]
    Unavailable,

    #[error("storage access failed: {0}")]
    Access(String),
}

/// String key → string value store. The browser implementation is
/// `LocalStore`; tests use `MemoryStore`.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// `window.localStorage`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LocalStore;

impl LocalStore {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or(StorageError::Unavailable)
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| StorageError::Access(format!("{:?}", e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Access(format!("{:?}", e)))
    }
}

#[cfg(test)]
#[derive(Default)]
pub struct MemoryStore {
    pub(crate) entries: std::cell::RefCell<std::collections::HashMap<String, String>>,
    pub(crate) writes: std::cell::Cell<usize>,
    pub unavailable: bool,
}

#[cfg(test)]
impl MemoryStore {
    /// Successful `set` calls so far.
    pub fn writes(&self) -> usize {
        self.writes.get()
    }
}

#[cfg(test)]
impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.unavailable {
            return Err(StorageError::Unavailable);
        }
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.unavailable {
            return Err(StorageError::Unavailable);
        }
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

pub const SECTION_INDEX_KEY: &str = "sectionScroller.activeIndex";

/// Parses a persisted section index. Leading/trailing whitespace is
/// ignored; negative values clamp to 0 later, anything else non-numeric is
/// `None`.
pub fn parse_index(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok()
}

/// Clamps a parsed index into `[0, total - 1]`.
pub fn clamp_index(value: i64, total: usize) -> usize {
    if total == 0 || value <= 0 {
        return 0;
    }
    let last = (total - 1) as i64;
    value.min(last) as usize
}

/// Reads and writes the last settled section index.
pub struct SectionIndexStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> SectionIndexStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Restored index for `total` sections. Missing, unreadable, or corrupt
    /// entries all give 0.
    pub fn load(&self, total: usize) -> usize {
        match self.store.get(SECTION_INDEX_KEY) {
            Ok(Some(raw)) => match parse_index(&raw) {
                Some(value) => clamp_index(value, total),
                None => {
                    debug!("Ignoring corrupt section index {:?}", raw);
                    0
                }
            },
            Ok(None) => 0,
            Err(e) => {
                debug!("Section index not restored: {}", e);
                0
            }
        }
    }

    pub fn save(&self, index: usize) {
        if let Err(e) = self.store.set(SECTION_INDEX_KEY, &index.to_string()) {
            debug!("Section index not persisted: {}", e);
        }
    }

    #[cfg(test)]
    pub fn inner(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_out_of_range_values() {
        assert_eq!(clamp_index(7, 3), 2);
        assert_eq!(clamp_index(-4, 3), 0);
        assert_eq!(clamp_index(1, 3), 1);
        assert_eq!(clamp_index(5, 0), 0);
    }

    #[test]
    fn stored_seven_with_three_sections_restores_last() {
        let store = MemoryStore::default();
        store.set(SECTION_INDEX_KEY, "7").unwrap();
        let sections = SectionIndexStore::new(store);
        assert_eq!(sections.load(3), 2);
    }

    #[test]
    fn corrupt_or_missing_entries_default_to_zero() {
        let sections = SectionIndexStore::new(MemoryStore::default());
        assert_eq!(sections.load(4), 0);

        sections.inner().set(SECTION_INDEX_KEY, "two").unwrap();
        assert_eq!(sections.load(4), 0);

        sections.inner().set(SECTION_INDEX_KEY, " 3 ").unwrap();
        assert_eq!(sections.load(4), 3);
    }

    #[test]
    fn unavailable_storage_is_silent() {
        let sections = SectionIndexStore::new(MemoryStore {
            unavailable: true,
            ..Default::default()
        });
        sections.save(2);
        assert_eq!(sections.load(5), 0);
    }

    #[test]
    fn save_writes_decimal_text() {
        let sections = SectionIndexStore::new(MemoryStore::default());
        sections.save(4);
        assert_eq!(
            sections.inner().get(SECTION_INDEX_KEY).unwrap().as_deref(),
            Some("4")
        );
    }
}
