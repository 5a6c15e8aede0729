use super::DataStore;
use crate::error::{MemoPadError, Result};
use crate::model::NotePad;
use std::path::PathBuf;

const MEMORY_PATH: &str = "memory://memopad.json";

/// In-memory storage for testing.
///
/// Keeps the serialized JSON rather than a `NotePad` so loads go through the
/// same codec as the file store.
#[derive(Default)]
pub struct InMemoryStore {
    data: Option<String>,
    quarantined: Vec<String>,
    save_count: usize,
    simulate_write_error: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with raw stored content, e.g. to simulate a corrupt file.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            data: Some(raw.into()),
            ..Self::default()
        }
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&mut self, simulate: bool) {
        self.simulate_write_error = simulate;
    }

    pub fn raw(&self) -> Option<&str> {
        self.data.as_deref()
    }

    pub fn quarantined(&self) -> &[String] {
        &self.quarantined
    }

    pub fn save_count(&self) -> usize {
        self.save_count
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<Option<NotePad>> {
        match &self.data {
            None => Ok(None),
            Some(raw) => serde_json::from_str(raw)
                .map(Some)
                .map_err(|source| MemoPadError::Corrupt {
                    path: self.path(),
                    source,
                }),
        }
    }

    fn save(&mut self, pad: &NotePad) -> Result<()> {
        if self.simulate_write_error {
            return Err(MemoPadError::Store("Simulated write error".to_string()));
        }
        self.data = Some(serde_json::to_string_pretty(pad)?);
        self.save_count += 1;
        Ok(())
    }

    fn quarantine(&mut self) -> Result<Option<PathBuf>> {
        match self.data.take() {
            None => Ok(None),
            Some(raw) => {
                self.quarantined.push(raw);
                Ok(Some(PathBuf::from(format!(
                    "{}.corrupt-{}",
                    MEMORY_PATH,
                    self.quarantined.len()
                ))))
            }
        }
    }

    fn path(&self) -> PathBuf {
        PathBuf::from(MEMORY_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_store_loads_nothing() {
        let store = InMemoryStore::new();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn save_then_load() {
        let mut store = InMemoryStore::new();
        let mut pad = NotePad::new();
        pad.add_note("hello");
        store.save(&pad).unwrap();
        assert_eq!(store.load().unwrap(), Some(pad));
        assert_eq!(store.save_count(), 1);
    }

    #[test]
    fn simulated_write_error_keeps_previous_data() {
        let mut store = InMemoryStore::new();
        store.save(&NotePad::new()).unwrap();
        let before = store.raw().map(str::to_string);

        store.set_simulate_write_error(true);
        let mut pad = NotePad::new();
        pad.add_note("lost?");
        assert!(store.save(&pad).is_err());
        assert_eq!(store.raw().map(str::to_string), before);
    }

    #[test]
    fn corrupt_raw_data_errors() {
        let store = InMemoryStore::with_raw("{{{");
        assert!(matches!(store.load(), Err(MemoPadError::Corrupt { .. })));
    }
}
