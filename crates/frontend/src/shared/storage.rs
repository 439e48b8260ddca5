//! Per-account free-text notes.
//!
//! The storage medium is injected behind [`NoteStore`] so the dashboard
//! core never assumes a browser environment; the browser implementation
//! sits on `web_sys::Storage`.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

const NOTE_KEY_PREFIX: &str = "territory_dashboard_note_";

/// Keyed free-text notes, one per account identifier.
pub trait NoteStore {
    fn get(&self, account_id: u32) -> Option<String>;
    fn set(&self, account_id: u32, text: &str);
}

/// Cloneable handle provided through the component context.
#[derive(Clone)]
pub struct NoteStoreHandle(Arc<dyn NoteStore + Send + Sync>);

impl NoteStoreHandle {
    pub fn browser() -> Self {
        Self(Arc::new(LocalStorageNotes))
    }

    pub fn new(store: Arc<dyn NoteStore + Send + Sync>) -> Self {
        Self(store)
    }

    pub fn get(&self, account_id: u32) -> Option<String> {
        self.0.get(account_id)
    }

    pub fn set(&self, account_id: u32, text: &str) {
        self.0.set(account_id, text);
    }
}

/// Browser-backed store. Failures are swallowed: losing a note beats
/// breaking the dashboard over a missing or full localStorage.
pub struct LocalStorageNotes;

fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

fn note_key(account_id: u32) -> String {
    format!("{}{}", NOTE_KEY_PREFIX, account_id)
}

impl NoteStore for LocalStorageNotes {
    fn get(&self, account_id: u32) -> Option<String> {
        storage()?
            .get_item(&note_key(account_id))
            .ok()
            .flatten()
            .filter(|text| !text.is_empty())
    }

    fn set(&self, account_id: u32, text: &str) {
        let Some(storage) = storage() else { return };
        let _ = storage.set_item(&note_key(account_id), text);
    }
}

/// In-memory store used by tests (and usable headless).
#[derive(Default)]
pub struct MemoryNotes {
    notes: Mutex<HashMap<u32, String>>,
}

impl NoteStore for MemoryNotes {
    fn get(&self, account_id: u32) -> Option<String> {
        self.notes
            .lock()
            .expect("note store lock poisoned")
            .get(&account_id)
            .filter(|text| !text.is_empty())
            .cloned()
    }

    fn set(&self, account_id: u32, text: &str) {
        self.notes
            .lock()
            .expect("note store lock poisoned")
            .insert(account_id, text.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips_by_account() {
        let store = MemoryNotes::default();
        assert_eq!(store.get(10021), None);

        store.set(10021, "Prefers Crystal line, reorder in Q4");
        store.set(10417, "Asked for rep visit");

        assert_eq!(
            store.get(10021).as_deref(),
            Some("Prefers Crystal line, reorder in Q4")
        );
        assert_eq!(store.get(10417).as_deref(), Some("Asked for rep visit"));
        assert_eq!(store.get(99999), None);
    }

    #[test]
    fn overwriting_replaces_the_note() {
        let store = MemoryNotes::default();
        store.set(10021, "first");
        store.set(10021, "second");
        assert_eq!(store.get(10021).as_deref(), Some("second"));
    }

    #[test]
    fn empty_notes_read_back_as_absent() {
        let store = MemoryNotes::default();
        store.set(10021, "");
        assert_eq!(store.get(10021), None);
    }
}
