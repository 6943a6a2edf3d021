//! Filesystem-backed storage for desktop and mobile.
//!
//! [`FileStorage`] persists the session keys as a single JSON object in
//! `<base_dir>/session.json`. Pass a platform-appropriate base directory
//! (e.g. `dirs::data_dir()/skillforge`); missing directories are created on
//! first write. Read or write failures degrade to "no data" — a broken disk
//! must never crash the client.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::storage::SessionStorage;

const FILE_NAME: &str = "session.json";

/// SessionStorage persisted as one JSON file under a base directory.
#[derive(Clone, Debug)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(base: PathBuf) -> Self {
        Self {
            path: base.join(FILE_NAME),
        }
    }

    fn read_all(&self) -> HashMap<String, String> {
        let Ok(raw) = std::fs::read_to_string(&self.path) else {
            return HashMap::new();
        };
        serde_json::from_str(&raw).unwrap_or_default()
    }

    fn write_all(&self, entries: &HashMap<String, String>) {
        if let Some(parent) = self.path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        if let Ok(raw) = serde_json::to_string(entries) {
            let _ = std::fs::write(&self.path, raw);
        }
    }
}

impl SessionStorage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.read_all().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        let mut entries = self.read_all();
        entries.insert(key.to_string(), value.to_string());
        self.write_all(&entries);
    }

    fn remove(&self, key: &str) {
        let mut entries = self.read_all();
        if entries.remove(key).is_some() {
            self.write_all(&entries);
        }
    }
}
