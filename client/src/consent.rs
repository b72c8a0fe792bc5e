//! Cookie notice and consent persistence.
//!
//! The consent flag lives in whatever key-value storage the embedding shell
//! provides (the browser original used local storage). Once set it is never
//! cleared by the application.

use std::{
    collections::HashMap,
    fs, io,
    path::{Path, PathBuf},
};

use tracing::warn;

pub const CONSENT_KEY: &str = "cookiesAccepted";
pub const CONSENT_VALUE: &str = "true";

/// Local-storage shaped persistence for the consent flag.
pub trait ConsentStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory storage, forgets everything on drop. The test double, and the
/// right choice for embedders with their own persistence.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ConsentStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

/// JSON-file-backed storage. Loads the whole map up front; a missing file
/// just means nothing has been stored yet.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    values: HashMap<String, String>,
}

impl FileStorage {
    pub fn load(path: impl Into<PathBuf>) -> io::Result<Self> {
        let path = path.into();

        let values = match fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => return Err(e),
        };

        Ok(Self { path, values })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> io::Result<()> {
        let contents = serde_json::to_string_pretty(&self.values)?;

        fs::write(&self.path, contents)
    }
}

impl ConsentStorage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());

        // A failed write only costs showing the notice again next visit.
        if let Err(e) = self.persist() {
            warn!("Failed to persist consent storage: {e}");
        }
    }
}

/// The cookie banner itself.
#[derive(Debug)]
pub struct CookieNotice {
    visible: bool,
}

impl CookieNotice {
    /// Shown once per storage lifetime: hidden from the start when the
    /// consent flag is already present.
    pub fn new(storage: &dyn ConsentStorage) -> Self {
        Self {
            visible: storage.get(CONSENT_KEY).is_none(),
        }
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Accepting hides the notice and sets the flag permanently.
    pub fn accept(&mut self, storage: &mut dyn ConsentStorage) {
        self.visible = false;
        storage.set(CONSENT_KEY, CONSENT_VALUE);
    }
}
