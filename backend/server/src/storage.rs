//! # Plan storage
//!
//! Flat-file persistence for the planner state.
//!
//! The frontend owns the plan document entirely. Every save replaces the
//! whole file with whatever collection the caller sent, so the file always
//! equals the last accepted payload. There is no merge, no history and no
//! versioning.
//!
//! ## Concurrent saves
//!
//! Two callers can still race at the HTTP level and the later one wins.
//! What must never happen is a torn file, so a save writes a sibling temp
//! file and renames it over the target, and in-process writers are
//! serialized behind a mutex.
use std::{
    io,
    path::{Path, PathBuf},
};

use serde_json::Value;
use tokio::{fs, sync::Mutex};

pub struct PlanStore {
    path: PathBuf,
    write_guard: Mutex<()>,
}

impl PlanStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            write_guard: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Overwrites the stored document with `plan`, pretty-printed.
    pub async fn save(&self, plan: &Value) -> io::Result<()> {
        let pretty = serde_json::to_vec_pretty(plan)?;

        let _guard = self.write_guard.lock().await;

        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, &pretty).await?;
        fs::rename(&tmp, &self.path).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use tempfile::TempDir;

    use super::PlanStore;

    #[tokio::test]
    async fn save_writes_pretty_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("plan_data.json");
        let store = PlanStore::new(path.clone());

        store.save(&json!([1, 2, 3])).await.unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            contents,
            serde_json::to_string_pretty(&json!([1, 2, 3])).unwrap()
        );
    }

    #[tokio::test]
    async fn save_overwrites_previous_document() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("plan_data.json");
        let store = PlanStore::new(path.clone());

        store.save(&json!({ "week": 1 })).await.unwrap();
        store.save(&json!({ "week": 2 })).await.unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            contents,
            serde_json::to_string_pretty(&json!({ "week": 2 })).unwrap()
        );
    }

    #[tokio::test]
    async fn save_leaves_no_temp_file_behind() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("plan_data.json");
        let store = PlanStore::new(path.clone());

        store.save(&json!([])).await.unwrap();

        assert!(path.exists());
        assert!(!path.with_extension("tmp").exists());
    }

    #[tokio::test]
    async fn save_into_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("plan_data.json");
        let store = PlanStore::new(path);

        assert!(store.save(&json!([1])).await.is_err());
    }
}
