// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 FracAssets

//! JSON document storage over a plain filesystem.
//!
//! Each collection is a directory under the data root, each record a
//! single pretty-printed JSON file. Writes go through a temp file and
//! rename so a crash never leaves a half-written document behind.

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use super::StoragePaths;

/// Error type for document storage operations.
#[derive(Debug)]
pub enum StorageError {
    /// I/O error during file operations
    Io(io::Error),
    /// JSON serialization/deserialization error
    Json(serde_json::Error),
    /// Entity not found
    NotFound(String),
    /// Entity already exists
    AlreadyExists(String),
    /// Storage not initialized
    NotInitialized,
    /// Generic serialization error
    SerializationError(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Io(e) => write!(f, "I/O error: {e}"),
            StorageError::Json(e) => write!(f, "JSON error: {e}"),
            StorageError::NotFound(entity) => write!(f, "Not found: {entity}"),
            StorageError::AlreadyExists(entity) => write!(f, "Already exists: {entity}"),
            StorageError::NotInitialized => write!(f, "Storage not initialized"),
            StorageError::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StorageError::Io(e) => Some(e),
            StorageError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for StorageError {
    fn from(e: io::Error) -> Self {
        if e.kind() == io::ErrorKind::NotFound {
            StorageError::NotFound(e.to_string())
        } else {
            StorageError::Io(e)
        }
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(e: serde_json::Error) -> Self {
        StorageError::Json(e)
    }
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Document storage manager backed by the local filesystem.
#[derive(Debug, Clone)]
pub struct DocumentStorage {
    paths: StoragePaths,
    initialized: bool,
}

impl DocumentStorage {
    /// Create a new DocumentStorage instance.
    ///
    /// Does NOT initialize the directory structure. Call `initialize()` first.
    pub fn new(paths: StoragePaths) -> Self {
        Self {
            paths,
            initialized: false,
        }
    }

    /// Get the storage paths.
    pub fn paths(&self) -> &StoragePaths {
        &self.paths
    }

    /// Initialize the document storage directory structure.
    ///
    /// Creates all collection directories under the data root.
    /// Safe to call multiple times (idempotent).
    pub fn initialize(&mut self) -> StorageResult<()> {
        let dirs = [
            self.paths.users_dir(),
            self.paths.listings_dir(),
            self.paths.portfolio_dir(),
            self.paths.sync_dir(),
        ];

        for dir in dirs {
            fs::create_dir_all(&dir)?;
        }

        self.initialized = true;
        Ok(())
    }

    /// Check if the data directory is available and writable.
    ///
    /// Performs a write-read-delete round trip under the data root.
    pub fn health_check(&self) -> StorageResult<()> {
        if !self.initialized {
            return Err(StorageError::NotInitialized);
        }

        let test_file = self.paths.root().join(".health_check");
        let test_data = b"health_check_data";

        fs::write(&test_file, test_data)?;
        let read_data = fs::read(&test_file)?;
        fs::remove_file(&test_file)?;

        if read_data != test_data {
            return Err(StorageError::SerializationError(
                "Health check data mismatch".to_string(),
            ));
        }

        Ok(())
    }

    // ========== Generic JSON Operations ==========

    /// Read a JSON file and deserialize it.
    pub fn read_json<T: DeserializeOwned>(&self, path: impl AsRef<Path>) -> StorageResult<T> {
        if !self.initialized {
            return Err(StorageError::NotInitialized);
        }

        let file = File::open(path.as_ref())?;
        let reader = BufReader::new(file);
        let value = serde_json::from_reader(reader)?;
        Ok(value)
    }

    /// Write a JSON file (atomic write via rename).
    pub fn write_json<T: Serialize>(&self, path: impl AsRef<Path>, value: &T) -> StorageResult<()> {
        if !self.initialized {
            return Err(StorageError::NotInitialized);
        }

        let path = path.as_ref();

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Write to temp file first, then rename for atomicity
        let temp_path = path.with_extension("tmp");
        {
            let file = File::create(&temp_path)?;
            let mut writer = BufWriter::new(file);
            serde_json::to_writer_pretty(&mut writer, value)?;
            writer.flush()?;
        }

        fs::rename(&temp_path, path)?;
        Ok(())
    }

    /// Check if a file exists.
    pub fn exists(&self, path: impl AsRef<Path>) -> bool {
        File::open(path.as_ref()).is_ok()
    }

    /// Delete a file.
    pub fn delete(&self, path: impl AsRef<Path>) -> StorageResult<()> {
        if !self.initialized {
            return Err(StorageError::NotInitialized);
        }
        fs::remove_file(path.as_ref())?;
        Ok(())
    }

    /// List all file stems in a directory with the given extension.
    ///
    /// Used by repositories to enumerate record ids in a collection.
    pub fn list_files(&self, dir: impl AsRef<Path>, extension: &str) -> StorageResult<Vec<String>> {
        if !self.initialized {
            return Err(StorageError::NotInitialized);
        }

        let dir = dir.as_ref();
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut ids = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.is_file() {
                if let Some(ext) = path.extension() {
                    if ext == extension {
                        if let Some(stem) = path.file_stem() {
                            if let Some(id) = stem.to_str() {
                                ids.push(id.to_string());
                            }
                        }
                    }
                }
            }
        }
        Ok(ids)
    }

    /// Append a line of raw bytes to a file, creating it if needed.
    pub fn append_line(&self, path: impl AsRef<Path>, line: &str) -> StorageResult<()> {
        if !self.initialized {
            return Err(StorageError::NotInitialized);
        }

        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        file.write_all(line.as_bytes())?;
        file.write_all(b"\n")?;
        file.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use std::env;

    fn test_storage() -> DocumentStorage {
        let test_dir = env::temp_dir().join(format!("test-storage-{}", uuid::Uuid::new_v4()));
        let paths = StoragePaths::new(&test_dir);
        let mut storage = DocumentStorage::new(paths);
        storage
            .initialize()
            .expect("Failed to initialize test storage");
        storage
    }

    fn cleanup_storage(storage: &DocumentStorage) {
        let _ = fs::remove_dir_all(storage.paths().root());
    }

    #[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
    struct TestData {
        id: String,
        value: i32,
    }

    #[test]
    fn initialize_creates_directories() {
        let storage = test_storage();

        assert!(storage.paths().users_dir().exists());
        assert!(storage.paths().listings_dir().exists());
        assert!(storage.paths().portfolio_dir().exists());
        assert!(storage.paths().sync_dir().exists());

        cleanup_storage(&storage);
    }

    #[test]
    fn write_and_read_json() {
        let storage = test_storage();
        let data = TestData {
            id: "test-1".to_string(),
            value: 42,
        };

        let path = storage.paths().users_dir().join("test.json");
        storage.write_json(&path, &data).unwrap();

        let read: TestData = storage.read_json(&path).unwrap();
        assert_eq!(read, data);

        cleanup_storage(&storage);
    }

    #[test]
    fn health_check_works() {
        let storage = test_storage();
        storage.health_check().expect("Health check should pass");
        cleanup_storage(&storage);
    }

    #[test]
    fn list_files_returns_ids() {
        let storage = test_storage();

        for i in 1..=3 {
            let path = storage.paths().listings_dir().join(format!("tok-{i}.json"));
            storage
                .write_json(
                    &path,
                    &TestData {
                        id: format!("tok-{i}"),
                        value: i,
                    },
                )
                .unwrap();
        }

        let ids = storage
            .list_files(storage.paths().listings_dir(), "json")
            .unwrap();
        assert_eq!(ids.len(), 3);
        assert!(ids.contains(&"tok-1".to_string()));
        assert!(ids.contains(&"tok-2".to_string()));
        assert!(ids.contains(&"tok-3".to_string()));

        cleanup_storage(&storage);
    }

    #[test]
    fn delete_file_removes_it() {
        let storage = test_storage();

        let path = storage.paths().users_dir().join("to-delete.json");
        storage
            .write_json(
                &path,
                &TestData {
                    id: "del".to_string(),
                    value: 0,
                },
            )
            .unwrap();

        assert!(storage.exists(&path));
        storage.delete(&path).unwrap();
        assert!(!storage.exists(&path));

        cleanup_storage(&storage);
    }

    #[test]
    fn append_line_accumulates() {
        let storage = test_storage();

        let path = storage.paths().sync_failures_file();
        storage.append_line(&path, "{\"a\":1}").unwrap();
        storage.append_line(&path, "{\"a\":2}").unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 2);

        cleanup_storage(&storage);
    }

    #[test]
    fn uninitialized_storage_returns_error() {
        let paths = StoragePaths::new("/tmp/never-init");
        let storage = DocumentStorage::new(paths);

        let result = storage.read_json::<TestData>("/tmp/any.json");
        assert!(matches!(result, Err(StorageError::NotInitialized)));
    }
}
