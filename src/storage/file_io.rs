//! File I/O utilities with atomic writes
//!
//! Every persisted file is read whole and rewritten whole. Writes go to a
//! sibling temp file first and are renamed into place, so a crash leaves
//! either the old or the new content.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::{PiggyError, PiggyResult};

/// Result of a load that never fails
///
/// Stores fall back to a default value when their file is absent or cannot
/// be parsed. The variant records which path was taken so callers and tests
/// can tell a real read from a fallback.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome<T> {
    /// The file existed and parsed
    Loaded(T),
    /// The file did not exist; the value is the default
    Missing(T),
    /// The file existed but was unreadable; the value is the default
    FellBackToDefault { value: T, reason: String },
}

impl<T> LoadOutcome<T> {
    /// Take the value regardless of where it came from
    pub fn into_inner(self) -> T {
        match self {
            Self::Loaded(v) | Self::Missing(v) => v,
            Self::FellBackToDefault { value, .. } => value,
        }
    }

    /// Borrow the value regardless of where it came from
    pub fn value(&self) -> &T {
        match self {
            Self::Loaded(v) | Self::Missing(v) => v,
            Self::FellBackToDefault { value, .. } => value,
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }

    /// Whether a corrupt file was replaced by the default
    pub fn fell_back(&self) -> bool {
        matches!(self, Self::FellBackToDefault { .. })
    }
}

/// Read JSON from a file, falling back to `T::default()` on absence or corruption
pub fn load_json_or_default<T, P>(path: P) -> LoadOutcome<T>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    match read_json(path) {
        Ok(Some(value)) => LoadOutcome::Loaded(value),
        Ok(None) => LoadOutcome::Missing(T::default()),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "falling back to defaults");
            LoadOutcome::FellBackToDefault {
                value: T::default(),
                reason: e.to_string(),
            }
        }
    }
}

/// Read JSON from a file
///
/// Returns `Ok(None)` if the file does not exist and `PersistenceCorrupt`
/// if it exists but cannot be opened or parsed.
pub fn read_json<T, P>(path: P) -> PiggyResult<Option<T>>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Ok(None);
    }

    let file = File::open(path).map_err(|e| PiggyError::corrupt(path, e))?;

    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .map(Some)
        .map_err(|e| PiggyError::corrupt(path, e))
}

/// Write JSON to a file atomically (write to temp, then rename)
pub fn write_json_atomic<T, P>(path: P, data: &T) -> PiggyResult<()>
where
    T: Serialize,
    P: AsRef<Path>,
{
    write_atomic(path.as_ref(), |writer| {
        serde_json::to_writer_pretty(&mut *writer, data)
            .map_err(|e| PiggyError::Storage(format!("Failed to serialize data: {}", e)))
    })
}

/// Write plain text to a file atomically
pub fn write_text_atomic<P: AsRef<Path>>(path: P, text: &str) -> PiggyResult<()> {
    write_atomic(path.as_ref(), |writer| {
        writer
            .write_all(text.as_bytes())
            .map_err(|e| PiggyError::Storage(format!("Failed to write data: {}", e)))
    })
}

fn write_atomic<F>(path: &Path, fill: F) -> PiggyResult<()>
where
    F: FnOnce(&mut BufWriter<File>) -> PiggyResult<()>,
{
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            PiggyError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Same directory as the target so the rename stays on one filesystem
    let mut temp_name = path.as_os_str().to_owned();
    temp_name.push(".tmp");
    let temp_path = std::path::PathBuf::from(temp_name);

    let file = File::create(&temp_path)
        .map_err(|e| PiggyError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    fill(&mut writer)?;

    writer
        .flush()
        .map_err(|e| PiggyError::Storage(format!("Failed to flush data: {}", e)))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| PiggyError::Storage(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        PiggyError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
    struct TestData {
        name: String,
        value: i32,
    }

    fn sample() -> TestData {
        TestData {
            name: "test".to_string(),
            value: 42,
        }
    }

    #[test]
    fn test_read_nonexistent_returns_none() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nonexistent.json");

        let data: Option<TestData> = read_json(&path).unwrap();
        assert!(data.is_none());
    }

    #[test]
    fn test_write_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.json");

        write_json_atomic(&path, &sample()).unwrap();
        assert!(path.exists());

        let loaded: Option<TestData> = read_json(&path).unwrap();
        assert_eq!(loaded, Some(sample()));
    }

    #[test]
    fn test_read_corrupt_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("corrupt.json");
        fs::write(&path, "not json at all").unwrap();

        let err = read_json::<TestData, _>(&path).unwrap_err();
        assert!(err.is_corrupt());
    }

    #[test]
    fn test_load_or_default_outcomes() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data.json");

        let missing: LoadOutcome<TestData> = load_json_or_default(&path);
        assert_eq!(missing, LoadOutcome::Missing(TestData::default()));

        fs::write(&path, "{ broken").unwrap();
        let corrupt: LoadOutcome<TestData> = load_json_or_default(&path);
        assert!(corrupt.fell_back());
        assert_eq!(corrupt.value(), &TestData::default());

        write_json_atomic(&path, &sample()).unwrap();
        let loaded: LoadOutcome<TestData> = load_json_or_default(&path);
        assert!(loaded.is_loaded());
        assert_eq!(loaded.into_inner(), sample());
    }

    #[test]
    fn test_atomic_write_no_temp_file_left() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.json");
        let temp_path = temp_dir.path().join("test.json.tmp");

        write_json_atomic(&path, &sample()).unwrap();

        assert!(path.exists());
        assert!(!temp_path.exists());
    }

    #[test]
    fn test_write_text_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("balance.txt");

        write_text_atomic(&path, "10.5").unwrap();
        write_text_atomic(&path, "3").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "3");
        assert!(!temp_dir.path().join("balance.txt.tmp").exists());
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("test.json");

        write_json_atomic(&path, &sample()).unwrap();
        assert!(path.exists());
    }
}
