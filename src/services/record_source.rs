//! Where each screen's records come from

use crate::model::record::FormRecord;
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Debug)]
pub enum SourceError {
    Io { path: PathBuf, source: io::Error },
    Parse { path: PathBuf, source: serde_json::Error },
    DuplicateId { path: PathBuf, id: String },
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::Io { path, source } => {
                write!(f, "Failed to read {}: {}", path.display(), source)
            }
            SourceError::Parse { path, source } => {
                write!(f, "Failed to parse {}: {}", path.display(), source)
            }
            SourceError::DuplicateId { path, id } => {
                write!(f, "Duplicate id '{}' in {}", id, path.display())
            }
        }
    }
}

impl std::error::Error for SourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SourceError::Io { source, .. } => Some(source),
            SourceError::Parse { source, .. } => Some(source),
            SourceError::DuplicateId { .. } => None,
        }
    }
}

/// Record source chosen at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordSource {
    /// Built-in datasets
    Mock,
    /// `<dir>/<screen slug>.json`, each a JSON array of records
    JsonDir(PathBuf),
}

impl RecordSource {
    pub fn from_data_dir(data_dir: Option<PathBuf>) -> Self {
        match data_dir {
            Some(dir) => RecordSource::JsonDir(dir),
            None => RecordSource::Mock,
        }
    }

    /// Load the dataset for `R`'s screen
    ///
    /// A missing file falls back to the built-in data; a malformed one is
    /// an error.
    pub fn load<R>(&self) -> Result<Vec<R>, SourceError>
    where
        R: FormRecord + DeserializeOwned,
    {
        let dir = match self {
            RecordSource::Mock => return Ok(R::mock()),
            RecordSource::JsonDir(dir) => dir,
        };

        let path = dir.join(format!("{}.json", R::SCREEN.slug()));
        if !path.exists() {
            info!(path = %path.display(), "no data file, using built-in records");
            return Ok(R::mock());
        }

        let records = load_json::<R>(&path)?;
        info!(path = %path.display(), count = records.len(), "loaded records");
        Ok(records)
    }

    /// Like `load`, but logs the failure and falls back to built-in data
    pub fn load_or_mock<R>(&self) -> (Vec<R>, Option<SourceError>)
    where
        R: FormRecord + DeserializeOwned,
    {
        match self.load::<R>() {
            Ok(records) => (records, None),
            Err(err) => {
                warn!(error = %err, screen = R::SCREEN.name(), "falling back to built-in records");
                (R::mock(), Some(err))
            }
        }
    }
}

fn load_json<R>(path: &Path) -> Result<Vec<R>, SourceError>
where
    R: FormRecord + DeserializeOwned,
{
    let contents = fs::read_to_string(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let records: Vec<R> = serde_json::from_str(&contents).map_err(|source| SourceError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let mut seen = HashSet::new();
    for record in &records {
        if !seen.insert(record.id()) {
            return Err(SourceError::DuplicateId {
                path: path.to_path_buf(),
                id: record.id().to_string(),
            });
        }
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::records::{LeaveType, StaffMember};
    use tempfile::TempDir;

    const LEAVE_JSON: &str = r#"[
        {"id": "LV-100", "name": "Jury Duty", "days_per_year": 5, "paid": true, "status": "Active"},
        {"id": "LV-101", "name": "Sabbatical", "days_per_year": 90, "paid": false,
         "description": "Every seven years", "status": "Inactive"}
    ]"#;

    #[test]
    fn test_mock_source() {
        let records: Vec<StaffMember> = RecordSource::Mock.load().unwrap();
        assert_eq!(records.len(), 25);
    }

    #[test]
    fn test_json_dir_reads_screen_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("leave_types.json"), LEAVE_JSON).unwrap();

        let source = RecordSource::JsonDir(dir.path().to_path_buf());
        let records: Vec<LeaveType> = source.load().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, "LV-100");
        assert_eq!(records[0].description, "");
        assert!(!records[1].paid);
    }

    #[test]
    fn test_missing_file_falls_back_to_mock() {
        let dir = TempDir::new().unwrap();
        let source = RecordSource::JsonDir(dir.path().to_path_buf());
        let records: Vec<StaffMember> = source.load().unwrap();
        assert_eq!(records, StaffMember::mock());
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("leave_types.json"), "{ not json").unwrap();

        let source = RecordSource::JsonDir(dir.path().to_path_buf());
        let err = source.load::<LeaveType>().unwrap_err();
        assert!(matches!(err, SourceError::Parse { .. }));
        assert!(err.to_string().starts_with("Failed to parse"));

        let (records, err) = source.load_or_mock::<LeaveType>();
        assert_eq!(records, LeaveType::mock());
        assert!(err.is_some());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let dir = TempDir::new().unwrap();
        let json = r#"[
            {"id": "LV-1", "name": "A", "days_per_year": 1, "paid": true, "status": "Active"},
            {"id": "LV-1", "name": "B", "days_per_year": 2, "paid": true, "status": "Active"}
        ]"#;
        fs::write(dir.path().join("leave_types.json"), json).unwrap();

        let source = RecordSource::JsonDir(dir.path().to_path_buf());
        match source.load::<LeaveType>() {
            Err(SourceError::DuplicateId { id, .. }) => assert_eq!(id, "LV-1"),
            other => panic!("expected duplicate id error, got {:?}", other.map(|r| r.len())),
        }
    }
}
