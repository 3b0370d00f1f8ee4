// src/store.rs
//! JSON-file key-value store for reports and projects.
//!
//! A thin collaborator: it persists what the aggregator produced and never
//! recomputes conformity. Records are keyed by generated ids of the form
//! `<kind>-<timestamp-ms>` and scoped per owner — reads and listings for
//! one owner never see another owner's records.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{PlancheckError, Result};
use crate::project::Project;
use crate::types::OverallReport;

/// A persisted report: the aggregator output plus storage identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredReport {
    pub id: String,
    pub owner_id: String,
    pub saved_at_ms: u64,
    pub report: OverallReport,
}

/// Milliseconds since the Unix epoch.
#[must_use]
pub fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
        .unwrap_or(0)
}

// Ids must stay unique even when two saves land in the same millisecond.
static LAST_TIMESTAMP_MS: AtomicU64 = AtomicU64::new(0);

/// A monotonically increasing millisecond timestamp for id generation.
#[must_use]
pub fn next_timestamp_ms() -> u64 {
    let now = now_ms();
    let mut last = LAST_TIMESTAMP_MS.load(Ordering::Relaxed);
    loop {
        let candidate = now.max(last + 1);
        match LAST_TIMESTAMP_MS.compare_exchange(
            last,
            candidate,
            Ordering::Relaxed,
            Ordering::Relaxed,
        ) {
            Ok(_) => return candidate,
            Err(actual) => last = actual,
        }
    }
}

/// Generates a record id of the form `<kind>-<timestamp-ms>`.
#[must_use]
pub fn generate_id(kind: &str, at_ms: u64) -> String {
    format!("{kind}-{at_ms}")
}

/// Directory-backed store, one JSON file per record.
#[derive(Debug, Clone)]
pub struct Store {
    root: PathBuf,
}

impl Store {
    /// Opens (creating if needed) a store rooted at `root`.
    ///
    /// # Errors
    ///
    /// Returns an error if the root directory cannot be created.
    pub fn open(root: &Path) -> Result<Self> {
        fs::create_dir_all(root).map_err(|source| PlancheckError::Io {
            source,
            path: root.to_path_buf(),
        })?;
        Ok(Self {
            root: root.to_path_buf(),
        })
    }

    /// Persists a report for `owner_id`, returning the stored record with
    /// its generated id.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be written.
    pub fn save_report(&self, owner_id: &str, report: &OverallReport) -> Result<StoredReport> {
        let at = next_timestamp_ms();
        let record = StoredReport {
            id: generate_id("report", at),
            owner_id: owner_id.to_string(),
            saved_at_ms: at,
            report: report.clone(),
        };
        self.write_record("reports", &record.id, &record)?;
        Ok(record)
    }

    /// Loads one report by id, scoped to `owner_id`.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the record does not exist or belongs to a
    /// different owner.
    pub fn get_report(&self, owner_id: &str, id: &str) -> Result<StoredReport> {
        let record: StoredReport = self.read_record("reports", id)?;
        if record.owner_id != owner_id {
            return Err(PlancheckError::NotFound { id: id.to_string() });
        }
        Ok(record)
    }

    /// Lists all reports belonging to `owner_id`, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the store directory cannot be read.
    pub fn list_reports(&self, owner_id: &str) -> Result<Vec<StoredReport>> {
        let mut records: Vec<StoredReport> = self
            .read_all("reports")?
            .into_iter()
            .filter(|r: &StoredReport| r.owner_id == owner_id)
            .collect();
        records.sort_by_key(|r| r.saved_at_ms);
        Ok(records)
    }

    /// Persists a project record (id already assigned by [`Project::new`]).
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be written.
    pub fn save_project(&self, project: &Project) -> Result<()> {
        self.write_record("projects", &project.id, project)
    }

    /// Loads one project by id, scoped to `owner_id`.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the record does not exist or belongs to a
    /// different owner.
    pub fn get_project(&self, owner_id: &str, id: &str) -> Result<Project> {
        let project: Project = self.read_record("projects", id)?;
        if project.owner_id != owner_id {
            return Err(PlancheckError::NotFound { id: id.to_string() });
        }
        Ok(project)
    }

    /// Lists all projects belonging to `owner_id`, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the store directory cannot be read.
    pub fn list_projects(&self, owner_id: &str) -> Result<Vec<Project>> {
        let mut projects: Vec<Project> = self
            .read_all("projects")?
            .into_iter()
            .filter(|p: &Project| p.owner_id == owner_id)
            .collect();
        projects.sort_by_key(|p| p.submitted_at_ms);
        Ok(projects)
    }

    fn kind_dir(&self, kind: &str) -> PathBuf {
        self.root.join(kind)
    }

    fn write_record<T: Serialize>(&self, kind: &str, id: &str, record: &T) -> Result<()> {
        let dir = self.kind_dir(kind);
        fs::create_dir_all(&dir).map_err(|source| PlancheckError::Io {
            source,
            path: dir.clone(),
        })?;
        let path = dir.join(format!("{id}.json"));
        let json = serde_json::to_string_pretty(record)?;
        fs::write(&path, json).map_err(|source| PlancheckError::Io { source, path })?;
        Ok(())
    }

    fn read_record<T: DeserializeOwned>(&self, kind: &str, id: &str) -> Result<T> {
        let path = self.kind_dir(kind).join(format!("{id}.json"));
        let raw = fs::read_to_string(&path)
            .map_err(|_| PlancheckError::NotFound { id: id.to_string() })?;
        Ok(serde_json::from_str(&raw)?)
    }

    fn read_all<T: DeserializeOwned>(&self, kind: &str) -> Result<Vec<T>> {
        let dir = self.kind_dir(kind);
        if !dir.exists() {
            return Ok(Vec::new());
        }
        let entries = fs::read_dir(&dir).map_err(|source| PlancheckError::Io {
            source,
            path: dir.clone(),
        })?;

        let mut records = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| PlancheckError::Io {
                source,
                path: dir.clone(),
            })?;
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let raw = fs::read_to_string(&path).map_err(|source| PlancheckError::Io {
                source,
                path: path.clone(),
            })?;
            records.push(serde_json::from_str(&raw)?);
        }
        Ok(records)
    }
}
