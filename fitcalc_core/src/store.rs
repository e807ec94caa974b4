//! # Result Store
//!
//! Short-lived history of computed results, injected by the presentation
//! layer. The compute path never touches it.
//!
//! - **Last result per calculator**, expired after a TTL (30 days by default)
//! - **Recently used calculators**, most recent first, de-duplicated and capped
//!
//! [`MemoryStore`] keeps everything in memory. [`JsonFileStore`] wraps it and
//! persists to a JSON file after every change, using the same atomic
//! write-then-rename save as the rest of the crate's file handling.
//!
//! Timestamps are passed in by the caller so expiry is deterministic.
//!
//! ## Example
//!
//! ```rust
//! use chrono::{Duration, Utc};
//! use fitcalc_core::calculators::{compute_raw, CalculatorKind};
//! use fitcalc_core::store::{MemoryStore, ResultStore};
//! use fitcalc_core::validation::RawInput;
//!
//! let mut store = MemoryStore::new(Duration::days(30), 5);
//! let raw = RawInput::new().with("height", "180").with("weight", "80");
//! let now = Utc::now();
//!
//! store.record(compute_raw("bmi", &raw).unwrap(), now).unwrap();
//! assert!(store.last_result(CalculatorKind::Bmi, now).unwrap().is_some());
//! assert!(store.last_result(CalculatorKind::Bmi, now + Duration::days(31)).unwrap().is_none());
//! ```

use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::calculators::CalculatorKind;
use crate::errors::{CalcError, CalcResult};
use crate::result::CalculatorResult;

/// History file format version
pub const HISTORY_VERSION: u32 = 1;

/// A result with the time it was recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredResult {
    pub saved_at: DateTime<Utc>,
    pub result: CalculatorResult,
}

impl StoredResult {
    pub fn kind(&self) -> CalculatorKind {
        self.result.calculator
    }

    /// Whether the entry has reached `ttl` at `now`
    pub fn is_expired(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        now - self.saved_at >= ttl
    }
}

/// Storage for recent results, injected by the presentation layer.
pub trait ResultStore {
    /// Cache a result as its calculator's last result and mark the
    /// calculator as most recently used
    fn record(&mut self, result: CalculatorResult, now: DateTime<Utc>) -> CalcResult<()>;

    /// The calculator's last result, or `None` if absent or expired.
    /// Expired entries are evicted.
    fn last_result(&mut self, kind: CalculatorKind, now: DateTime<Utc>) -> CalcResult<Option<StoredResult>>;

    /// Recently used calculators, most recent first
    fn recent(&self) -> Vec<CalculatorKind>;

    /// Drop all history
    fn clear(&mut self) -> CalcResult<()>;
}

// ============================================================================
// In-memory store
// ============================================================================

#[derive(Debug, Clone)]
pub struct MemoryStore {
    entries: Vec<StoredResult>,
    recent: Vec<CalculatorKind>,
    ttl: Duration,
    recent_limit: usize,
}

impl MemoryStore {
    pub fn new(ttl: Duration, recent_limit: usize) -> Self {
        MemoryStore {
            entries: Vec::new(),
            recent: Vec::new(),
            ttl,
            recent_limit,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every expired entry. Returns how many were removed.
    pub fn purge_expired(&mut self, now: DateTime<Utc>) -> usize {
        let ttl = self.ttl;
        let before = self.entries.len();
        self.entries.retain(|e| !e.is_expired(now, ttl));
        let removed = before - self.entries.len();
        if removed > 0 {
            tracing::debug!(removed, "purged expired results");
        }
        removed
    }

    fn touch(&mut self, kind: CalculatorKind) {
        self.recent.retain(|k| *k != kind);
        self.recent.insert(0, kind);
        self.recent.truncate(self.recent_limit);
    }

    fn to_file(&self) -> HistoryFile {
        HistoryFile {
            version: HISTORY_VERSION,
            entries: self.entries.clone(),
            recent: self.recent.clone(),
        }
    }
}

impl ResultStore for MemoryStore {
    fn record(&mut self, result: CalculatorResult, now: DateTime<Utc>) -> CalcResult<()> {
        let kind = result.calculator;
        self.entries.retain(|e| e.kind() != kind);
        self.entries.push(StoredResult { saved_at: now, result });
        self.touch(kind);
        Ok(())
    }

    fn last_result(&mut self, kind: CalculatorKind, now: DateTime<Utc>) -> CalcResult<Option<StoredResult>> {
        let Some(index) = self.entries.iter().position(|e| e.kind() == kind) else {
            return Ok(None);
        };
        if self.entries[index].is_expired(now, self.ttl) {
            let evicted = self.entries.remove(index);
            tracing::debug!(calculator = kind.slug(), saved_at = %evicted.saved_at, "evicted expired result");
            return Ok(None);
        }
        Ok(Some(self.entries[index].clone()))
    }

    fn recent(&self) -> Vec<CalculatorKind> {
        self.recent.clone()
    }

    fn clear(&mut self) -> CalcResult<()> {
        self.entries.clear();
        self.recent.clear();
        Ok(())
    }
}

// ============================================================================
// JSON file store
// ============================================================================

/// On-disk history layout
#[derive(Debug, Clone, Serialize, Deserialize)]
struct HistoryFile {
    version: u32,
    #[serde(default)]
    entries: Vec<StoredResult>,
    #[serde(default)]
    recent: Vec<CalculatorKind>,
}

/// A [`MemoryStore`] persisted to a JSON file.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    inner: MemoryStore,
}

impl JsonFileStore {
    /// Open the history file, starting empty if it does not exist yet.
    pub fn open(path: impl Into<PathBuf>, ttl: Duration, recent_limit: usize) -> CalcResult<Self> {
        let path = path.into();
        let mut inner = MemoryStore::new(ttl, recent_limit);

        match fs::read_to_string(&path) {
            Ok(contents) => {
                let file: HistoryFile = serde_json::from_str(&contents).map_err(|e| {
                    CalcError::SerializationError {
                        reason: format!("Invalid JSON in {}: {}", path.display(), e),
                    }
                })?;
                if file.version != HISTORY_VERSION {
                    return Err(CalcError::store_error(
                        "open",
                        path.display().to_string(),
                        format!("unsupported history version {} (expected {})", file.version, HISTORY_VERSION),
                    ));
                }
                inner.entries = file.entries;
                inner.recent = file.recent;
                inner.recent.truncate(recent_limit);
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => return Err(CalcError::store_error("open", path.display().to_string(), e.to_string())),
        }

        Ok(JsonFileStore { path, inner })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Persist the current state with an atomic write.
    pub fn save(&self) -> CalcResult<()> {
        save_atomic(&self.path, &serde_json::to_string_pretty(&self.inner.to_file())?)
    }
}

impl ResultStore for JsonFileStore {
    fn record(&mut self, result: CalculatorResult, now: DateTime<Utc>) -> CalcResult<()> {
        self.inner.purge_expired(now);
        self.inner.record(result, now)?;
        self.save()
    }

    fn last_result(&mut self, kind: CalculatorKind, now: DateTime<Utc>) -> CalcResult<Option<StoredResult>> {
        let before = self.inner.len();
        let found = self.inner.last_result(kind, now)?;
        if self.inner.len() != before {
            self.save()?;
        }
        Ok(found)
    }

    fn recent(&self) -> Vec<CalculatorKind> {
        self.inner.recent()
    }

    fn clear(&mut self) -> CalcResult<()> {
        self.inner.clear()?;
        self.save()
    }
}

/// Write `contents` to `path` via a `.tmp` sibling, fsync, then rename.
fn save_atomic(path: &Path, contents: &str) -> CalcResult<()> {
    let tmp_path = path.with_extension("json.tmp");

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        CalcError::store_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(contents.as_bytes()).map_err(|e| {
        CalcError::store_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        CalcError::store_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        CalcError::store_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculators::compute_raw;
    use crate::validation::RawInput;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap()
    }

    fn bmi_result() -> CalculatorResult {
        compute_raw("bmi", &RawInput::new().with("height", "180").with("weight", "80")).unwrap()
    }

    fn max_hr_result() -> CalculatorResult {
        compute_raw("max-heart-rate", &RawInput::new().with("age", "30")).unwrap()
    }

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("fitcalc_store_{}_{}.json", name, std::process::id()))
    }

    #[test]
    fn test_last_result_within_ttl() {
        let mut store = MemoryStore::new(Duration::days(30), 5);
        store.record(bmi_result(), t0()).unwrap();

        let stored = store
            .last_result(CalculatorKind::Bmi, t0() + Duration::days(29))
            .unwrap()
            .unwrap();
        assert_eq!(stored.saved_at, t0());
        assert_eq!(stored.result.label(), Some("Normal weight"));
        assert!(store.last_result(CalculatorKind::Tdee, t0()).unwrap().is_none());
    }

    #[test]
    fn test_expired_result_is_evicted() {
        let mut store = MemoryStore::new(Duration::days(30), 5);
        store.record(bmi_result(), t0()).unwrap();

        assert!(store
            .last_result(CalculatorKind::Bmi, t0() + Duration::days(30))
            .unwrap()
            .is_none());
        assert!(store.is_empty());
        // Eviction is permanent even if asked again "in the past"
        assert!(store.last_result(CalculatorKind::Bmi, t0()).unwrap().is_none());
    }

    #[test]
    fn test_recent_is_deduplicated_and_capped() {
        let mut store = MemoryStore::new(Duration::days(30), 2);
        store.record(bmi_result(), t0()).unwrap();
        store.record(max_hr_result(), t0()).unwrap();
        store.record(bmi_result(), t0()).unwrap();
        assert_eq!(store.recent(), vec![CalculatorKind::Bmi, CalculatorKind::MaxHeartRate]);
        assert_eq!(store.len(), 2);

        let tdee = compute_raw(
            "tdee",
            &RawInput::new()
                .with("sex", "female")
                .with("age", "40")
                .with("height", "165")
                .with("weight", "60")
                .with("activity", "light"),
        )
        .unwrap();
        store.record(tdee, t0()).unwrap();
        assert_eq!(store.recent(), vec![CalculatorKind::Tdee, CalculatorKind::Bmi]);
    }

    #[test]
    fn test_record_replaces_previous_result() {
        let mut store = MemoryStore::new(Duration::days(30), 5);
        store.record(bmi_result(), t0()).unwrap();
        store.record(bmi_result(), t0() + Duration::days(1)).unwrap();
        let stored = store.last_result(CalculatorKind::Bmi, t0() + Duration::days(1)).unwrap().unwrap();
        assert_eq!(stored.saved_at, t0() + Duration::days(1));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_file_store_persists_across_reopen() {
        let path = temp_path("reopen");
        let _ = fs::remove_file(&path);

        {
            let mut store = JsonFileStore::open(&path, Duration::days(30), 5).unwrap();
            store.record(bmi_result(), t0()).unwrap();
            store.record(max_hr_result(), t0()).unwrap();
        }
        assert!(!path.with_extension("json.tmp").exists());

        let mut store = JsonFileStore::open(&path, Duration::days(30), 5).unwrap();
        assert_eq!(store.recent(), vec![CalculatorKind::MaxHeartRate, CalculatorKind::Bmi]);
        let stored = store.last_result(CalculatorKind::Bmi, t0()).unwrap().unwrap();
        let original = bmi_result();
        assert_eq!(stored.result.classification, original.classification);
        assert!((stored.result.value() - original.value()).abs() < 1e-12);

        store.clear().unwrap();
        let store = JsonFileStore::open(&path, Duration::days(30), 5).unwrap();
        assert!(store.recent().is_empty());
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_file_store_eviction_is_saved() {
        let path = temp_path("evict");
        let _ = fs::remove_file(&path);

        let mut store = JsonFileStore::open(&path, Duration::days(1), 5).unwrap();
        store.record(bmi_result(), t0()).unwrap();
        assert!(store
            .last_result(CalculatorKind::Bmi, t0() + Duration::days(2))
            .unwrap()
            .is_none());

        let mut reopened = JsonFileStore::open(&path, Duration::days(365), 5).unwrap();
        assert!(reopened.last_result(CalculatorKind::Bmi, t0()).unwrap().is_none());
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_corrupt_history_file() {
        let path = temp_path("corrupt");
        fs::write(&path, "{ not json").unwrap();
        let err = JsonFileStore::open(&path, Duration::days(30), 5).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");

        fs::write(&path, r#"{ "version": 99 }"#).unwrap();
        let err = JsonFileStore::open(&path, Duration::days(30), 5).unwrap_err();
        assert_eq!(err.error_code(), "STORE_ERROR");
        fs::remove_file(&path).unwrap();
    }
}
