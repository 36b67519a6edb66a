//! Recent-query history.
//!
//! A short, de-duplicated, most-recent-first list of past queries. Storage
//! is pluggable through [`HistoryBackend`]: a JSON file on native targets,
//! the host's key-value store in the browser, memory in tests. Reading is
//! forgiving: anything missing, unreadable, or malformed is "no history".

use crate::error::Result;
use std::cell::RefCell;
use std::io;
use std::path::{Path, PathBuf};

/// Default number of queries kept.
pub const MAX_RECENT_QUERIES: usize = 5;

/// Minimum trimmed length, in characters, for a query to be remembered.
pub const MIN_QUERY_CHARS: usize = 2;

/// Returns the trimmed query if it is long enough to remember.
fn qualifying(query: &str) -> Option<&str> {
    let trimmed = query.trim();
    (trimmed.chars().count() >= MIN_QUERY_CHARS).then_some(trimmed)
}

/// Bounded most-recent-first list of distinct queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentQueries {
    entries: Vec<String>,
    capacity: usize,
}

impl Default for RecentQueries {
    fn default() -> Self {
        Self::new()
    }
}

impl RecentQueries {
    /// Empty list holding up to [`MAX_RECENT_QUERIES`].
    pub fn new() -> Self {
        Self::with_capacity(MAX_RECENT_QUERIES)
    }

    /// Empty list holding up to `capacity` entries (at least 1).
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity: capacity.max(1),
        }
    }

    /// Rebuild from stored entries.
    ///
    /// Stored data is not trusted: entries are trimmed, unqualifying ones
    /// dropped, later duplicates dropped, and the list truncated.
    pub fn from_entries<I, S>(entries: I, capacity: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut recent = Self::with_capacity(capacity);
        for entry in entries {
            if recent.entries.len() == recent.capacity {
                break;
            }
            let Some(query) = qualifying(entry.as_ref()) else {
                continue;
            };
            if !recent.entries.iter().any(|existing| existing == query) {
                recent.entries.push(query.to_owned());
            }
        }
        recent
    }

    /// Remember a query.
    ///
    /// Queries shorter than [`MIN_QUERY_CHARS`] after trimming are ignored
    /// and `false` is returned. Otherwise the trimmed query moves to (or is
    /// inserted at) the front and the oldest entry falls off when full.
    pub fn record(&mut self, query: &str) -> bool {
        let Some(query) = qualifying(query) else {
            return false;
        };

        self.entries.retain(|existing| existing != query);
        self.entries.insert(0, query.to_owned());
        self.entries.truncate(self.capacity);
        true
    }

    /// Entries, most recent first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Entries starting with `prefix`, ignoring case, most recent first.
    pub fn matching(&self, prefix: &str) -> Vec<&str> {
        let prefix = prefix.trim().to_lowercase();
        self.entries
            .iter()
            .filter(|entry| entry.to_lowercase().starts_with(&prefix))
            .map(String::as_str)
            .collect()
    }

    /// Maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serialize as a JSON array of strings.
    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.entries).unwrap_or_else(|_| "[]".to_string())
    }

    /// Parse a stored JSON array, treating anything unusable as empty.
    pub fn from_json(raw: &str, capacity: usize) -> Self {
        if raw.trim().is_empty() {
            return Self::with_capacity(capacity);
        }

        match serde_json::from_str::<Vec<String>>(raw) {
            Ok(entries) => Self::from_entries(entries, capacity),
            Err(e) => {
                tracing::warn!(error = %e, "Discarding malformed recent-query history");
                Self::with_capacity(capacity)
            }
        }
    }
}

/// Key-value persistence for the serialized history.
pub trait HistoryBackend {
    /// Read the stored value, `None` if nothing was ever written.
    fn read(&self) -> io::Result<Option<String>>;

    /// Replace the stored value.
    fn write(&self, contents: &str) -> io::Result<()>;
}

/// History stored as a JSON file.
#[derive(Debug, Clone)]
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    /// Backend for the file at `path`; parent directories are created on write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HistoryBackend for FileBackend {
    fn read(&self) -> io::Result<Option<String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn write(&self, contents: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(&self.path, contents)
    }
}

/// In-process storage.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    value: RefCell<Option<String>>,
}

impl MemoryBackend {
    /// Empty storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-seeded with a raw value.
    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            value: RefCell::new(Some(contents.into())),
        }
    }

    /// The raw stored value.
    pub fn contents(&self) -> Option<String> {
        self.value.borrow().clone()
    }
}

impl HistoryBackend for MemoryBackend {
    fn read(&self) -> io::Result<Option<String>> {
        Ok(self.value.borrow().clone())
    }

    fn write(&self, contents: &str) -> io::Result<()> {
        *self.value.borrow_mut() = Some(contents.to_owned());
        Ok(())
    }
}

/// Recent-query history persisted through a [`HistoryBackend`].
#[derive(Debug)]
pub struct RecentQueryStore<B> {
    backend: B,
    capacity: usize,
}

impl<B: HistoryBackend> RecentQueryStore<B> {
    /// Store keeping [`MAX_RECENT_QUERIES`] entries.
    pub fn new(backend: B) -> Self {
        Self::with_capacity(backend, MAX_RECENT_QUERIES)
    }

    /// Store keeping up to `capacity` entries (at least 1).
    pub fn with_capacity(backend: B, capacity: usize) -> Self {
        Self {
            backend,
            capacity: capacity.max(1),
        }
    }

    /// Stored queries, most recent first. Never fails.
    pub fn load(&self) -> Vec<String> {
        self.load_recent().entries
    }

    /// Remember a query and persist the updated list.
    ///
    /// Unqualifying queries are a no-op and touch no storage. Only a failed
    /// write is reported; unreadable existing history is replaced.
    pub fn record(&self, query: &str) -> Result<()> {
        if qualifying(query).is_none() {
            return Ok(());
        }

        let mut recent = self.load_recent();
        recent.record(query);
        self.backend.write(&recent.to_json())?;
        tracing::debug!(entries = recent.len(), "Recorded recent query");
        Ok(())
    }

    /// Stored queries starting with `prefix`, ignoring case.
    pub fn suggestions(&self, prefix: &str) -> Vec<String> {
        self.load_recent()
            .matching(prefix)
            .into_iter()
            .map(str::to_owned)
            .collect()
    }

    /// Forget everything.
    pub fn clear(&self) -> Result<()> {
        self.backend.write("[]")?;
        Ok(())
    }

    /// The underlying backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    fn load_recent(&self) -> RecentQueries {
        match self.backend.read() {
            Ok(Some(raw)) => RecentQueries::from_json(&raw, self.capacity),
            Ok(None) => RecentQueries::with_capacity(self.capacity),
            Err(e) => {
                tracing::warn!(error = %e, "Could not read recent-query history");
                RecentQueries::with_capacity(self.capacity)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    struct FailingBackend;

    impl HistoryBackend for FailingBackend {
        fn read(&self) -> io::Result<Option<String>> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"))
        }

        fn write(&self, _contents: &str) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"))
        }
    }

    #[test]
    fn test_record_twice_keeps_one_entry() {
        let store = RecentQueryStore::new(MemoryBackend::new());
        store.record("hello world").unwrap();
        store.record("hello world").unwrap();

        assert_eq!(store.load(), vec!["hello world"]);
    }

    #[test]
    fn test_bounded_to_five_most_recent_first() {
        let store = RecentQueryStore::new(MemoryBackend::new());
        for query in ["one", "two", "three", "four", "five", "six", "seven"] {
            store.record(query).unwrap();
        }

        assert_eq!(store.load(), vec!["seven", "six", "five", "four", "three"]);
    }

    #[test]
    fn test_repeat_moves_to_front() {
        let mut recent = RecentQueries::new();
        recent.record("rust");
        recent.record("react");
        recent.record("rust");

        assert_eq!(recent.entries(), ["rust", "react"]);
    }

    #[test]
    fn test_short_queries_ignored() {
        let store = RecentQueryStore::new(MemoryBackend::new());
        store.record("a").unwrap();
        store.record("   b  ").unwrap();
        store.record("    ").unwrap();

        assert!(store.load().is_empty());
        assert!(store.backend().contents().is_none());
    }

    #[test]
    fn test_query_is_trimmed() {
        let mut recent = RecentQueries::new();
        assert!(recent.record("  cv  "));
        assert_eq!(recent.entries(), ["cv"]);
    }

    #[test]
    fn test_two_char_unicode_qualifies() {
        let mut recent = RecentQueries::new();
        assert!(recent.record("日本"));
        assert!(!recent.record("é"));
    }

    #[test]
    fn test_missing_history_is_empty() {
        let store = RecentQueryStore::new(MemoryBackend::new());
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_malformed_history_is_empty() {
        for raw in ["{not json", "42", r#"{"a": 1}"#, "[1, 2]"] {
            let store = RecentQueryStore::new(MemoryBackend::with_contents(raw));
            assert!(store.load().is_empty(), "expected empty history for {raw}");
        }
    }

    #[test]
    fn test_malformed_history_is_replaced_on_record() {
        let store = RecentQueryStore::new(MemoryBackend::with_contents("garbage"));
        store.record("projects").unwrap();
        assert_eq!(store.load(), vec!["projects"]);
    }

    #[test]
    fn test_stored_entries_are_sanitized() {
        let raw = r#"["  rust ", "x", "rust", "wasm", "cli", "web", "tui", "db"]"#;
        let store = RecentQueryStore::new(MemoryBackend::with_contents(raw));

        assert_eq!(store.load(), vec!["rust", "wasm", "cli", "web", "tui"]);
    }

    #[test]
    fn test_read_error_is_empty_write_error_reported() {
        let store = RecentQueryStore::new(FailingBackend);
        assert!(store.load().is_empty());
        assert!(store.record("hello").is_err());
    }

    #[test]
    fn test_suggestions_by_prefix() {
        let store = RecentQueryStore::new(MemoryBackend::new());
        for query in ["Rust CLI", "react", "rust wasm"] {
            store.record(query).unwrap();
        }

        assert_eq!(store.suggestions("RUST"), vec!["rust wasm", "Rust CLI"]);
        assert_eq!(store.suggestions("").len(), 3);
    }

    #[test]
    fn test_clear() {
        let store = RecentQueryStore::new(MemoryBackend::new());
        store.record("resume").unwrap();
        store.clear().unwrap();
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_custom_capacity() {
        let store = RecentQueryStore::with_capacity(MemoryBackend::new(), 2);
        for query in ["aa", "bb", "cc"] {
            store.record(query).unwrap();
        }
        assert_eq!(store.load(), vec!["cc", "bb"]);
    }

    #[test]
    fn test_file_backend_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("recent.json");

        let store = RecentQueryStore::new(FileBackend::new(&path));
        assert!(store.load().is_empty());
        store.record("contact").unwrap();
        store.record("skills").unwrap();

        let reopened = RecentQueryStore::new(FileBackend::new(&path));
        assert_eq!(reopened.load(), vec!["skills", "contact"]);
        assert_eq!(reopened.backend().path(), path.as_path());
    }

    #[test]
    fn test_file_backend_malformed_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("recent.json");
        std::fs::write(&path, "not json at all").unwrap();

        let store = RecentQueryStore::new(FileBackend::new(&path));
        assert!(store.load().is_empty());
    }
}
