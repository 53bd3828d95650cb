// src/store/mod.rs

use crate::table::{JobTable, Row};
use crate::{load, query};
use once_cell::sync::OnceCell;
use std::path::PathBuf;
use tracing::error;

/// Default source location, relative to the working directory.
pub const DEFAULT_DATA_FILE: &str = "data/job_data.csv";

/// Outcome of the one-shot load. Queries stay fail-soft either way; this is
/// how callers and tests tell "no matches" apart from "load failed".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    Loaded { rows: usize },
    Failed(String),
}

impl LoadStatus {
    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadStatus::Loaded { .. })
    }
}

struct CacheState {
    table: JobTable,
    status: LoadStatus,
}

/// In-memory repository of job listings backed by a single CSV file.
///
/// The source is read at most once, on the first query; the parsed table
/// lives for the store's lifetime and is never reloaded, so edits to the
/// file after the first query are invisible. A failed load is logged and
/// swallowed: every query then runs against an empty table and returns
/// empty results rather than an error.
///
/// The cache sits behind a `OnceCell`, so concurrent first queries from
/// multiple threads still load exactly once.
pub struct JobStore {
    source: PathBuf,
    cache: OnceCell<CacheState>,
}

impl JobStore {
    /// Create a store reading from `source`. Nothing is read until the
    /// first query.
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            cache: OnceCell::new(),
        }
    }

    /// Store over the default bundled data file.
    pub fn open_default() -> Self {
        Self::new(DEFAULT_DATA_FILE)
    }

    fn cache(&self) -> &CacheState {
        self.cache.get_or_init(|| {
            match load::load_jobs_csv(&self.source) {
                Ok(table) => CacheState {
                    status: LoadStatus::Loaded {
                        rows: table.rows.len(),
                    },
                    table,
                },
                Err(err) => {
                    // Fail-soft: keep serving (empty) results, leave the
                    // reason in the log and in `load_status`.
                    error!(
                        source = %self.source.display(),
                        "failed to load job data: {:#}", err
                    );
                    CacheState {
                        table: JobTable::empty(),
                        status: LoadStatus::Failed(format!("{:#}", err)),
                    }
                }
            }
        })
    }

    /// Whether the one-shot load succeeded. Triggers the load if no query
    /// has run yet.
    pub fn load_status(&self) -> &LoadStatus {
        &self.cache().status
    }

    /// Column names from the source header, in source order.
    pub fn headers(&self) -> &[String] {
        &self.cache().table.headers
    }

    /// All values seen for `field`, deduplicated and sorted ascending.
    /// Rows without the field contribute a single leading `None`.
    pub fn distinct_values(&self, field: &str) -> Vec<Option<String>> {
        query::distinct_values(&self.cache().table.rows, field)
    }

    /// Snapshot of every row in source order. The returned rows are copies;
    /// mutating them does not touch the cache.
    pub fn all_rows(&self) -> Vec<Row> {
        self.cache().table.rows.clone()
    }

    /// Rows whose value at `column` case-insensitively contains `term`.
    pub fn find_by_column_and_value(&self, column: &str, term: &str) -> Vec<&Row> {
        query::find_by_column_and_value(&self.cache().table.rows, column, term)
    }

    /// Rows where any column case-insensitively contains `term`, each row
    /// at most once.
    pub fn find_by_value(&self, term: &str) -> Vec<&Row> {
        query::find_by_value(&self.cache().table.rows, term)
    }
}
