// src/table/mod.rs

use serde::Serialize;
use std::collections::HashMap;

/// One job listing, keyed by column name.
///
/// A lookup of a column that never existed in the source yields `None`;
/// search paths treat that as "no value", never as an error. Key iteration
/// order is the map's own order, not header order.
pub type Row = HashMap<String, String>;

/// The full set of job listings parsed from one delimited source.
#[derive(Debug, Clone, Default, Serialize)]
pub struct JobTable {
    /// Column names, from the header record of the source file, in source order.
    pub headers: Vec<String>,
    /// Each data record as a column-name → value map, in source order.
    pub rows: Vec<Row>,
}

impl JobTable {
    /// An empty table with no columns. Used when a load fails.
    pub fn empty() -> Self {
        Self::default()
    }
}
