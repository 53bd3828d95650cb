//! In-memory query layer over a job-listings CSV: load once, then answer
//! distinct-value and substring-search queries against the cached table.

pub mod load;
pub mod query;
pub mod store;
pub mod table;

pub use store::{JobStore, LoadStatus};
pub use table::{JobTable, Row};
