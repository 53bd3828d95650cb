// src/load/mod.rs

use crate::table::{JobTable, Row};
use anyhow::{Context, Result};
use csv::ReaderBuilder;
use std::{fs::File, io::Read, path::Path};
use tracing::info;

/// Parse delimited job data from any reader.
///
/// The first record names the columns; every following record becomes one
/// `Row` keyed by those names. Quoting follows the standard CSV convention,
/// which the `csv` reader handles for us. Records with the wrong field count
/// are a parse error, not a partial row.
pub fn read_jobs<R: Read>(reader: R) -> Result<JobTable> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(reader);

    let headers: Vec<String> = rdr
        .headers()
        .context("reading header record")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut rows: Vec<Row> = Vec::new();
    for (idx, result) in rdr.records().enumerate() {
        let record =
            result.with_context(|| format!("CSV parse error at data record {}", idx))?;
        let mut row = Row::with_capacity(headers.len());
        for (header, value) in headers.iter().zip(record.iter()) {
            row.insert(header.clone(), value.to_string());
        }
        rows.push(row);
    }

    Ok(JobTable { headers, rows })
}

/// Open `path` and parse it as job-data CSV, preserving source order.
#[tracing::instrument(level = "info", skip(path), fields(path = %path.as_ref().display()))]
pub fn load_jobs_csv<P: AsRef<Path>>(path: P) -> Result<JobTable> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open job data file: {:?}", path.as_ref()))?;
    let table = read_jobs(file)
        .with_context(|| format!("Failed to parse job data file: {:?}", path.as_ref()))?;
    info!(
        rows = table.rows.len(),
        columns = table.headers.len(),
        "loaded job data"
    );
    Ok(table)
}
