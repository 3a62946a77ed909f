use std::fs;
use std::io::{self, Write};
use std::path::Path;

use ridewatch_core::{RideRecord, COLUMN_HEADERS};
use ridewatch_logging::ride_info;
use tempfile::NamedTempFile;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// CSV text: header row, then one comma-delimited row per ride. No index column.
pub fn rides_to_csv(rides: &[RideRecord]) -> Result<String, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(COLUMN_HEADERS)?;
    for ride in rides {
        writer.write_record(ride.columns())?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|err| ExportError::Io(io::Error::new(err.error().kind(), err.to_string())))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Write rides to `path` via a temp file in the same directory, then rename.
///
/// Returns the number of rows written, header excluded.
pub fn export_csv(path: &Path, rides: &[RideRecord]) -> Result<usize, ExportError> {
    let content = rides_to_csv(rides)?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    if !dir.is_dir() {
        fs::create_dir_all(dir)?;
    }

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.flush()?;
    tmp.as_file_mut().sync_all()?;
    // Replace existing file if present.
    if path.exists() {
        fs::remove_file(path)?;
    }
    tmp.persist(path).map_err(|e| ExportError::Io(e.error))?;

    ride_info!("exported {} rides to {:?}", rides.len(), path);
    Ok(rides.len())
}
