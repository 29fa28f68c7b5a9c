use crate::Error;
use csv::{ReaderBuilder, WriterBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::{self, File};
use std::path::Path;

/// Creates `path` (and its parent directory) holding just a header row, unless it already exists.
pub fn ensure_csv_file(path: &Path, headers: &[&str]) -> Result<(), Error> {
    if path.exists() {
        return Ok(());
    }

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    write_csv_rows::<()>(path, headers, &[])
}

pub fn read_csv_rows<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, Error> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_path(path)?;

    let mut rows = Vec::new();
    for record in reader.deserialize() {
        rows.push(record?);
    }

    Ok(rows)
}

/// Rewrites the whole file: header row first, then every row in order.
pub fn write_csv_rows<T: Serialize>(path: &Path, headers: &[&str], rows: &[T]) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);

    // Written explicitly so an empty file still gets a header row
    writer.write_record(headers)?;

    for row in rows {
        writer.serialize(row)?;
    }

    writer.flush()?;

    Ok(())
}
