use crate::Error;
use std::path::{Path, PathBuf};

/// Path of the per-stock file `<dir>/<CODE>.csv`. The code is trimmed and
/// uppercased; codes that are empty or would leave `dir` are rejected.
pub fn code_file_path(dir: &Path, code: &str) -> Result<PathBuf, Error> {
    let code = code.trim().to_uppercase();

    if code.is_empty() {
        return Err(Error::InvalidInput("code must not be empty".to_string()));
    }

    if code.contains(|c: char| c == '/' || c == '\\') || code.contains("..") {
        return Err(Error::InvalidInput(format!("invalid code: {}", code)));
    }

    Ok(dir.join(format!("{}.csv", code)))
}
