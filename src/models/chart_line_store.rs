use crate::constants::{CHART_LINES_DIR_NAME, CHART_LINE_HEADERS};
use crate::utils::{code_file_path, ensure_csv_file, read_csv_rows, write_csv_rows};
use crate::Error;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::{Path, PathBuf};

/// A stored row. `lines` holds a JSON array of line objects, each with an `id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ChartLineRow {
    code: String,
    period: String,
    lines: String,
    width: String,
    height: String,
}

/// The drawn lines of one stock and chart period.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartLines {
    pub code: String,
    pub period: String,
    pub lines: Vec<Value>,
    pub width: i64,
    pub height: i64,
}

impl ChartLines {
    fn empty(code: &str, period: &str) -> Self {
        ChartLines {
            code: code.to_string(),
            period: period.to_string(),
            lines: Vec::new(),
            width: 0,
            height: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartLineStatus {
    Found,
    /// No row for the code and period; empty lines are returned.
    Missing,
    /// The stored row could not be parsed; empty lines are returned.
    Malformed,
}

/// Chart annotations under `<data dir>/lines/<CODE>.csv`, one row per period.
pub struct ChartLineStore {
    dir: PathBuf,
}

impl ChartLineStore {
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        ChartLineStore {
            dir: data_dir.as_ref().join(CHART_LINES_DIR_NAME),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn query(&self, code: &str, period: &str) -> Result<(ChartLines, ChartLineStatus), Error> {
        let (code, period) = require_code_and_period(code, period)?;
        let rows = self.read_rows(&code)?;

        let Some(row) = rows.iter().find(|row| matches_row(row, &code, &period)) else {
            return Ok((ChartLines::empty(&code, &period), ChartLineStatus::Missing));
        };

        match parse_row(row) {
            Ok(lines) => Ok((lines, ChartLineStatus::Found)),
            Err(err) => {
                warn!("Malformed chart lines for {} {}: {}", code, period, err);
                Ok((ChartLines::empty(&code, &period), ChartLineStatus::Malformed))
            }
        }
    }

    /// Merges `new_lines` into the row for `code` and `period`, creating it if
    /// needed. Stored lines sharing an id with a new line are replaced. Returns
    /// the number of lines supplied.
    pub fn add(
        &self,
        code: &str,
        period: &str,
        new_lines: &[Value],
        width: i64,
        height: i64,
    ) -> Result<usize, Error> {
        let (code, period) = require_code_and_period(code, period)?;

        if new_lines
            .iter()
            .any(|line| !line.as_object().is_some_and(|line| line.contains_key("id")))
        {
            return Err(Error::InvalidInput(
                "every line must be an object with an id".to_string(),
            ));
        }

        let mut rows = self.read_rows(&code)?;

        match rows.iter_mut().find(|row| matches_row(row, &code, &period)) {
            Some(row) => {
                let new_ids: Vec<&Value> =
                    new_lines.iter().filter_map(|line| line.get("id")).collect();

                let mut lines: Vec<Value> = parse_lines(&row.lines)
                    .map_err(|e| Error::ParserError(format!("stored chart lines: {}", e)))?
                    .into_iter()
                    .filter(|line| !line.get("id").is_some_and(|id| new_ids.contains(&id)))
                    .collect();
                lines.extend(new_lines.iter().cloned());

                row.lines = serde_json::to_string(&lines)?;
                row.width = width.to_string();
                row.height = height.to_string();
            }
            None => rows.push(ChartLineRow {
                code: code.clone(),
                period: period.clone(),
                lines: serde_json::to_string(new_lines)?,
                width: width.to_string(),
                height: height.to_string(),
            }),
        }

        debug!("Added {} chart lines for {} {}", new_lines.len(), code, period);
        self.write_rows(&code, &rows)?;

        Ok(new_lines.len())
    }

    /// Deletes the line with `line_id` and returns how many lines remain.
    pub fn remove(&self, code: &str, period: &str, line_id: &Value) -> Result<usize, Error> {
        let (code, period) = require_code_and_period(code, period)?;
        let mut rows = self.read_rows(&code)?;

        let row = rows
            .iter_mut()
            .find(|row| matches_row(row, &code, &period))
            .ok_or_else(|| {
                Error::NotFound(format!("no chart lines for code={} period={}", code, period))
            })?;

        let lines = parse_lines(&row.lines)
            .map_err(|e| Error::InvalidInput(format!("stored chart lines are malformed: {}", e)))?;
        let total = lines.len();

        let kept: Vec<Value> = lines
            .into_iter()
            .filter(|line| line.get("id") != Some(line_id))
            .collect();

        if kept.len() == total {
            return Err(Error::NotFound(format!("no chart line with id={}", line_id)));
        }

        let remaining = kept.len();
        row.lines = serde_json::to_string(&kept)?;
        self.write_rows(&code, &rows)?;

        Ok(remaining)
    }

    fn read_rows(&self, code: &str) -> Result<Vec<ChartLineRow>, Error> {
        let path = code_file_path(&self.dir, code)?;

        if !path.exists() {
            return Ok(Vec::new());
        }

        read_csv_rows(&path)
    }

    fn write_rows(&self, code: &str, rows: &[ChartLineRow]) -> Result<(), Error> {
        let path = code_file_path(&self.dir, code)?;
        ensure_csv_file(&path, &CHART_LINE_HEADERS)?;
        write_csv_rows(&path, &CHART_LINE_HEADERS, rows)
    }
}

fn require_code_and_period(code: &str, period: &str) -> Result<(String, String), Error> {
    let code = code.trim().to_uppercase();
    let period = period.trim();

    if code.is_empty() || period.is_empty() {
        return Err(Error::InvalidInput(
            "code and period are required".to_string(),
        ));
    }

    Ok((code, period.to_string()))
}

fn matches_row(row: &ChartLineRow, code: &str, period: &str) -> bool {
    row.code.to_uppercase() == code && row.period == period
}

// Blank means no lines yet
fn parse_lines(raw: &str) -> Result<Vec<Value>, serde_json::Error> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }

    serde_json::from_str(raw)
}

fn parse_row(row: &ChartLineRow) -> Result<ChartLines, Error> {
    let dimension = |raw: &str| -> Result<i64, Error> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(0);
        }
        raw.parse::<i64>()
            .map_err(|e| Error::ParserError(format!("invalid dimension {:?}: {}", raw, e)))
    };

    Ok(ChartLines {
        code: row.code.clone(),
        period: row.period.clone(),
        lines: parse_lines(&row.lines)?,
        width: dimension(&row.width)?,
        height: dimension(&row.height)?,
    })
}
