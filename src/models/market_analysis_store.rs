use crate::constants::{
    MARKET_ANALYSIS_DATE_FORMAT, MARKET_ANALYSIS_DIR_NAME, MARKET_ANALYSIS_HEADERS,
};
use crate::utils::{code_file_path, ensure_csv_file, read_csv_rows, write_csv_rows};
use crate::Error;
use chrono::{Local, NaiveDate};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// One dated note in a stock's analysis file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketAnalysis {
    pub date: String,
    pub analysis: String,
}

/// Outcome of `MarketAnalysisStore::upsert`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarketAnalysisUpdate {
    pub code: String,
    pub date: String,
    pub analysis: String,

    /// `true` when a note for the same day was overwritten.
    #[serde(skip)]
    pub replaced: bool,
}

/// Per-stock analysis notes under `<data dir>/marketAnalysis/<CODE>.csv`, at
/// most one note per calendar day.
pub struct MarketAnalysisStore {
    dir: PathBuf,
}

impl MarketAnalysisStore {
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        MarketAnalysisStore {
            dir: data_dir.as_ref().join(MARKET_ANALYSIS_DIR_NAME),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// The last note of each comma-separated code, keyed by the uppercased
    /// code. Codes without notes map to `None`; their files are created empty.
    pub fn latest(&self, codes: &str) -> Result<BTreeMap<String, Option<MarketAnalysis>>, Error> {
        let codes: Vec<String> = codes
            .split(',')
            .map(|code| code.trim().to_uppercase())
            .filter(|code| !code.is_empty())
            .collect();

        if codes.is_empty() {
            return Err(Error::InvalidInput("no valid code given".to_string()));
        }

        let mut latest = BTreeMap::new();

        for code in codes {
            let notes = self.read_notes(&code)?;
            latest.insert(code, notes.into_iter().last());
        }

        Ok(latest)
    }

    /// Records today's note for `code`, replacing any note already written today.
    pub fn upsert(&self, code: &str, analysis: &str) -> Result<MarketAnalysisUpdate, Error> {
        self.upsert_on(code, analysis, Local::now().date_naive())
    }

    pub fn upsert_on(
        &self,
        code: &str,
        analysis: &str,
        date: NaiveDate,
    ) -> Result<MarketAnalysisUpdate, Error> {
        let code = code.trim().to_uppercase();
        let analysis = analysis.trim();

        if code.is_empty() {
            return Err(Error::InvalidInput("code must not be empty".to_string()));
        }

        if analysis.is_empty() {
            return Err(Error::InvalidInput(
                "analysis must not be empty".to_string(),
            ));
        }

        let date = date.format(MARKET_ANALYSIS_DATE_FORMAT).to_string();
        let mut notes = self.read_notes(&code)?;
        let mut replaced = false;

        for note in notes.iter_mut().filter(|note| note.date == date) {
            note.analysis = analysis.to_string();
            replaced = true;
        }

        if !replaced {
            notes.push(MarketAnalysis {
                date: date.clone(),
                analysis: analysis.to_string(),
            });
        }

        debug!(
            "{} analysis for {} on {}",
            if replaced { "Replaced" } else { "Added" },
            code,
            date
        );

        write_csv_rows(&code_file_path(&self.dir, &code)?, &MARKET_ANALYSIS_HEADERS, &notes)?;

        Ok(MarketAnalysisUpdate {
            code,
            date,
            analysis: analysis.to_string(),
            replaced,
        })
    }

    fn read_notes(&self, code: &str) -> Result<Vec<MarketAnalysis>, Error> {
        let path = code_file_path(&self.dir, code)?;
        ensure_csv_file(&path, &MARKET_ANALYSIS_HEADERS)?;
        read_csv_rows(&path)
    }
}
