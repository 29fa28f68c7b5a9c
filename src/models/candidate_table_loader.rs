use crate::constants::{CANDIDATE_HEADER_ALIASES, UTF8_BOM};
use crate::models::Candidate;
use crate::types::CandidateTable;
use crate::utils::dedup_by_code;
use crate::Error;
use csv::{ReaderBuilder, StringRecord};
use flate2::read::GzDecoder;
use log::{info, warn};
use std::fs;
use std::io::{Cursor, Read};
use std::path::Path;

pub struct CandidateTableLoader {}

impl CandidateTableLoader {
    pub fn read_candidate_table_from_string(csv: &str) -> Result<CandidateTable, Error> {
        // Listings are written as `utf-8-sig`
        let csv = csv.strip_prefix(UTF8_BOM).unwrap_or(csv);

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(Cursor::new(csv));

        let headers = reader
            .headers()
            .map_err(|e| Error::ParserError(format!("Failed to read headers: {}", e)))?
            .clone();

        let (code_index, name_index) = Self::resolve_columns(&headers)?;

        let mut candidates = CandidateTable::new();

        for (row_index, record) in reader.records().enumerate() {
            let record =
                record.map_err(|e| Error::ParserError(format!("Failed to read record: {}", e)))?;

            // Fields are taken verbatim. A row without a code is kept; it can
            // still match by name
            let code = record.get(code_index).unwrap_or("");

            if code.is_empty() {
                warn!("Listing row {} has no code", row_index + 1);
            }

            let name = name_index
                .and_then(|index| record.get(index))
                .filter(|name| !name.is_empty())
                .map(|name| name.to_string());

            candidates.push(Candidate {
                code: code.to_string(),
                name,
            });
        }

        let candidates = dedup_by_code(candidates);

        info!("Loaded {} candidates", candidates.len());

        Ok(candidates)
    }

    pub fn read_candidate_table_from_path<P: AsRef<Path>>(path: P) -> Result<CandidateTable, Error> {
        let csv = fs::read_to_string(path)?;

        Self::read_candidate_table_from_string(&csv)
    }

    /// Decompress and parse a gzip-compressed listing
    pub fn read_candidate_table_from_gzip_bytes(bytes: &[u8]) -> Result<CandidateTable, Error> {
        let mut decoder = GzDecoder::new(bytes);
        let mut decompressed_data = String::new();
        decoder.read_to_string(&mut decompressed_data)?;

        Self::read_candidate_table_from_string(&decompressed_data)
    }

    pub fn read_candidate_table_from_gzip_path<P: AsRef<Path>>(
        path: P,
    ) -> Result<CandidateTable, Error> {
        let bytes = fs::read(path)?;

        Self::read_candidate_table_from_gzip_bytes(&bytes)
    }

    /// Picks the loader for `path` by extension: `.gz` is decompressed first.
    pub fn read_candidate_table<P: AsRef<Path>>(path: P) -> Result<CandidateTable, Error> {
        let path = path.as_ref();

        if path.extension().is_some_and(|extension| extension == "gz") {
            Self::read_candidate_table_from_gzip_path(path)
        } else {
            Self::read_candidate_table_from_path(path)
        }
    }

    /// Returns the (code, name) column indices. The name column is optional.
    fn resolve_columns(headers: &StringRecord) -> Result<(usize, Option<usize>), Error> {
        let position = |wanted: &str| headers.iter().position(|h| h.trim() == wanted);

        for (code_header, name_header) in CANDIDATE_HEADER_ALIASES {
            if let (Some(code_index), Some(name_index)) =
                (position(*code_header), position(*name_header))
            {
                return Ok((code_index, Some(name_index)));
            }
        }

        let code_index = headers
            .iter()
            .position(|h| {
                let lowercase = h.to_lowercase();
                h.contains("代码") || lowercase.contains("symbol") || lowercase.contains("code")
            })
            .ok_or_else(|| {
                Error::ParserError(format!("Missing code column in headers: {:?}", headers))
            })?;

        let name_index = headers
            .iter()
            .position(|h| h.contains("名称") || h.to_lowercase().contains("name"));

        if name_index.is_none() {
            warn!("Listing has no name column; candidates will match by code only");
        }

        Ok((code_index, name_index))
    }
}
