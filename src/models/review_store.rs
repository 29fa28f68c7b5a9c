use crate::constants::{POSITION_REVIEW_FILE_NAME, REVIEW_HEADERS, STOCK_REVIEW_FILE_PREFIX};
use crate::types::Reviews;
use crate::utils::{ensure_csv_file, generate_record_id, read_csv_rows, write_csv_rows};
use crate::Error;
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// One row of a review file. Field order matches the file header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: String,
    pub title: String,
    pub code: String,
    pub date: String,
    pub description: String,
}

/// Fields of a review being added. The id is assigned by the store.
#[derive(Debug, Clone, Default)]
pub struct NewReview {
    pub code: String,
    pub title: String,
    pub date: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewKind {
    /// Stock reviews, one file per lowercase review type.
    Stock(String),
    Position,
}

/// A review list persisted as a single CSV file, rewritten whole on every change.
pub struct ReviewStore {
    kind: ReviewKind,
    path: PathBuf,
}

impl ReviewStore {
    /// Stock reviews of `review_type`, stored in `<dir>/stock_review_<type>.csv`.
    pub fn stock_reviews<P: AsRef<Path>>(dir: P, review_type: &str) -> Result<Self, Error> {
        let review_type = review_type.trim();

        if review_type.is_empty() {
            return Err(Error::InvalidInput(
                "review type must not be empty".to_string(),
            ));
        }

        if review_type.contains(|c: char| c == '/' || c == '\\') || review_type.contains("..") {
            return Err(Error::InvalidInput(format!(
                "invalid review type: {}",
                review_type
            )));
        }

        let file_name = format!(
            "{}{}.csv",
            STOCK_REVIEW_FILE_PREFIX,
            review_type.to_lowercase()
        );

        Ok(ReviewStore {
            kind: ReviewKind::Stock(review_type.to_string()),
            path: dir.as_ref().join(file_name),
        })
    }

    pub fn position_reviews<P: AsRef<Path>>(dir: P) -> Self {
        ReviewStore {
            kind: ReviewKind::Position,
            path: dir.as_ref().join(POSITION_REVIEW_FILE_NAME),
        }
    }

    pub fn kind(&self) -> &ReviewKind {
        &self.kind
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn init(&self) -> Result<(), Error> {
        ensure_csv_file(&self.path, &REVIEW_HEADERS)
    }

    /// All reviews in file order. A non-blank `keyword` keeps only reviews
    /// whose title contains it, ignoring case.
    pub fn list(&self, keyword: Option<&str>) -> Result<Reviews, Error> {
        self.init()?;
        let reviews: Reviews = read_csv_rows(&self.path)?;

        let keyword = keyword
            .map(|keyword| keyword.trim().to_lowercase())
            .filter(|keyword| !keyword.is_empty());

        Ok(match keyword {
            Some(keyword) => reviews
                .into_iter()
                .filter(|review| review.title.trim().to_lowercase().contains(&keyword))
                .collect(),
            None => reviews,
        })
    }

    /// Appends a review with a fresh id. Text fields are trimmed and the code uppercased.
    pub fn add(&self, new_review: &NewReview) -> Result<Review, Error> {
        let mut reviews = self.list(None)?;

        let review = Review {
            id: generate_record_id(),
            title: new_review.title.trim().to_string(),
            code: new_review.code.trim().to_uppercase(),
            date: new_review.date.trim().to_string(),
            description: new_review.description.trim().to_string(),
        };

        debug!("Adding review {} to {:?}", review.id, self.path);
        reviews.push(review.clone());
        write_csv_rows(&self.path, &REVIEW_HEADERS, &reviews)?;

        Ok(review)
    }

    pub fn get(&self, id: &str) -> Result<Review, Error> {
        let id = id.trim();

        self.list(None)?
            .into_iter()
            .find(|review| review.id == id)
            .ok_or_else(|| Error::NotFound(format!("no review with id {}", id)))
    }

    pub fn remove(&self, id: &str) -> Result<(), Error> {
        let id = id.trim();
        let reviews = self.list(None)?;
        let total = reviews.len();

        let kept: Reviews = reviews
            .into_iter()
            .filter(|review| review.id != id)
            .collect();

        if kept.len() == total {
            return Err(Error::NotFound(format!("no review with id {}", id)));
        }

        write_csv_rows(&self.path, &REVIEW_HEADERS, &kept)
    }
}
