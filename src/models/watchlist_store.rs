use crate::constants::WATCHLIST_HEADERS;
use crate::types::WatchlistItems;
use crate::utils::{code_suffix, ensure_csv_file, read_csv_rows, write_csv_rows};
use crate::Error;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// One row of the watchlist file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchlistItem {
    pub code: String,
    pub name: String,
    pub color: String,
    pub remark: String,
    pub sort: String,
}

/// Result of a reorder: the number of items and their new `sort` values in list order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WatchlistOrder {
    pub total: usize,

    #[serde(rename = "newSort")]
    pub new_sort: Vec<String>,
}

/// Fields supplied when adding or updating an item. Blank fields leave the
/// stored value untouched.
#[derive(Debug, Clone, Default)]
pub struct WatchlistUpdate {
    pub name: Option<String>,
    pub color: Option<String>,
    pub remark: Option<String>,
}

impl WatchlistUpdate {
    fn apply_to(&self, item: &mut WatchlistItem) {
        let non_blank = |value: &Option<String>| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .map(|value| value.to_string())
        };

        if let Some(name) = non_blank(&self.name) {
            item.name = name;
        }
        if let Some(color) = non_blank(&self.color) {
            item.color = color;
        }
        if let Some(remark) = non_blank(&self.remark) {
            item.remark = remark;
        }
    }
}

/// The user's watchlist, persisted as a single CSV file.
///
/// Every mutation reads the whole file, edits the rows in memory and rewrites
/// the whole file. There is no locking; concurrent writers race and the last
/// one wins.
pub struct WatchlistStore {
    path: PathBuf,
}

impl WatchlistStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        WatchlistStore {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates the file with just the header row if it does not exist yet.
    pub fn init(&self) -> Result<(), Error> {
        if !self.path.exists() {
            info!("Creating watchlist file {:?}", self.path);
        }

        ensure_csv_file(&self.path, &WATCHLIST_HEADERS)
    }

    pub fn list(&self) -> Result<WatchlistItems, Error> {
        self.init()?;
        self.read_items()
    }

    /// Looks up an item by its full code, ignoring case and surrounding whitespace.
    pub fn get(&self, code: &str) -> Result<WatchlistItem, Error> {
        let target = code.trim().to_uppercase();

        if target.is_empty() {
            return Err(Error::InvalidInput("code must not be empty".to_string()));
        }

        self.list()?
            .into_iter()
            .find(|item| item.code.trim().to_uppercase() == target)
            .ok_or_else(|| Error::NotFound(format!("no watchlist item with code {}", target)))
    }

    pub fn contains(&self, code: &str) -> Result<bool, Error> {
        let suffix = code_suffix(code);

        Ok(self
            .list()?
            .iter()
            .any(|item| code_suffix(&item.code) == suffix))
    }

    /// Applies the non-blank fields of `update` to every item matching `code`
    /// by suffix and returns the first of them. Without a match, a new item is
    /// appended at the end of the list.
    pub fn upsert(&self, code: &str, update: &WatchlistUpdate) -> Result<WatchlistItem, Error> {
        let code = code.trim().to_uppercase();

        if code.is_empty() {
            return Err(Error::InvalidInput("code must not be empty".to_string()));
        }

        let suffix = code_suffix(&code);
        let mut items = self.list()?;
        let mut first_match: Option<WatchlistItem> = None;

        for existing in items
            .iter_mut()
            .filter(|item| code_suffix(&item.code) == suffix)
        {
            update.apply_to(existing);
            debug!("Updated watchlist item {}", existing.code);
            first_match.get_or_insert_with(|| existing.clone());
        }

        let item = match first_match {
            Some(existing) => existing,
            None => {
                let mut new_item = WatchlistItem {
                    code,
                    sort: (items.len() + 1).to_string(),
                    ..WatchlistItem::default()
                };
                update.apply_to(&mut new_item);
                debug!("Appended watchlist item {}", new_item.code);
                items.push(new_item.clone());
                new_item
            }
        };

        self.write_items(&items)?;

        Ok(item)
    }

    /// Moves the items named in `codes` to the front, in that order, and
    /// renumbers `sort` from 1. Items not named keep their relative order
    /// after them.
    pub fn reorder(&self, codes: &[String]) -> Result<WatchlistOrder, Error> {
        if codes.is_empty() {
            return Err(Error::InvalidInput(
                "a non-empty list of codes is required".to_string(),
            ));
        }

        let mut remaining = self.list()?;
        let mut ordered = WatchlistItems::with_capacity(remaining.len());

        for code in codes {
            let suffix = code_suffix(code);

            if let Some(index) = remaining
                .iter()
                .position(|item| code_suffix(&item.code) == suffix)
            {
                ordered.push(remaining.remove(index));
            }
        }

        ordered.extend(remaining);

        for (index, item) in ordered.iter_mut().enumerate() {
            item.sort = (index + 1).to_string();
        }

        self.write_items(&ordered)?;

        Ok(WatchlistOrder {
            total: ordered.len(),
            new_sort: ordered.into_iter().map(|item| item.sort).collect(),
        })
    }

    /// Removes every item whose code matches by suffix.
    pub fn remove(&self, code: &str) -> Result<(), Error> {
        let suffix = code_suffix(code);
        let items = self.list()?;
        let total = items.len();

        let kept: WatchlistItems = items
            .into_iter()
            .filter(|item| code_suffix(&item.code) != suffix)
            .collect();

        if kept.len() == total {
            return Err(Error::NotFound(format!(
                "no watchlist item with code {}",
                code.trim().to_uppercase()
            )));
        }

        self.write_items(&kept)
    }

    fn read_items(&self) -> Result<WatchlistItems, Error> {
        read_csv_rows(&self.path)
    }

    fn write_items(&self, items: &[WatchlistItem]) -> Result<(), Error> {
        write_csv_rows(&self.path, &WATCHLIST_HEADERS, items)
    }
}
