use crate::types::{StockCode, StockName};
use serde::{Deserialize, Serialize};

/// One (code, name) pair eligible for matching.
///
/// Serializes with the `代码` / `名称` keys that existing clients read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    #[serde(rename = "代码")]
    pub code: StockCode,

    /// `None` when the listing row carried no name; such a row can only match by code.
    #[serde(rename = "名称")]
    pub name: Option<StockName>,
}

impl Candidate {
    pub fn new(code: &str, name: &str) -> Self {
        Candidate {
            code: code.to_string(),
            name: Some(name.to_string()),
        }
    }

    pub fn without_name(code: &str) -> Self {
        Candidate {
            code: code.to_string(),
            name: None,
        }
    }
}
