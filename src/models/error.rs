use std::fmt;

#[derive(Debug)]
pub enum Error {
    ParserError(String),
    IoError(std::io::Error),
    CsvError(csv::Error),
    NotFound(String),
    InvalidInput(String),
    Other(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ParserError(msg) => write!(f, "Parser Error: {}", msg),
            Error::IoError(err) => write!(f, "IO Error: {}", err),
            Error::CsvError(err) => write!(f, "CSV Error: {}", err),
            Error::NotFound(msg) => write!(f, "Not Found: {}", msg),
            Error::InvalidInput(msg) => write!(f, "Invalid Input: {}", msg),
            Error::Other(msg) => write!(f, "Other Error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::IoError(err) => Some(err),
            Error::CsvError(err) => Some(err),
            _ => None,
        }
    }
}

impl Error {
    /// HTTP-status-equivalent code used when this error is reported in an `ApiResponse`.
    pub fn status_code(&self) -> u16 {
        match self {
            Error::NotFound(_) => 404,
            Error::InvalidInput(_) => 400,
            _ => 500,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::IoError(err)
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Error {
        Error::CsvError(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Error {
        Error::Other(err.to_string())
    }
}
