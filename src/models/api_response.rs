use crate::Error;
use serde::Serialize;

/// Success/failure envelope handed to whatever transport answers the request.
///
/// `status` is the HTTP-status-equivalent code; it is not part of the JSON body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,

    #[serde(skip)]
    pub status: u16,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        ApiResponse {
            success: true,
            status: 200,
            data: Some(data),
            count: None,
            message: None,
        }
    }

    pub fn failure(status: u16, message: impl Into<String>) -> Self {
        ApiResponse {
            success: false,
            status,
            data: None,
            count: None,
            message: Some(message.into()),
        }
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn is_success(&self) -> bool {
        self.success
    }
}

impl<T: Serialize> ApiResponse<T> {
    pub fn to_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string(self)?)
    }
}

impl<T> From<Error> for ApiResponse<T> {
    fn from(err: Error) -> Self {
        ApiResponse::failure(err.status_code(), err.to_string())
    }
}

impl<T> From<Result<T, Error>> for ApiResponse<T> {
    fn from(result: Result<T, Error>) -> Self {
        match result {
            Ok(data) => ApiResponse::ok(data),
            Err(err) => err.into(),
        }
    }
}
