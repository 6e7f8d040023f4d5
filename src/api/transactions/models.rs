use thiserror::Error;

/// Error type for transactions API operations
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// 400 Bad Request
    #[error("Bad Request: {0}")]
    BadRequest(String),
    /// 401 Unauthorized
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
    /// 404 Not Found
    #[error("Not Found: {0}")]
    NotFound(String),
    /// 5xx Server Error
    #[error("Server Error ({0}): {1}")]
    ServerError(u16, String),
    /// Any other status that is not 200
    #[error("HTTP Error ({0}): {1}")]
    HttpError(u16, String),
    /// The per-request timeout elapsed
    #[error("Request timed out: {0}")]
    Timeout(String),
    /// Network/request error
    #[error("Request Error: {0}")]
    RequestError(String),
    #[error("Serialization Error: {0}")]
    Serialization(String),
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),
}

impl ApiError {
    /// HTTP status carried by the error, if the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::BadRequest(_) => Some(400),
            ApiError::Unauthorized(_) => Some(401),
            ApiError::NotFound(_) => Some(404),
            ApiError::ServerError(code, _) | ApiError::HttpError(code, _) => Some(*code),
            _ => None,
        }
    }

    /// Response body text, if the server answered at all
    pub fn body(&self) -> Option<&str> {
        match self {
            ApiError::BadRequest(body)
            | ApiError::Unauthorized(body)
            | ApiError::NotFound(body)
            | ApiError::ServerError(_, body)
            | ApiError::HttpError(_, body) => Some(body),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ApiError::Timeout(e.to_string())
        } else if e.is_builder() {
            ApiError::ClientBuild(e.to_string())
        } else {
            ApiError::RequestError(e.to_string())
        }
    }
}
