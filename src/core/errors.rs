use thiserror::Error;

#[derive(Error, Debug)]
pub enum SomoError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Reqwest error: {0}")]
    Reqwest(Box<reqwest::Error>),

    #[error("Backend returned HTTP {status} from {url}")]
    BackendStatus { status: u16, url: String },

    #[error("Speech capture unavailable: {0}")]
    CaptureUnavailable(String),

    #[error("SomoError: {0}")]
    Custom(String),
}

impl From<std::io::Error> for SomoError {
    fn from(error: std::io::Error) -> Self {
        SomoError::Io(Box::new(error))
    }
}

impl From<reqwest::Error> for SomoError {
    fn from(error: reqwest::Error) -> Self {
        SomoError::Reqwest(Box::new(error))
    }
}
