use thiserror::Error;

#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("Country directory returned HTTP {0}")]
    Status(u16),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Unexpected response body: {0}")]
    Decode(String),

    #[error("Invalid directory URL: {0}")]
    InvalidUrl(String),
}

impl DirectoryError {
    pub fn user_message(&self) -> &'static str {
        match self {
            DirectoryError::Status(_) => "Failed to fetch countries.",
            DirectoryError::Network(_) => "Network error. Check your connection.",
            DirectoryError::Decode(_) => "The country directory sent an unreadable response.",
            DirectoryError::InvalidUrl(_) => "The country directory URL is misconfigured.",
        }
    }
}

pub type DirectoryResult<T> = Result<T, DirectoryError>;
