use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClientError>;

#[derive(Debug, Error)]
pub enum ClientError {
    /// 404 from the server.
    #[error("{0}")]
    NotFound(String),

    /// 400 from the server.
    #[error("{0}")]
    Validation(String),

    #[error("Server returned {status}: {message}")]
    Server { status: u16, message: String },

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),
}
