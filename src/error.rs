use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Non-200 HTTP status. The body is never inspected.
    #[error("Error status: {status} {reason}")]
    Status { status: u16, reason: String },

    #[error("HTTP error: {0}")]
    Http(#[from] rquest::Error),

    #[error("Invalid format: unexpected content type {0:?}")]
    ContentType(String),

    #[error("Invalid format: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("Invalid format: response has no data")]
    MissingData,

    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// The envelope decoded but the vendor rejected the request.
    #[error("{message}")]
    Api { message: String, status_code: String },

    #[error("{entity} does not support the {action} action")]
    Unsupported {
        entity: &'static str,
        action: &'static str,
    },

    #[error("Decimal error: {0}")]
    Decimal(#[from] rust_decimal::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl Error {
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Status { .. } | Error::Http(_))
    }

    pub fn is_format(&self) -> bool {
        matches!(
            self,
            Error::ContentType(_) | Error::Decode(_) | Error::MissingData
        )
    }

    pub fn is_semantic(&self) -> bool {
        matches!(self, Error::Api { .. })
    }
}
