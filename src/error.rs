pub type AppResult<T> = Result<T, AppError>;

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("I/O error: {context}")]
    Io {
        #[source]
        source: std::io::Error,
        context: String,
    },
    #[error("catalog fetch failed for {collection}: {message}")]
    Catalog {
        collection: &'static str,
        message: String,
    },
    #[error("analysis unavailable for {key}: {message}")]
    Analysis { key: String, message: String },
    #[error("share failed: {0}")]
    Share(String),
    #[error("{operation} timed out after {after_ms}ms")]
    Timeout { operation: String, after_ms: u64 },
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("unsupported: {0}")]
    Unsupported(String),
}

impl From<std::io::Error> for AppError {
    fn from(source: std::io::Error) -> Self {
        Self::Io {
            source,
            context: "I/O operation failed".to_string(),
        }
    }
}

impl AppError {
    pub fn io_with_context(source: std::io::Error, context: impl Into<String>) -> Self {
        Self::Io {
            source,
            context: context.into(),
        }
    }

    pub fn catalog(collection: &'static str, message: impl Into<String>) -> Self {
        Self::Catalog {
            collection,
            message: message.into(),
        }
    }

    pub fn analysis(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Analysis {
            key: key.into(),
            message: message.into(),
        }
    }

    pub fn share(message: impl Into<String>) -> Self {
        Self::Share(message.into())
    }

    pub fn timeout(operation: impl Into<String>, after_ms: u64) -> Self {
        Self::Timeout {
            operation: operation.into(),
            after_ms,
        }
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    pub fn unsupported(message: impl Into<String>) -> Self {
        Self::Unsupported(message.into())
    }
}
