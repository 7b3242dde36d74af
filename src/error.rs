use elasticsearch::http::transport::BuildError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Elasticsearch error: {0}")]
    Elasticsearch(#[from] elasticsearch::Error),

    #[error("Failed to build Elasticsearch transport: {0}")]
    Transport(#[from] BuildError),

    #[error("Invalid Elasticsearch URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Failed to get IP address of cluster master (status {status_code}): {details}")]
    MasterLookup { status_code: u16, details: String },

    #[error("Unable to create index {index} (status {status_code}): {details}")]
    CreateIndex {
        index: String,
        status_code: u16,
        details: String,
    },

    #[error("Failed to fetch mapping of {index} (status {status_code}): {details}")]
    FetchMapping {
        index: String,
        status_code: u16,
        details: String,
    },

    #[error("Index {0} not found")]
    IndexNotFound(String),

    #[error("Mapping type '{mapping_type}' not found in index {index}")]
    MappingTypeNotFound { index: String, mapping_type: String },

    #[error("Mapping PUT for {index}/{mapping_type} failed (status {status_code}): {details}")]
    PutMapping {
        index: String,
        mapping_type: String,
        status_code: u16,
        details: String,
    },

    #[error("Date error: {0}")]
    Date(String),
}
