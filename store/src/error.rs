use crate::models::ValidationError;

/// Outcome errors of collection operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No record with the requested identifier exists.
    #[error("patient {0} not found")]
    NotFound(u32),

    /// A record with this identifier already exists.
    #[error("patient {0} already exists")]
    AlreadyExists(u32),

    /// The record, or the merged result of a patch, violates the schema.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The backing dataset file could not be read or written.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Failure while reading or writing the dataset file.
///
/// These are not recovered anywhere; they surface to the caller as a
/// server-side failure.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("failed to read patient dataset")]
    Read(#[source] std::io::Error),

    #[error("patient dataset is not valid JSON")]
    Parse(#[source] serde_json::Error),

    #[error("failed to encode patient dataset")]
    Encode(#[source] serde_json::Error),

    #[error("failed to write patient dataset")]
    Write(#[source] std::io::Error),
}
