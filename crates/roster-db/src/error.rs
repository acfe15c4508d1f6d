//! Error types for the data layer.
//!
//! All errors are propagated via [`DbError`]. A lookup that matches nothing
//! is not an error; it is `Ok(None)`.

use roster_types::DocumentId;

/// Errors that can occur in the data layer.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// A `PostgreSQL` operation failed (connect, acquire, or query).
    #[error("PostgreSQL error: {0}")]
    Postgres(#[from] sqlx::Error),

    /// A `PostgreSQL` migration failed.
    #[error("PostgreSQL migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// A stored document does not have the shape of the requested record.
    #[error("malformed document {document_id} in collection '{collection}': {reason}")]
    Malformed {
        /// Collection the document was read from.
        collection: String,
        /// Store-assigned identifier of the offending document.
        document_id: DocumentId,
        /// Why deserialization failed.
        reason: String,
    },

    /// A configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// No connection to the store could be obtained.
    ///
    /// The message is surfaced verbatim.
    #[error("{0}")]
    Unavailable(String),
}
