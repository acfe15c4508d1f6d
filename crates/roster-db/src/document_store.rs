//! Collection-scoped equality lookups over JSONB documents.
//!
//! All collections share the `documents` table; a document belongs to the
//! collection named in its `collection` column. Lookups match a top-level
//! field of the document body against a JSON string, JSON to JSON, so a
//! numeric or boolean field never equals its textual spelling. The
//! containment clause lets the GIN index narrow candidates; the `->` clause
//! rules out arrays that merely contain the string. Matching is exact: no
//! case folding, no trimming. When several documents match, the one
//! inserted first wins.

use roster_types::DocumentId;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::DbError;

/// A stored document together with its store-assigned identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Store-assigned identifier (`_id`).
    pub id: DocumentId,
    /// The document body as stored.
    pub body: serde_json::Value,
}

/// A row from the `documents` table, as selected by lookups.
#[derive(Debug, Clone, sqlx::FromRow)]
struct DocumentRow {
    document_id: Uuid,
    body: serde_json::Value,
}

impl From<DocumentRow> for Document {
    fn from(row: DocumentRow) -> Self {
        Self {
            id: DocumentId::from(row.document_id),
            body: row.body,
        }
    }
}

/// Read operations on the `documents` table.
pub struct DocumentStore<'a> {
    pool: &'a PgPool,
}

impl<'a> DocumentStore<'a> {
    /// Create a new document store bound to a connection pool.
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Return the first document in `collection` whose top-level string
    /// `field` equals `value`.
    ///
    /// One connection is acquired from the pool for the query and handed
    /// back when it goes out of scope, whether the query succeeded or not.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Unavailable`] if no connection can be acquired, or
    /// [`DbError::Postgres`] if the query fails.
    pub async fn find_one(
        &self,
        collection: &str,
        field: &str,
        value: &str,
    ) -> Result<Option<Document>, DbError> {
        let mut conn = self.pool.acquire().await.map_err(|e| {
            DbError::Unavailable(format!("no document store connection available: {e}"))
        })?;

        let row = sqlx::query_as::<_, DocumentRow>(
            r"SELECT _id AS document_id, body
              FROM documents
              WHERE collection = $1
                AND body @> jsonb_build_object($2::TEXT, $3::TEXT)
                AND body -> $2::TEXT = to_jsonb($3::TEXT)
              ORDER BY seq
              LIMIT 1",
        )
        .bind(collection)
        .bind(field)
        .bind(value)
        .fetch_optional(&mut *conn)
        .await?;

        Ok(row.map(Document::from))
    }
}
