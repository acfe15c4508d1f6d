//! User lookups.
//!
//! [`UserStore`] is the seam between the HTTP layer and storage. The
//! service runs against [`PgUserStore`]; tests substitute their own
//! implementation to script found / not-found / failure outcomes.

use async_trait::async_trait;
use roster_types::{USERNAME_FIELD, USERS_COLLECTION, User};

use crate::document_store::DocumentStore;
use crate::error::DbError;
use crate::postgres::StorePool;

/// Read access to user records.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Find the user whose `username` equals `username` exactly.
    ///
    /// Returns `Ok(None)` when no record matches. If several records share
    /// the username, the first one stored is returned.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the store cannot be reached or returns a
    /// document that is not a valid [`User`].
    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>, DbError>;
}

/// [`UserStore`] backed by the `PostgreSQL` document store.
#[derive(Debug, Clone)]
pub struct PgUserStore {
    pool: StorePool,
    collection: String,
}

impl PgUserStore {
    /// Look users up in the `users` collection of `pool`'s database.
    pub fn new(pool: StorePool) -> Self {
        Self {
            pool,
            collection: USERS_COLLECTION.to_owned(),
        }
    }

    /// Read from a different collection.
    #[must_use]
    pub fn with_collection(mut self, collection: &str) -> Self {
        collection.clone_into(&mut self.collection);
        self
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>, DbError> {
        let documents = DocumentStore::new(self.pool.pool());
        let Some(document) = documents
            .find_one(&self.collection, USERNAME_FIELD, username)
            .await?
        else {
            tracing::debug!(username, collection = %self.collection, "No matching user");
            return Ok(None);
        };

        let user = serde_json::from_value::<User>(document.body).map_err(|e| {
            DbError::Malformed {
                collection: self.collection.clone(),
                document_id: document.id,
                reason: e.to_string(),
            }
        })?;

        tracing::debug!(
            username,
            document_id = %document.id,
            "User found"
        );
        Ok(Some(user))
    }
}
