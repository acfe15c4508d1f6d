//! Type-safe identifier wrapper around [`Uuid`].
//!
//! Every document in the store carries a store-assigned `_id`. It is an
//! implementation detail of the storage layer and never part of a
//! [`User`](crate::User) record.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Store-assigned identifier of a document (UUID v7, time-ordered).
///
/// Identifiers are minted by whoever writes documents; the lookup path only
/// reads them back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DocumentId(pub Uuid);

impl DocumentId {
    /// Return the inner [`Uuid`] value.
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl core::fmt::Display for DocumentId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for DocumentId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_uuid_keeps_value() {
        let raw = Uuid::now_v7();
        assert_eq!(DocumentId::from(raw).into_inner(), raw);
    }

    #[test]
    fn display_matches_uuid() {
        let id = DocumentId::from(Uuid::now_v7());
        assert_eq!(id.to_string(), id.into_inner().to_string());
    }
}
