//! The `User` record.
//!
//! Users are stored as schema-less documents in the `users` collection.
//! Only the three fields below are part of the record; anything else a
//! document carries (notably the store-assigned `_id`) is dropped on
//! deserialization.

use serde::{Deserialize, Serialize};

/// Name of the collection that holds user documents.
pub const USERS_COLLECTION: &str = "users";

/// Name of the field users are looked up by.
pub const USERNAME_FIELD: &str = "username";

/// A user record as served by `GET /users/{username}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Numeric identifier assigned by whoever created the record.
    pub id: i64,
    /// Lookup key. Matched exactly (case-sensitive, untrimmed).
    pub username: String,
    /// Contact address.
    pub email: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn storage_identifier_is_ignored() {
        let doc = serde_json::json!({
            "_id": "0191d3a0-0000-7000-8000-000000000000",
            "id": 123,
            "username": "abc",
            "email": "abc@abc.com",
        });
        let user: User = serde_json::from_value(doc).unwrap();
        assert_eq!(
            user,
            User {
                id: 123,
                username: String::from("abc"),
                email: String::from("abc@abc.com"),
            }
        );
    }

    #[test]
    fn serializes_exactly_three_fields() {
        let user = User {
            id: 124,
            username: String::from("def"),
            email: String::from("def@def.com"),
        };
        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"id": 124, "username": "def", "email": "def@def.com"})
        );
    }

    #[test]
    fn missing_field_is_rejected() {
        let doc = serde_json::json!({"id": 1, "username": "abc"});
        assert!(serde_json::from_value::<User>(doc).is_err());
    }
}
