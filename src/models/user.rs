use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row of the `users` table.
///
/// `id` stays `None` until the first save assigns the generated key.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq, FromRow)]
pub struct User {
    pub id: Option<i64>,
    pub name: String,
    pub age: i32,
}

impl User {
    /// A transient user, not yet persisted.
    pub fn new(name: impl Into<String>, age: i32) -> Self {
        Self {
            id: None,
            name: name.into(),
            age,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_user_is_transient() {
        let user = User::default();
        assert!(user.id.is_none());
        assert_eq!(user.name, "");
        assert_eq!(user.age, 0);
    }

    #[test]
    fn test_serializes_id_as_null_when_transient() {
        let json = serde_json::to_value(User::new("Alice", 30)).unwrap();
        assert_eq!(json, serde_json::json!({ "id": null, "name": "Alice", "age": 30 }));
    }
}
