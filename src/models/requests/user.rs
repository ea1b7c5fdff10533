//! User-related request models.

use serde::Deserialize;

use crate::models::User;

/// Urlencoded body of the create and update forms.
///
/// Missing fields fall back to their defaults; nothing is validated.
#[derive(Debug, Deserialize, Default, Clone)]
#[serde(default)]
pub struct UserForm {
    pub name: String,
    pub age: i32,
}

impl From<UserForm> for User {
    fn from(form: UserForm) -> Self {
        User::new(form.name, form.age)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_becomes_transient_user() {
        let user: User = UserForm {
            name: "Alice".to_string(),
            age: 30,
        }
        .into();
        assert_eq!(user, User::new("Alice", 30));
        assert!(user.id.is_none());
    }

    #[test]
    fn test_missing_fields_default() {
        let form: UserForm = serde_json::from_str(r#"{"name":"Bob"}"#).unwrap();
        assert_eq!(form.name, "Bob");
        assert_eq!(form.age, 0);
    }
}
