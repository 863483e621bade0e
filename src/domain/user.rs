//! User domain entity and related types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// User account as stored in the `users` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Unique user identifier
    #[serde(default)]
    #[schema(example = 1)]
    pub id: i32,
    /// Display name
    #[schema(example = "Devin Sanders")]
    pub name: String,
    /// Email address (unique, compared case-insensitively)
    #[schema(example = "tristanjacobs@gmail.com")]
    pub email: String,
    /// Stored password hash, never serialized
    #[serde(skip_serializing)]
    pub password: String,
}

impl User {
    /// Case-insensitive email comparison.
    pub fn has_email(&self, email: &str) -> bool {
        self.email.to_lowercase() == email.to_lowercase()
    }
}

/// User creation data transfer object
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct NewUser {
    /// User display name
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Devin Sanders")]
    pub name: String,
    /// User email address
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "tristanjacobs@gmail.com")]
    pub email: String,
    /// User password (minimum 8 characters)
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    #[schema(example = "password", min_length = 8)]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(email: &str) -> User {
        User {
            id: 1,
            name: "Devin Sanders".to_string(),
            email: email.to_string(),
            password: "hash".to_string(),
        }
    }

    #[test]
    fn test_email_match_ignores_case() {
        let user = user("TristanJacobs@Gmail.com");
        assert!(user.has_email("tristanjacobs@gmail.com"));
        assert!(user.has_email("TRISTANJACOBS@GMAIL.COM"));
        assert!(!user.has_email("tristan@gmail.com"));
    }

    #[test]
    fn test_password_not_serialized() {
        let json = serde_json::to_value(user("a@b.com")).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["email"], "a@b.com");
    }

    #[test]
    fn test_new_user_validation() {
        let valid = NewUser {
            name: "Ann".to_string(),
            email: "ann@example.com".to_string(),
            password: "longenough".to_string(),
        };
        assert!(valid.validate().is_ok());

        let invalid = NewUser {
            name: String::new(),
            email: "not-an-email".to_string(),
            password: "short".to_string(),
        };
        let errors = invalid.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("password"));
    }
}
