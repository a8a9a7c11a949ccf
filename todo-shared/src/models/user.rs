use serde::{Deserialize, Serialize};

/// The authenticated user's profile as returned by `GET /users/me`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserRecord {
    /// The user's email address.
    pub email: String,

    /// The user's given name.
    pub first_name: String,

    /// The user's family name.
    pub last_name: String,
}

impl UserRecord {
    /// Greeting shown next to the logout control.
    #[must_use]
    pub fn welcome_text(&self) -> String {
        format!("Welcome, {}!", self.first_name)
    }
}

/// Request body for `POST /auth/`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterRequest {
    /// The new account's email address.
    pub email: String,

    /// The user's given name.
    pub first_name: String,

    /// The user's family name.
    pub last_name: String,

    /// The chosen password.
    pub password: String,
}

/// Request body for `PUT /users/change-password`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChangePasswordRequest {
    /// The password currently on the account.
    pub current_password: String,

    /// The replacement password.
    pub new_password: String,

    /// Repetition of the replacement password.
    pub new_password_confirm: String,
}

/// Form fields posted to `POST /auth/token` (OAuth2 password grant).
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TokenRequest {
    /// The account email, sent under the OAuth2 `username` field.
    pub username: String,

    /// The account password.
    pub password: String,

    /// Always `password`.
    pub grant_type: &'static str,
}

impl TokenRequest {
    /// Builds a password-grant token request.
    pub fn password_grant(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            grant_type: "password",
        }
    }
}

/// Response body of `POST /auth/token`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenResponse {
    /// The bearer credential for subsequent requests.
    pub access_token: String,

    /// Token scheme, normally `bearer`.
    #[serde(default)]
    pub token_type: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_record_ignores_unknown_fields() {
        let json = r#"{"id":"5b0b8c9e-5f1e-4a4e-9a43-3b1b6f6f2a10","email":"ada@example.com","first_name":"Ada","last_name":"Lovelace"}"#;
        let user: UserRecord = serde_json::from_str(json).unwrap();

        assert_eq!(user.first_name, "Ada");
        assert_eq!(user.welcome_text(), "Welcome, Ada!");
    }

    #[test]
    fn test_user_record_missing_field_fails() {
        let json = r#"{"email":"ada@example.com","first_name":"Ada"}"#;
        assert!(serde_json::from_str::<UserRecord>(json).is_err());
    }

    #[test]
    fn test_register_request_serialization() {
        let request = RegisterRequest {
            email: "ada@example.com".into(),
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            password: "Engine#1843".into(),
        };
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["email"], "ada@example.com");
        assert_eq!(value["first_name"], "Ada");
        assert_eq!(value["last_name"], "Lovelace");
        assert_eq!(value["password"], "Engine#1843");
    }

    #[test]
    fn test_change_password_request_field_names() {
        let request = ChangePasswordRequest {
            current_password: "Old#Pass1".into(),
            new_password: "New#Pass1".into(),
            new_password_confirm: "New#Pass1".into(),
        };
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["current_password"], "Old#Pass1");
        assert_eq!(value["new_password"], "New#Pass1");
        assert_eq!(value["new_password_confirm"], "New#Pass1");
    }

    #[test]
    fn test_token_request_is_password_grant() {
        let request = TokenRequest::password_grant("ada@example.com", "secret");
        assert_eq!(request.grant_type, "password");
        assert_eq!(request.username, "ada@example.com");
    }

    #[test]
    fn test_token_response_without_type() {
        let token: TokenResponse = serde_json::from_str(r#"{"access_token":"abc"}"#).unwrap();
        assert_eq!(token.access_token, "abc");
        assert_eq!(token.token_type, None);
    }
}
