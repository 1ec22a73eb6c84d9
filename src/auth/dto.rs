use std::collections::BTreeMap;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

/// Request body for signup. `confirmPassword` is persisted verbatim alongside
/// the password; the store mirrors exactly what the client sent.
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(rename = "confirmPassword")]
    pub confirm_password: String,
}

impl SignupRequest {
    /// Field-level schema validation, producing a field → message map.
    pub fn validate(&self) -> BTreeMap<String, String> {
        let mut errors = BTreeMap::new();
        if self.username.trim().is_empty() {
            errors.insert("username".into(), "Username is required.".into());
        }
        if self.email.trim().is_empty() {
            errors.insert("email".into(), "Email is required.".into());
        } else if !is_valid_email(&self.email) {
            errors.insert("email".into(), "Invalid email address.".into());
        }
        if self.password.is_empty() {
            errors.insert("password".into(), "Password is required.".into());
        }
        if self.confirm_password.is_empty() {
            errors.insert(
                "confirmPassword".into(),
                "Confirm password is required.".into(),
            );
        }
        errors
    }
}

/// Request body for login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Response returned after a successful login. `userId`/`userName` are only
/// present for regular users, never for special principals.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    #[serde(rename = "userType")]
    pub user_type: String,
    #[serde(rename = "userId", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Uuid>,
    #[serde(rename = "userName", skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(username: &str, email: &str, password: &str, confirm: &str) -> SignupRequest {
        SignupRequest {
            username: username.into(),
            email: email.into(),
            password: password.into(),
            confirm_password: confirm.into(),
        }
    }

    #[test]
    fn valid_signup_has_no_field_errors() {
        let errors = request("alice", "alice@example.com", "pw1", "pw1").validate();
        assert!(errors.is_empty());
    }

    #[test]
    fn missing_fields_are_each_reported() {
        let errors = request("", "", "", "").validate();
        assert_eq!(errors.len(), 4);
        assert_eq!(errors["username"], "Username is required.");
        assert_eq!(errors["email"], "Email is required.");
        assert_eq!(errors["password"], "Password is required.");
        assert_eq!(errors["confirmPassword"], "Confirm password is required.");
    }

    #[test]
    fn malformed_email_is_rejected() {
        let errors = request("alice", "not-an-email", "pw1", "pw1").validate();
        assert_eq!(errors["email"], "Invalid email address.");
    }

    #[test]
    fn login_response_omits_identity_for_special_principals() {
        let response = LoginResponse {
            user_type: "admin".into(),
            user_id: None,
            user_name: None,
        };
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"userType":"admin"}"#);
    }

    #[test]
    fn login_response_includes_identity_for_regular_users() {
        let id = Uuid::new_v4();
        let response = LoginResponse {
            user_type: "user".into(),
            user_id: Some(id),
            user_name: Some("alice".into()),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("userId"));
        assert!(json.contains("\"userName\":\"alice\""));
    }
}
