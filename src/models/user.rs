use serde::{Deserialize, Serialize};

/// The active session subject. Created or looked up by username, kept in
/// memory and mirrored to sessionStorage so a reload stays logged in.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct NewUserRequest {
    pub username: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_backend_user() {
        let user: User =
            serde_json::from_str(r#"{"id":1,"username":"alice","created_at":"2024-05-01"}"#)
                .unwrap();
        assert_eq!(user.id, 1);
        assert_eq!(user.username, "alice");
        assert_eq!(user.created_at.as_deref(), Some("2024-05-01"));
    }

    #[test]
    fn created_at_is_optional() {
        let user: User = serde_json::from_str(r#"{"id":2,"username":"bob"}"#).unwrap();
        assert!(user.created_at.is_none());
    }
}
