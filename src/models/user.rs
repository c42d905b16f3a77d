use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Account role assigned by the platform.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Company,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Company => "company",
            Role::Admin => "admin",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The authenticated visitor, as reported by `GET /api/auth/me`.
///
/// Always derived from the server via the current token, never persisted:
/// it exists only in memory for the lifetime of the process.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct User {
    #[serde(alias = "_id")]
    pub id: String,
    pub username: String,
    pub email: String,
    pub role: Role,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    pub fn is_company(&self) -> bool {
        self.role == Role::Company
    }
}

/// A row in the admin user listing.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AdminUser {
    #[serde(alias = "_id")]
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    pub role: Role,
    #[serde(default, rename = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_platform_user_payload() {
        let user: User = serde_json::from_str(
            r#"{"_id":"u1","username":"ada","email":"ada@example.com","role":"company"}"#,
        )
        .unwrap();
        assert_eq!(user.id, "u1");
        assert_eq!(user.role, Role::Company);
        assert!(user.is_company());
        assert!(!user.is_admin());
    }

    #[test]
    fn role_round_trips_as_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), r#""admin""#);
        let role: Role = serde_json::from_str(r#""user""#).unwrap();
        assert_eq!(role, Role::User);
    }
}
