use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::types::ApiVersion;

pub const DATABASE_NAME: &str = "my_redis_db";
pub const DATABASE_MEMORY_MB: u64 = 100;

/// Request body for creating a database.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatabaseSpec {
    pub name: String,
    pub memory_size: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modules: Option<Vec<String>>,
}

impl DatabaseSpec {
    /// The fixed database this tool provisions. The legacy API takes the
    /// size in megabytes and expects a modules list; v1 takes bytes.
    pub fn default_for(version: ApiVersion) -> Self {
        match version {
            ApiVersion::Legacy => Self {
                name: DATABASE_NAME.into(),
                memory_size: DATABASE_MEMORY_MB,
                modules: Some(Vec::new()),
            },
            ApiVersion::V1 => Self {
                name: DATABASE_NAME.into(),
                memory_size: DATABASE_MEMORY_MB * 1024 * 1024,
                modules: None,
            },
        }
    }
}

/// Server-assigned database identifier, kept as the string or number the
/// server sent so JSON output echoes it unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DatabaseId(Value);

impl DatabaseId {
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(_) | Value::Number(_) => Some(Self(value.clone())),
            _ => None,
        }
    }
}

impl fmt::Display for DatabaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Value::String(s) => f.write_str(s),
            other => write!(f, "{other}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    DbViewer,
    DbMember,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DbViewer => "db_viewer",
            Self::DbMember => "db_member",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request body for creating a user.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewUser {
    pub email: String,
    pub name: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl NewUser {
    fn new(email: &str, name: &str, role: Role) -> Self {
        Self {
            email: email.into(),
            name: name.into(),
            role,
            password: None,
        }
    }

    fn with_password(mut self, password: &str) -> Self {
        self.password = Some(password.into());
        self
    }
}

/// The three users created by `CUSR`, in submission order.
pub fn seed_users(version: ApiVersion) -> Vec<NewUser> {
    let users = [
        ("john.doe@example.com", "John Doe", Role::DbViewer, "J0hnD0e!pass"),
        ("mike.smith@example.com", "Mike Smith", Role::DbMember, "M1keSm1th!pass"),
        ("cary.johnson@example.com", "Cary Johnson", Role::Admin, "C4ryJ0hnson!pass"),
    ];

    users
        .into_iter()
        .map(|(email, name, role, password)| {
            let user = NewUser::new(email, name, role);
            match version {
                ApiVersion::Legacy => user,
                ApiVersion::V1 => user.with_password(password),
            }
        })
        .collect()
}

/// A user as returned by the list endpoint. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub role: String,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn legacy_database_body() {
        let body = serde_json::to_value(DatabaseSpec::default_for(ApiVersion::Legacy)).unwrap();
        assert_eq!(
            body,
            json!({"name": "my_redis_db", "memory_size": 100, "modules": []})
        );
    }

    #[test]
    fn v1_database_body_has_bytes_and_no_modules() {
        let body = serde_json::to_value(DatabaseSpec::default_for(ApiVersion::V1)).unwrap();
        assert_eq!(body, json!({"name": "my_redis_db", "memory_size": 104857600}));
    }

    #[test]
    fn seed_users_order_and_roles() {
        let users = seed_users(ApiVersion::Legacy);
        let names: Vec<_> = users.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, ["John Doe", "Mike Smith", "Cary Johnson"]);
        assert_eq!(users[0].role, Role::DbViewer);
        assert_eq!(users[2].role, Role::Admin);
        assert!(users.iter().all(|u| u.password.is_none()));
    }

    #[test]
    fn v1_users_carry_password() {
        let body = serde_json::to_value(&seed_users(ApiVersion::V1)[1]).unwrap();
        assert_eq!(body["role"], "db_member");
        assert!(body["password"].is_string());
    }

    #[test]
    fn legacy_user_body_omits_password() {
        let body = serde_json::to_value(&seed_users(ApiVersion::Legacy)[0]).unwrap();
        assert_eq!(
            body,
            json!({"email": "john.doe@example.com", "name": "John Doe", "role": "db_viewer"})
        );
    }

    #[test]
    fn database_id_accepts_strings_and_numbers() {
        assert_eq!(DatabaseId::from_value(&json!("abc-1")).unwrap().to_string(), "abc-1");
        assert_eq!(DatabaseId::from_value(&json!(12)).unwrap().to_string(), "12");
        assert!(DatabaseId::from_value(&json!(null)).is_none());
    }

    #[test]
    fn database_id_serializes_as_received() {
        let numeric = DatabaseId::from_value(&json!(7)).unwrap();
        assert_eq!(serde_json::to_value(&numeric).unwrap(), json!(7));
        let text = DatabaseId::from_value(&json!("db-7")).unwrap();
        assert_eq!(serde_json::to_value(&text).unwrap(), json!("db-7"));
    }

    #[test]
    fn user_ignores_extra_fields() {
        let user: User = serde_json::from_value(json!({
            "uid": 3, "name": "Ann", "role": "admin", "email": "ann@example.com", "status": "active"
        }))
        .unwrap();
        assert_eq!(user.name, "Ann");
        assert_eq!(user.role, "admin");
    }
}
