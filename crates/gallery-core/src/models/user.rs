use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Credential record; not used by any gallery query path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct User {
    pub id: i32,
    pub username: String,
    /// Stored as given; never serialized back out.
    #[serde(skip_serializing)]
    pub password: String,
}

/// Request DTO for creating a user
#[derive(Debug, Clone, Deserialize, ToSchema, Validate)]
pub struct NewUser {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

impl NewUser {
    pub fn into_user(self, id: i32) -> User {
        User {
            id,
            username: self.username,
            password: self.password,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_is_not_serialized() {
        let user = User {
            id: 1,
            username: "curator".to_string(),
            password: "hunter2".to_string(),
        };
        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(value["username"], "curator");
        assert!(value.get("password").is_none());
    }

    #[test]
    fn empty_credentials_fail_validation() {
        let user = NewUser {
            username: String::new(),
            password: "secret".to_string(),
        };
        assert!(user.validate().is_err());
    }
}
