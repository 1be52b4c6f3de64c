//! Response bodies for the HTTP surface.
//!
//! Request bodies live in [`crate::auth::validate`] next to their rules.

use crate::auth::User;
use serde::Serialize;

/// Public view of a user. The password hash stays out on purpose.
#[derive(Debug, Serialize)]
pub struct UserBody {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl From<&User> for UserBody {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name.clone(),
            email: user.email.clone(),
        }
    }
}

/// Success envelope shared by registration and login.
#[derive(Debug, Serialize)]
pub struct AuthBody {
    pub status: bool,
    pub user: UserBody,
    pub message: String,
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn user_body_excludes_password_hash() {
        let user = User {
            id: Uuid::new_v4(),
            name: "Ashutosh".to_string(),
            email: "a@x.com".to_string(),
            password_hash: "$2b$12$secret".to_string(),
        };

        let value = serde_json::to_value(UserBody::from(&user)).unwrap();

        assert_eq!(value["name"], "Ashutosh");
        assert_eq!(value["email"], "a@x.com");
        assert!(value.get("password").is_none());
        assert!(value.get("password_hash").is_none());
        assert!(!value.to_string().contains("secret"));
    }
}
