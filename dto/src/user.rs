use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// The authenticated identity as reported by the backend.
/// The role stays a plain string at the boundary: an unknown role must not
/// fail deserialization, it simply grants nothing (fail-closed gating).
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Clone)]
pub struct User {
    id: u32,
    name: String,
    email: String,
    role: String,
    status: String,
}

#[cfg(any(test, feature = "test"))]
pub mod tests {
    use super::*;

    impl User {
        pub fn new_test(role: &str) -> Self {
            User {
                id: 1,
                name: "Jane Admin".to_string(),
                email: "jane@gym.example".to_string(),
                role: role.to_string(),
                status: "active".to_string(),
            }
        }
    }

    pub fn user_as_json(role: &str) -> String {
        format!(
            r#"{{"id": 1, "name": "Jane Admin", "email": "jane@gym.example", "role": "{role}", "status": "active"}}"#
        )
    }

    #[test]
    fn should_deserialize_user_with_unknown_role() {
        let user: User = serde_json::from_str(&user_as_json("janitor")).unwrap();
        assert_eq!("janitor", user.role());
    }
}
