use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Formatter};

#[derive(Serialize, Deserialize, Getters, PartialEq, Clone)]
pub struct LoginRequest {
    email: String,
    password: String,
}

impl LoginRequest {
    pub fn new(email: String, password: String) -> Self {
        Self { email, password }
    }
}

impl Debug for LoginRequest {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "LoginRequest {{email={}, password=MASKED}}", self.email)
    }
}

#[derive(Serialize, Deserialize, Getters, PartialEq, Clone)]
pub struct RegistrationRequest {
    name: String,
    email: String,
    password: String,
}

impl RegistrationRequest {
    pub fn new(name: String, email: String, password: String) -> Self {
        Self {
            name,
            email,
            password,
        }
    }
}

impl Debug for RegistrationRequest {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "RegistrationRequest {{name={}, email={}, password=MASKED}}",
            self.name, self.email
        )
    }
}

/// Bearer token handed out by the backend on a successful login.
/// It never reaches the browser: the web layer stores it server-side
/// behind a private session cookie.
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Clone)]
pub struct TokenResponse {
    access_token: String,
    token_type: String,
}

#[cfg(any(test, feature = "test"))]
pub mod tests {
    use super::*;

    impl TokenResponse {
        pub fn new_test(access_token: &str) -> Self {
            TokenResponse {
                access_token: access_token.to_string(),
                token_type: "bearer".to_string(),
            }
        }
    }

    #[test]
    fn should_mask_password_in_debug_output() {
        let request = LoginRequest::new("jane@gym.example".to_string(), "hunter2".to_string());
        let debug = format!("{request:?}");
        assert!(debug.contains("jane@gym.example"));
        assert!(!debug.contains("hunter2"));
    }
}
