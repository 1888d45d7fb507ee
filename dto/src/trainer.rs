use chrono::{DateTime, Utc};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A trainer profile, always tied to a backend user account.
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Clone)]
pub struct TrainerProfile {
    id: u32,
    user_id: u32,
    user_email: String,
    user_name: String,
    specialization: Option<String>,
    bio: Option<String>,
    experience_years: Option<u8>,
    phone: Option<String>,
    certifications: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
}

/// Creates the user account and the trainer profile in one backend call.
#[derive(Serialize, Deserialize, PartialEq, Clone)]
pub struct TrainerToCreate {
    pub email: String,
    pub name: String,
    pub password: String,
    pub specialization: Option<String>,
    pub bio: Option<String>,
    pub experience_years: Option<u8>,
    pub phone: Option<String>,
    pub certifications: Option<String>,
}

impl std::fmt::Debug for TrainerToCreate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "TrainerToCreate {{name={}, email={}, password=MASKED}}",
            self.name, self.email
        )
    }
}

#[derive(Debug, Default, Serialize, Deserialize, PartialEq, Clone)]
pub struct TrainerToUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialization: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience_years: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certifications: Option<String>,
}

#[cfg(any(test, feature = "test"))]
pub mod tests {
    use super::*;

    impl TrainerProfile {
        pub fn new_test(id: u32) -> Self {
            TrainerProfile {
                id,
                user_id: id + 100,
                user_email: "coach@gym.example".to_string(),
                user_name: "Coach Carter".to_string(),
                specialization: Some("strength".to_string()),
                bio: None,
                experience_years: Some(8),
                phone: None,
                certifications: None,
                created_at: DateTime::UNIX_EPOCH,
                updated_at: None,
            }
        }
    }

    pub fn trainer_as_json(id: u32) -> String {
        format!(
            r#"{{
                "id": {id},
                "user_id": {},
                "user_email": "coach@gym.example",
                "user_name": "Coach Carter",
                "specialization": "strength",
                "bio": null,
                "experience_years": 8,
                "phone": null,
                "certifications": null,
                "created_at": "1970-01-01T00:00:00Z",
                "updated_at": null
            }}"#,
            id + 100
        )
    }

    #[test]
    fn should_deserialize_trainer() {
        let trainer: TrainerProfile = serde_json::from_str(&trainer_as_json(3)).unwrap();
        assert_eq!(TrainerProfile::new_test(3), trainer);
    }
}
