use chrono::{DateTime, NaiveDate, Utc};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Clone)]
pub struct Workout {
    id: u32,
    name: String,
    description: Option<String>,
    date: Option<NaiveDate>,
    duration: Option<u32>,
    calories: Option<u32>,
    notes: Option<String>,
    created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct WorkoutToCreate {
    pub name: String,
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
    pub duration: Option<u32>,
    pub calories: Option<u32>,
    pub notes: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize, PartialEq, Clone)]
pub struct WorkoutToUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[cfg(any(test, feature = "test"))]
pub mod tests {
    use super::*;

    impl Workout {
        pub fn new_test(id: u32) -> Self {
            Workout {
                id,
                name: "Leg day".to_string(),
                description: None,
                date: NaiveDate::from_ymd_opt(2025, 3, 10),
                duration: Some(60),
                calories: Some(450),
                notes: None,
                created_at: DateTime::UNIX_EPOCH,
            }
        }
    }

    pub fn workout_as_json(id: u32) -> String {
        format!(
            r#"{{
                "id": {id},
                "name": "Leg day",
                "description": null,
                "date": "2025-03-10",
                "duration": 60,
                "calories": 450,
                "notes": null,
                "created_at": "1970-01-01T00:00:00Z"
            }}"#
        )
    }

    #[test]
    fn should_deserialize_workout() {
        let workout: Workout = serde_json::from_str(&workout_as_json(4)).unwrap();
        assert_eq!(Workout::new_test(4), workout);
    }
}
