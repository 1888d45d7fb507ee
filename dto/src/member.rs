use chrono::{DateTime, NaiveDate, Utc};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A gym member as returned by the backend.
/// Membership status and checkup urgency are never part of the record:
/// they are derived from the date fields at render time.
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Clone)]
pub struct Member {
    id: u32,
    name: String,
    phone: String,
    age: Option<u8>,
    gender: Option<String>,
    address: Option<String>,
    membership_type: Option<String>,
    membership_start: Option<NaiveDate>,
    membership_end: Option<NaiveDate>,
    last_fitness_checkup_date: Option<NaiveDate>,
    next_fitness_checkup_date: Option<NaiveDate>,
    image_url: Option<String>,
    created_at: DateTime<Utc>,
}

impl Member {
    pub fn membership_end_date(&self) -> Option<NaiveDate> {
        self.membership_end
    }

    pub fn next_checkup_date(&self) -> Option<NaiveDate> {
        self.next_fitness_checkup_date
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct MemberToCreate {
    pub name: String,
    pub phone: String,
    pub age: Option<u8>,
    pub gender: Option<String>,
    pub address: Option<String>,
    pub membership_type: Option<String>,
    pub membership_start: Option<NaiveDate>,
    pub membership_end: Option<NaiveDate>,
}

/// All fields optional so patching works.
#[derive(Debug, Default, Serialize, Deserialize, PartialEq, Clone)]
pub struct MemberToUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub membership_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub membership_start: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub membership_end: Option<NaiveDate>,
}

#[cfg(any(test, feature = "test"))]
pub mod tests {
    use super::*;
    use chrono::Months;

    impl Member {
        pub fn new_test(id: u32, membership_end: Option<NaiveDate>) -> Self {
            Member {
                id,
                name: "Jon Doe".to_string(),
                phone: "+33 6 12 34 56 78".to_string(),
                age: Some(30),
                gender: None,
                address: None,
                membership_type: Some("standard".to_string()),
                membership_start: membership_end
                    .map(|date| date.checked_sub_months(Months::new(12)).unwrap()),
                membership_end,
                last_fitness_checkup_date: None,
                next_fitness_checkup_date: None,
                image_url: None,
                created_at: DateTime::UNIX_EPOCH,
            }
        }

        pub fn with_next_checkup(mut self, next_checkup_date: Option<NaiveDate>) -> Self {
            self.next_fitness_checkup_date = next_checkup_date;
            self
        }
    }

    pub fn member_as_json(id: u32) -> String {
        format!(
            r#"{{
                "id": {id},
                "name": "Jon Doe",
                "phone": "+33 6 12 34 56 78",
                "age": 30,
                "gender": null,
                "address": null,
                "membership_type": "standard",
                "membership_start": "2024-03-10",
                "membership_end": "2025-03-10",
                "last_fitness_checkup_date": null,
                "next_fitness_checkup_date": "2025-03-12",
                "image_url": null,
                "created_at": "2024-03-10T08:00:00Z"
            }}"#
        )
    }

    #[test]
    fn should_deserialize_member_with_derived_date_accessors() {
        let member: Member = serde_json::from_str(&member_as_json(7)).unwrap();
        assert_eq!(7, *member.id());
        assert_eq!(
            NaiveDate::from_ymd_opt(2025, 3, 10),
            member.membership_end_date()
        );
        assert_eq!(
            NaiveDate::from_ymd_opt(2025, 3, 12),
            member.next_checkup_date()
        );
    }
}
