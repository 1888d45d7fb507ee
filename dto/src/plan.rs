use chrono::{DateTime, Utc};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A membership plan on sale. `final_price` is computed by the backend from
/// the price and the discount, the client never recomputes it.
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Clone)]
pub struct Plan {
    id: u32,
    name: String,
    description: Option<String>,
    price: f64,
    discount: f64,
    duration_days: u32,
    final_price: f64,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct PlanToCreate {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub discount: f64,
    pub duration_days: u32,
}

#[derive(Debug, Default, Serialize, Deserialize, PartialEq, Clone)]
pub struct PlanToUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_days: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

#[cfg(any(test, feature = "test"))]
pub mod tests {
    use super::*;

    impl Plan {
        pub fn new_test(id: u32) -> Self {
            Plan {
                id,
                name: "Quarterly".to_string(),
                description: None,
                price: 120.0,
                discount: 10.0,
                duration_days: 90,
                final_price: 108.0,
                is_active: true,
                created_at: DateTime::UNIX_EPOCH,
                updated_at: None,
            }
        }
    }

    pub fn plan_as_json(id: u32) -> String {
        format!(
            r#"{{
                "id": {id},
                "name": "Quarterly",
                "description": null,
                "price": 120.0,
                "discount": 10.0,
                "duration_days": 90,
                "final_price": 108.0,
                "is_active": true,
                "created_at": "1970-01-01T00:00:00Z",
                "updated_at": null
            }}"#
        )
    }

    #[test]
    fn should_deserialize_plan() {
        let plan: Plan = serde_json::from_str(&plan_as_json(2)).unwrap();
        assert_eq!(Plan::new_test(2), plan);
    }
}
