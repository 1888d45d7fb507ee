use chrono::{DateTime, Utc};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A lead or question left through one of the public forms
/// (free trial, join request, contact page).
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Clone)]
pub struct CustomerQuery {
    id: u32,
    name: String,
    mobile: String,
    email: Option<String>,
    message: Option<String>,
    status: String,
    created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct QueryToCreate {
    pub name: String,
    pub mobile: String,
    pub email: Option<String>,
    pub message: Option<String>,
}

/// Workflow states the reception staff moves a query through.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryStatus {
    Open,
    InProgress,
    Closed,
}

impl QueryStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            QueryStatus::Open => "open",
            QueryStatus::InProgress => "in_progress",
            QueryStatus::Closed => "closed",
        }
    }
}

#[derive(Debug, Eq, PartialEq)]
pub struct UnknownQueryStatus(pub String);

impl std::fmt::Display for UnknownQueryStatus {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "unknown query status: {}", self.0)
    }
}

impl std::str::FromStr for QueryStatus {
    type Err = UnknownQueryStatus;

    fn from_str(status: &str) -> Result<Self, Self::Err> {
        match status.trim().to_lowercase().as_str() {
            "open" => Ok(QueryStatus::Open),
            "in_progress" => Ok(QueryStatus::InProgress),
            "closed" => Ok(QueryStatus::Closed),
            _ => Err(UnknownQueryStatus(status.to_string())),
        }
    }
}

#[cfg(any(test, feature = "test"))]
pub mod tests {
    use super::*;

    impl CustomerQuery {
        pub fn new_test(id: u32) -> Self {
            CustomerQuery {
                id,
                name: "Walk In".to_string(),
                mobile: "0612345678".to_string(),
                email: None,
                message: Some("Interested in a free trial".to_string()),
                status: "open".to_string(),
                created_at: DateTime::UNIX_EPOCH,
            }
        }
    }

    pub fn query_as_json(id: u32) -> String {
        format!(
            r#"{{
                "id": {id},
                "name": "Walk In",
                "mobile": "0612345678",
                "email": null,
                "message": "Interested in a free trial",
                "status": "open",
                "created_at": "1970-01-01T00:00:00Z"
            }}"#
        )
    }

    #[test]
    fn should_deserialize_query() {
        let query: CustomerQuery = serde_json::from_str(&query_as_json(9)).unwrap();
        assert_eq!(CustomerQuery::new_test(9), query);
    }

    #[test]
    fn should_parse_query_status() {
        assert_eq!(Ok(QueryStatus::InProgress), "In_Progress ".parse());
        assert_eq!(
            Err(UnknownQueryStatus("resolved".to_string())),
            "resolved".parse::<QueryStatus>()
        );
    }
}
