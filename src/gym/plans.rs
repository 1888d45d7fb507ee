use crate::gym::error::GymApiError;
use crate::gym::error::GymApiError::BackendUnreachable;
use crate::gym::{read_json, read_no_content};
use crate::tools::log_message_and_return;
use dto::plan::{Plan, PlanToCreate, PlanToUpdate};
use reqwest::Client;

pub async fn list_plans(
    client: &Client,
    host: &str,
    token: &str,
) -> Result<Vec<Plan>, GymApiError> {
    let url = format!("{host}/plans");
    let response = client
        .get(url)
        .bearer_auth(token)
        .send()
        .await
        .map_err(log_message_and_return(
            "Can't reach gym backend to list plans.",
            BackendUnreachable,
        ))?;

    read_json(response).await
}

pub async fn get_plan(
    client: &Client,
    host: &str,
    token: &str,
    id: u32,
) -> Result<Plan, GymApiError> {
    let url = format!("{host}/plans/{id}");
    let response = client
        .get(url)
        .bearer_auth(token)
        .send()
        .await
        .map_err(log_message_and_return(
            "Can't reach gym backend to get a plan.",
            BackendUnreachable,
        ))?;

    read_json(response).await
}

pub async fn create_plan(
    client: &Client,
    host: &str,
    token: &str,
    plan: &PlanToCreate,
) -> Result<Plan, GymApiError> {
    let url = format!("{host}/plans");
    let response = client
        .post(url)
        .bearer_auth(token)
        .json(plan)
        .send()
        .await
        .map_err(log_message_and_return(
            "Can't reach gym backend to create a plan.",
            BackendUnreachable,
        ))?;

    read_json(response).await
}

pub async fn update_plan(
    client: &Client,
    host: &str,
    token: &str,
    id: u32,
    plan: &PlanToUpdate,
) -> Result<Plan, GymApiError> {
    let url = format!("{host}/plans/{id}");
    let response = client
        .put(url)
        .bearer_auth(token)
        .json(plan)
        .send()
        .await
        .map_err(log_message_and_return(
            "Can't reach gym backend to update a plan.",
            BackendUnreachable,
        ))?;

    read_json(response).await
}

pub async fn delete_plan(
    client: &Client,
    host: &str,
    token: &str,
    id: u32,
) -> Result<(), GymApiError> {
    let url = format!("{host}/plans/{id}");
    let response = client
        .delete(url)
        .bearer_auth(token)
        .send()
        .await
        .map_err(log_message_and_return(
            "Can't reach gym backend to delete a plan.",
            BackendUnreachable,
        ))?;

    read_no_content(response).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gym::error::GymApiError::Rejected;
    use crate::tools::web::build_client;
    use dto::plan::tests::plan_as_json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const TOKEN: &str = "jwt-token";

    #[async_test]
    async fn should_list_plans() {
        let mock_server = MockServer::start().await;
        let client = build_client().unwrap();
        let body = format!("[{}, {}]", plan_as_json(1), plan_as_json(2));
        Mock::given(method("GET"))
            .and(path("/plans"))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .mount(&mock_server)
            .await;

        let plans = list_plans(&client, &mock_server.uri(), TOKEN).await.unwrap();
        assert_eq!(2, plans.len());
        assert_eq!(108.0, *plans[0].final_price());
    }

    #[async_test]
    async fn should_fail_to_create_invalid_plan() {
        let mock_server = MockServer::start().await;
        let client = build_client().unwrap();
        Mock::given(method("POST"))
            .and(path("/plans"))
            .respond_with(
                ResponseTemplate::new(422)
                    .set_body_string(r#"{"detail": "duration_days must be positive"}"#),
            )
            .mount(&mock_server)
            .await;

        let plan_to_create = PlanToCreate {
            name: "Quarterly".to_owned(),
            description: None,
            price: 120.0,
            discount: 10.0,
            duration_days: 0,
        };
        let error = create_plan(&client, &mock_server.uri(), TOKEN, &plan_to_create)
            .await
            .unwrap_err();
        assert_eq!(Rejected("duration_days must be positive".to_owned()), error);
    }

    #[async_test]
    async fn should_deactivate_plan_through_update() {
        let mock_server = MockServer::start().await;
        let client = build_client().unwrap();
        Mock::given(method("PUT"))
            .and(path("/plans/2"))
            .respond_with(ResponseTemplate::new(200).set_body_string(plan_as_json(2)))
            .mount(&mock_server)
            .await;

        let plan_to_update = PlanToUpdate {
            is_active: Some(false),
            ..PlanToUpdate::default()
        };
        let plan = update_plan(&client, &mock_server.uri(), TOKEN, 2, &plan_to_update)
            .await
            .unwrap();
        assert_eq!(2, *plan.id());
    }
}
