use crate::gym::error::GymApiError;
use crate::gym::error::GymApiError::BackendUnreachable;
use crate::gym::{read_json, read_no_content};
use crate::tools::log_message_and_return;
use dto::trainer::{TrainerProfile, TrainerToCreate, TrainerToUpdate};
use reqwest::Client;

pub async fn list_trainers(
    client: &Client,
    host: &str,
    token: &str,
) -> Result<Vec<TrainerProfile>, GymApiError> {
    let url = format!("{host}/trainers");
    let response = client
        .get(url)
        .bearer_auth(token)
        .send()
        .await
        .map_err(log_message_and_return(
            "Can't reach gym backend to list trainers.",
            BackendUnreachable,
        ))?;

    read_json(response).await
}

pub async fn get_trainer(
    client: &Client,
    host: &str,
    token: &str,
    id: u32,
) -> Result<TrainerProfile, GymApiError> {
    let url = format!("{host}/trainers/{id}");
    let response = client
        .get(url)
        .bearer_auth(token)
        .send()
        .await
        .map_err(log_message_and_return(
            "Can't reach gym backend to get a trainer.",
            BackendUnreachable,
        ))?;

    read_json(response).await
}

/// Creates the backing user account along with the profile.
pub async fn create_trainer(
    client: &Client,
    host: &str,
    token: &str,
    trainer: &TrainerToCreate,
) -> Result<TrainerProfile, GymApiError> {
    let url = format!("{host}/trainers");
    let response = client
        .post(url)
        .bearer_auth(token)
        .json(trainer)
        .send()
        .await
        .map_err(log_message_and_return(
            "Can't reach gym backend to create a trainer.",
            BackendUnreachable,
        ))?;

    read_json(response).await
}

pub async fn update_trainer(
    client: &Client,
    host: &str,
    token: &str,
    id: u32,
    trainer: &TrainerToUpdate,
) -> Result<TrainerProfile, GymApiError> {
    let url = format!("{host}/trainers/{id}");
    let response = client
        .put(url)
        .bearer_auth(token)
        .json(trainer)
        .send()
        .await
        .map_err(log_message_and_return(
            "Can't reach gym backend to update a trainer.",
            BackendUnreachable,
        ))?;

    read_json(response).await
}

pub async fn delete_trainer(
    client: &Client,
    host: &str,
    token: &str,
    id: u32,
) -> Result<(), GymApiError> {
    let url = format!("{host}/trainers/{id}");
    let response = client
        .delete(url)
        .bearer_auth(token)
        .send()
        .await
        .map_err(log_message_and_return(
            "Can't reach gym backend to delete a trainer.",
            BackendUnreachable,
        ))?;

    read_no_content(response).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gym::error::GymApiError::LackOfPermissions;
    use crate::tools::web::build_client;
    use dto::trainer::tests::trainer_as_json;
    use wiremock::matchers::{body_string_contains, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const TOKEN: &str = "jwt-token";

    #[async_test]
    async fn should_list_trainers() {
        let mock_server = MockServer::start().await;
        let client = build_client().unwrap();
        let body = format!("[{}]", trainer_as_json(3));
        Mock::given(method("GET"))
            .and(path("/trainers"))
            .and(header("Authorization", format!("Bearer {TOKEN}")))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .mount(&mock_server)
            .await;

        let trainers = list_trainers(&client, &mock_server.uri(), TOKEN)
            .await
            .unwrap();
        assert_eq!(vec![TrainerProfile::new_test(3)], trainers);
    }

    #[async_test]
    async fn should_create_trainer() {
        let mock_server = MockServer::start().await;
        let client = build_client().unwrap();
        Mock::given(method("POST"))
            .and(path("/trainers"))
            .and(body_string_contains("coach@gym.example"))
            .respond_with(ResponseTemplate::new(201).set_body_string(trainer_as_json(3)))
            .mount(&mock_server)
            .await;

        let trainer_to_create = TrainerToCreate {
            email: "coach@gym.example".to_owned(),
            name: "Coach Carter".to_owned(),
            password: "secret".to_owned(),
            specialization: Some("strength".to_owned()),
            bio: None,
            experience_years: Some(8),
            phone: None,
            certifications: None,
        };
        let trainer = create_trainer(&client, &mock_server.uri(), TOKEN, &trainer_to_create)
            .await
            .unwrap();
        assert_eq!(3, *trainer.id());
    }

    #[async_test]
    async fn should_fail_to_delete_trainer_without_permission() {
        let mock_server = MockServer::start().await;
        let client = build_client().unwrap();
        Mock::given(method("DELETE"))
            .and(path("/trainers/3"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&mock_server)
            .await;

        let error = delete_trainer(&client, &mock_server.uri(), TOKEN, 3)
            .await
            .unwrap_err();
        assert_eq!(LackOfPermissions, error);
    }
}
