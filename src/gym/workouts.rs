use crate::gym::error::GymApiError;
use crate::gym::error::GymApiError::BackendUnreachable;
use crate::gym::{read_json, read_no_content};
use crate::tools::log_message_and_return;
use dto::workout::{Workout, WorkoutToCreate, WorkoutToUpdate};
use reqwest::Client;

pub async fn list_workouts(
    client: &Client,
    host: &str,
    token: &str,
) -> Result<Vec<Workout>, GymApiError> {
    let url = format!("{host}/workouts");
    let response = client
        .get(url)
        .bearer_auth(token)
        .send()
        .await
        .map_err(log_message_and_return(
            "Can't reach gym backend to list workouts.",
            BackendUnreachable,
        ))?;

    read_json(response).await
}

pub async fn get_workout(
    client: &Client,
    host: &str,
    token: &str,
    id: u32,
) -> Result<Workout, GymApiError> {
    let url = format!("{host}/workouts/{id}");
    let response = client
        .get(url)
        .bearer_auth(token)
        .send()
        .await
        .map_err(log_message_and_return(
            "Can't reach gym backend to get a workout.",
            BackendUnreachable,
        ))?;

    read_json(response).await
}

pub async fn create_workout(
    client: &Client,
    host: &str,
    token: &str,
    workout: &WorkoutToCreate,
) -> Result<Workout, GymApiError> {
    let url = format!("{host}/workouts");
    let response = client
        .post(url)
        .bearer_auth(token)
        .json(workout)
        .send()
        .await
        .map_err(log_message_and_return(
            "Can't reach gym backend to create a workout.",
            BackendUnreachable,
        ))?;

    read_json(response).await
}

pub async fn update_workout(
    client: &Client,
    host: &str,
    token: &str,
    id: u32,
    workout: &WorkoutToUpdate,
) -> Result<Workout, GymApiError> {
    let url = format!("{host}/workouts/{id}");
    let response = client
        .put(url)
        .bearer_auth(token)
        .json(workout)
        .send()
        .await
        .map_err(log_message_and_return(
            "Can't reach gym backend to update a workout.",
            BackendUnreachable,
        ))?;

    read_json(response).await
}

pub async fn delete_workout(
    client: &Client,
    host: &str,
    token: &str,
    id: u32,
) -> Result<(), GymApiError> {
    let url = format!("{host}/workouts/{id}");
    let response = client
        .delete(url)
        .bearer_auth(token)
        .send()
        .await
        .map_err(log_message_and_return(
            "Can't reach gym backend to delete a workout.",
            BackendUnreachable,
        ))?;

    read_no_content(response).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gym::error::GymApiError::NotFound;
    use crate::tools::web::build_client;
    use dto::workout::tests::workout_as_json;
    use wiremock::matchers::{body_string_contains, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const TOKEN: &str = "jwt-token";

    #[async_test]
    async fn should_list_workouts() {
        let mock_server = MockServer::start().await;
        let client = build_client().unwrap();
        let body = format!("[{}]", workout_as_json(4));
        Mock::given(method("GET"))
            .and(path("/workouts"))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .mount(&mock_server)
            .await;

        let workouts = list_workouts(&client, &mock_server.uri(), TOKEN)
            .await
            .unwrap();
        assert_eq!(vec![Workout::new_test(4)], workouts);
    }

    #[async_test]
    async fn should_create_workout() {
        let mock_server = MockServer::start().await;
        let client = build_client().unwrap();
        Mock::given(method("POST"))
            .and(path("/workouts"))
            .and(body_string_contains("Leg day"))
            .respond_with(ResponseTemplate::new(201).set_body_string(workout_as_json(4)))
            .mount(&mock_server)
            .await;

        let workout_to_create = WorkoutToCreate {
            name: "Leg day".to_owned(),
            description: None,
            date: None,
            duration: Some(60),
            calories: None,
            notes: None,
        };
        let workout = create_workout(&client, &mock_server.uri(), TOKEN, &workout_to_create)
            .await
            .unwrap();
        assert_eq!(4, *workout.id());
    }

    #[async_test]
    async fn should_fail_to_get_unknown_workout() {
        let mock_server = MockServer::start().await;
        let client = build_client().unwrap();
        Mock::given(method("GET"))
            .and(path("/workouts/404"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let error = get_workout(&client, &mock_server.uri(), TOKEN, 404)
            .await
            .unwrap_err();
        assert_eq!(NotFound, error);
    }
}
