use crate::gym::error::GymApiError;
use crate::gym::error::GymApiError::{BackendUnreachable, WrongCredentials};
use crate::gym::read_json;
use crate::tools::log_message_and_return;
use dto::auth::{LoginRequest, RegistrationRequest, TokenResponse};
use dto::user::User;
use reqwest::{Client, StatusCode};

/// Exchange credentials for a bearer token.
/// A 401 here means the credentials are wrong, not that a token has expired.
pub async fn login(
    client: &Client,
    host: &str,
    credentials: &LoginRequest,
) -> Result<TokenResponse, GymApiError> {
    let url = format!("{host}/auth/login");
    let response = client
        .post(url)
        .json(credentials)
        .send()
        .await
        .map_err(log_message_and_return(
            "Can't reach gym backend to log in.",
            BackendUnreachable,
        ))?;

    if response.status() == StatusCode::UNAUTHORIZED {
        debug!("Gym backend rejected the credentials [email: {}]", credentials.email());
        return Err(WrongCredentials);
    }
    read_json(response).await
}

/// Create an account. The backend leaves it pending until an admin approves
/// it, so no token comes back from here.
pub async fn register(
    client: &Client,
    host: &str,
    registration: &RegistrationRequest,
) -> Result<User, GymApiError> {
    let url = format!("{host}/auth/register");
    let response = client
        .post(url)
        .json(registration)
        .send()
        .await
        .map_err(log_message_and_return(
            "Can't reach gym backend to register.",
            BackendUnreachable,
        ))?;

    read_json(response).await
}

/// Revalidate a bearer token and fetch the identity it belongs to.
/// A [GymApiError::TokenRejected] answer means the session behind the token is dead.
pub async fn current_user(client: &Client, host: &str, token: &str) -> Result<User, GymApiError> {
    let url = format!("{host}/auth/me");
    let response = client
        .get(url)
        .bearer_auth(token)
        .send()
        .await
        .map_err(log_message_and_return(
            "Can't reach gym backend to revalidate the session.",
            BackendUnreachable,
        ))?;

    read_json(response).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gym::error::GymApiError::TokenRejected;
    use crate::tools::web::build_client;
    use dto::user::tests::user_as_json;
    use wiremock::matchers::{body_string_contains, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const TOKEN: &str = "jwt-token";

    fn credentials() -> LoginRequest {
        LoginRequest::new("jane@gym.example".to_owned(), "hunter2".to_owned())
    }

    #[async_test]
    async fn should_login() {
        let mock_server = MockServer::start().await;
        let client = build_client().unwrap();
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .and(body_string_contains("jane@gym.example"))
            .respond_with(ResponseTemplate::new(200).set_body_string(format!(
                r#"{{"access_token": "{TOKEN}", "token_type": "bearer"}}"#
            )))
            .mount(&mock_server)
            .await;

        let token = login(&client, &mock_server.uri(), &credentials())
            .await
            .unwrap();
        assert_eq!(TokenResponse::new_test(TOKEN), token);
    }

    #[async_test]
    async fn should_fail_to_login_when_wrong_credentials() {
        let mock_server = MockServer::start().await;
        let client = build_client().unwrap();
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&mock_server)
            .await;

        let error = login(&client, &mock_server.uri(), &credentials())
            .await
            .unwrap_err();
        assert_eq!(WrongCredentials, error);
    }

    #[async_test]
    async fn should_fail_to_login_when_backend_down() {
        let mock_server = MockServer::start().await;
        let client = build_client().unwrap();
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let error = login(&client, &mock_server.uri(), &credentials())
            .await
            .unwrap_err();
        assert_eq!(BackendUnreachable, error);
    }

    #[async_test]
    async fn should_register() {
        let mock_server = MockServer::start().await;
        let client = build_client().unwrap();
        Mock::given(method("POST"))
            .and(path("/auth/register"))
            .respond_with(ResponseTemplate::new(201).set_body_string(user_as_json("member")))
            .mount(&mock_server)
            .await;

        let registration = RegistrationRequest::new(
            "Jane Admin".to_owned(),
            "jane@gym.example".to_owned(),
            "hunter2".to_owned(),
        );
        let user = register(&client, &mock_server.uri(), &registration)
            .await
            .unwrap();
        assert_eq!("member", user.role());
    }

    #[async_test]
    async fn should_fetch_current_user_with_bearer_token() {
        let mock_server = MockServer::start().await;
        let client = build_client().unwrap();
        Mock::given(method("GET"))
            .and(path("/auth/me"))
            .and(header("Authorization", format!("Bearer {TOKEN}")))
            .respond_with(ResponseTemplate::new(200).set_body_string(user_as_json("admin")))
            .mount(&mock_server)
            .await;

        let user = current_user(&client, &mock_server.uri(), TOKEN)
            .await
            .unwrap();
        assert_eq!("admin", user.role());
    }

    #[async_test]
    async fn should_report_dead_session() {
        let mock_server = MockServer::start().await;
        let client = build_client().unwrap();
        Mock::given(method("GET"))
            .and(path("/auth/me"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&mock_server)
            .await;

        let error = current_user(&client, &mock_server.uri(), TOKEN)
            .await
            .unwrap_err();
        assert_eq!(TokenRejected, error);
    }
}
