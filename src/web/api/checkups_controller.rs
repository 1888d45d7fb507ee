use crate::gym;
use crate::gym::config::GymApiConfig;
use crate::tools::log_error_and_return;
use crate::tools::web::build_client;
use crate::web::api::map_gym_error;
use crate::web::session::Session;
use dto::member::Member;
use rocket::State;
use rocket::http::Status;
use rocket::serde::json::Json;

#[get("/fitness-checkups/due")]
pub async fn list_due_checkups(
    gym_api_config: &State<GymApiConfig>,
    session: Session,
) -> Result<Json<Vec<Member>>, Status> {
    let client = build_client().map_err(log_error_and_return(Status::InternalServerError))?;
    gym::checkups::list_due_checkups(&client, gym_api_config.host(), session.token())
        .await
        .map(Json)
        .map_err(map_gym_error)
}

#[post("/fitness-checkups/<member_id>/mark-done")]
pub async fn mark_checkup_done(
    gym_api_config: &State<GymApiConfig>,
    session: Session,
    member_id: u32,
) -> Result<Json<Member>, Status> {
    let client = build_client().map_err(log_error_and_return(Status::InternalServerError))?;
    gym::checkups::mark_checkup_done(&client, gym_api_config.host(), session.token(), member_id)
        .await
        .map(Json)
        .map_err(map_gym_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web::authentication::SESSION_COOKIE;
    use crate::web::session::SessionStorage;
    use dto::member::tests::member_as_json;
    use dto::user::User;
    use rocket::http::Cookie;
    use rocket::local::asynchronous::Client;
    use std::sync::Mutex;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const SESSION_ID: &str = "1d31c7da-64bc-49b8-a9ad-04a1eabf9a02";

    fn rocket_with_session(host: String) -> rocket::Rocket<rocket::Build> {
        let mut session_storage = SessionStorage::default();
        session_storage.store(
            SESSION_ID.to_owned(),
            Session::new("jwt-token".to_owned(), User::new_test("admin")),
        );
        rocket::build()
            .manage(GymApiConfig::new(host))
            .manage(Mutex::new(session_storage))
            .mount("/", routes![list_due_checkups, mark_checkup_done])
    }

    #[async_test]
    async fn should_mark_checkup_done() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/fitness-checkups/3/mark-done"))
            .respond_with(ResponseTemplate::new(200).set_body_string(member_as_json(3)))
            .mount(&mock_server)
            .await;

        let client = Client::tracked(rocket_with_session(mock_server.uri()))
            .await
            .unwrap();
        let response = client
            .post("/fitness-checkups/3/mark-done")
            .cookie(Cookie::new(SESSION_COOKIE, SESSION_ID))
            .dispatch()
            .await;

        assert_eq!(Status::Ok, response.status());
        let member: Member = response.into_json().await.unwrap();
        assert_eq!(3, *member.id());
    }
}
