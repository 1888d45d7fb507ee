use crate::gym;
use crate::gym::config::GymApiConfig;
use crate::tools::log_error_and_return;
use crate::tools::web::build_client;
use crate::web::api::map_gym_error;
use crate::web::session::Session;
use dto::member::{Member, MemberToCreate, MemberToUpdate};
use rocket::State;
use rocket::http::Status;
use rocket::serde::json::Json;

#[get("/members")]
pub async fn list_members(
    gym_api_config: &State<GymApiConfig>,
    session: Session,
) -> Result<Json<Vec<Member>>, Status> {
    let client = build_client().map_err(log_error_and_return(Status::InternalServerError))?;
    gym::members::list_members(&client, gym_api_config.host(), session.token())
        .await
        .map(Json)
        .map_err(map_gym_error)
}

#[get("/members/<id>")]
pub async fn get_member(
    gym_api_config: &State<GymApiConfig>,
    session: Session,
    id: u32,
) -> Result<Json<Member>, Status> {
    let client = build_client().map_err(log_error_and_return(Status::InternalServerError))?;
    gym::members::get_member(&client, gym_api_config.host(), session.token(), id)
        .await
        .map(Json)
        .map_err(map_gym_error)
}

#[post("/members", format = "application/json", data = "<member>")]
pub async fn create_member(
    gym_api_config: &State<GymApiConfig>,
    session: Session,
    member: Json<MemberToCreate>,
) -> Result<Json<Member>, Status> {
    let client = build_client().map_err(log_error_and_return(Status::InternalServerError))?;
    gym::members::create_member(
        &client,
        gym_api_config.host(),
        session.token(),
        &member.into_inner(),
    )
    .await
    .map(Json)
    .map_err(map_gym_error)
}

#[put("/members/<id>", format = "application/json", data = "<member>")]
pub async fn update_member(
    gym_api_config: &State<GymApiConfig>,
    session: Session,
    id: u32,
    member: Json<MemberToUpdate>,
) -> Result<Json<Member>, Status> {
    let client = build_client().map_err(log_error_and_return(Status::InternalServerError))?;
    gym::members::update_member(
        &client,
        gym_api_config.host(),
        session.token(),
        id,
        &member.into_inner(),
    )
    .await
    .map(Json)
    .map_err(map_gym_error)
}

#[delete("/members/<id>")]
pub async fn delete_member(
    gym_api_config: &State<GymApiConfig>,
    session: Session,
    id: u32,
) -> Result<Status, Status> {
    let client = build_client().map_err(log_error_and_return(Status::InternalServerError))?;
    gym::members::delete_member(&client, gym_api_config.host(), session.token(), id)
        .await
        .map(|_| Status::NoContent)
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
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const SESSION_ID: &str = "7f9c24e8-3b12-40d3-941b-46062e2f3c9a";

    fn rocket_with_session(host: String) -> rocket::Rocket<rocket::Build> {
        let mut session_storage = SessionStorage::default();
        session_storage.store(
            SESSION_ID.to_owned(),
            Session::new("jwt-token".to_owned(), User::new_test("admin")),
        );
        rocket::build()
            .manage(GymApiConfig::new(host))
            .manage(Mutex::new(session_storage))
            .mount("/", routes![list_members, get_member, delete_member])
    }

    #[async_test]
    async fn should_list_members() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/members"))
            .and(header("Authorization", "Bearer jwt-token"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(format!("[{}, {}]", member_as_json(1), member_as_json(2))),
            )
            .mount(&mock_server)
            .await;

        let client = Client::tracked(rocket_with_session(mock_server.uri()))
            .await
            .unwrap();
        let response = client
            .get("/members")
            .cookie(Cookie::new(SESSION_COOKIE, SESSION_ID))
            .dispatch()
            .await;

        assert_eq!(Status::Ok, response.status());
        let members: Vec<Member> = response.into_json().await.unwrap();
        assert_eq!(2, members.len());
    }

    #[async_test]
    async fn should_reject_unauthenticated_caller() {
        let mock_server = MockServer::start().await;
        let client = Client::tracked(rocket_with_session(mock_server.uri()))
            .await
            .unwrap();

        let response = client.get("/members").dispatch().await;
        assert_eq!(Status::Unauthorized, response.status());
    }

    #[async_test]
    async fn should_fail_to_delete_unknown_member() {
        let mock_server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/members/42"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let client = Client::tracked(rocket_with_session(mock_server.uri()))
            .await
            .unwrap();
        let response = client
            .delete("/members/42")
            .cookie(Cookie::new(SESSION_COOKIE, SESSION_ID))
            .dispatch()
            .await;

        assert_eq!(Status::NotFound, response.status());
    }
}
