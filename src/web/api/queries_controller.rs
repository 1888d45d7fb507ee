use crate::gym;
use crate::gym::config::GymApiConfig;
use crate::tools::log_error_and_return;
use crate::tools::web::build_client;
use crate::web::api::map_gym_error;
use crate::web::session::Session;
use dto::customer_query::{CustomerQuery, QueryStatus, QueryToCreate};
use rocket::State;
use rocket::http::Status;
use rocket::serde::json::Json;

#[get("/queries")]
pub async fn list_queries(
    gym_api_config: &State<GymApiConfig>,
    session: Session,
) -> Result<Json<Vec<CustomerQuery>>, Status> {
    let client = build_client().map_err(log_error_and_return(Status::InternalServerError))?;
    gym::queries::list_queries(&client, gym_api_config.host(), session.token())
        .await
        .map(Json)
        .map_err(map_gym_error)
}

/// Open to anyone: this is where the public trial, join and contact
/// forms land, so no session guards it.
#[post("/queries", format = "application/json", data = "<query>")]
pub async fn submit_query(
    gym_api_config: &State<GymApiConfig>,
    query: Json<QueryToCreate>,
) -> Result<Json<CustomerQuery>, Status> {
    let client = build_client().map_err(log_error_and_return(Status::InternalServerError))?;
    gym::queries::create_query(&client, gym_api_config.host(), &query.into_inner())
        .await
        .map(Json)
        .map_err(map_gym_error)
}

/// The backend acknowledges without returning the record,
/// so the page re-fetches the list afterwards.
#[patch("/queries/<id>/status?<status>")]
pub async fn update_query_status(
    gym_api_config: &State<GymApiConfig>,
    session: Session,
    id: u32,
    status: &str,
) -> Result<Status, Status> {
    let status = status
        .parse::<QueryStatus>()
        .map_err(log_error_and_return(Status::UnprocessableEntity))?;
    let client = build_client().map_err(log_error_and_return(Status::InternalServerError))?;
    gym::queries::update_query_status(&client, gym_api_config.host(), session.token(), id, status)
        .await
        .map(|_| Status::NoContent)
        .map_err(map_gym_error)
}

#[delete("/queries/<id>")]
pub async fn delete_query(
    gym_api_config: &State<GymApiConfig>,
    session: Session,
    id: u32,
) -> Result<Status, Status> {
    let client = build_client().map_err(log_error_and_return(Status::InternalServerError))?;
    gym::queries::delete_query(&client, gym_api_config.host(), session.token(), id)
        .await
        .map(|_| Status::NoContent)
        .map_err(map_gym_error)
}
