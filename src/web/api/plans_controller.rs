use crate::gym;
use crate::gym::config::GymApiConfig;
use crate::tools::log_error_and_return;
use crate::tools::web::build_client;
use crate::web::api::map_gym_error;
use crate::web::session::Session;
use dto::plan::{Plan, PlanToCreate, PlanToUpdate};
use rocket::State;
use rocket::http::Status;
use rocket::serde::json::Json;

#[get("/plans")]
pub async fn list_plans(
    gym_api_config: &State<GymApiConfig>,
    session: Session,
) -> Result<Json<Vec<Plan>>, Status> {
    let client = build_client().map_err(log_error_and_return(Status::InternalServerError))?;
    gym::plans::list_plans(&client, gym_api_config.host(), session.token())
        .await
        .map(Json)
        .map_err(map_gym_error)
}

#[get("/plans/<id>")]
pub async fn get_plan(
    gym_api_config: &State<GymApiConfig>,
    session: Session,
    id: u32,
) -> Result<Json<Plan>, Status> {
    let client = build_client().map_err(log_error_and_return(Status::InternalServerError))?;
    gym::plans::get_plan(&client, gym_api_config.host(), session.token(), id)
        .await
        .map(Json)
        .map_err(map_gym_error)
}

#[post("/plans", format = "application/json", data = "<plan>")]
pub async fn create_plan(
    gym_api_config: &State<GymApiConfig>,
    session: Session,
    plan: Json<PlanToCreate>,
) -> Result<Json<Plan>, Status> {
    let client = build_client().map_err(log_error_and_return(Status::InternalServerError))?;
    gym::plans::create_plan(
        &client,
        gym_api_config.host(),
        session.token(),
        &plan.into_inner(),
    )
    .await
    .map(Json)
    .map_err(map_gym_error)
}

#[put("/plans/<id>", format = "application/json", data = "<plan>")]
pub async fn update_plan(
    gym_api_config: &State<GymApiConfig>,
    session: Session,
    id: u32,
    plan: Json<PlanToUpdate>,
) -> Result<Json<Plan>, Status> {
    let client = build_client().map_err(log_error_and_return(Status::InternalServerError))?;
    gym::plans::update_plan(
        &client,
        gym_api_config.host(),
        session.token(),
        id,
        &plan.into_inner(),
    )
    .await
    .map(Json)
    .map_err(map_gym_error)
}

#[delete("/plans/<id>")]
pub async fn delete_plan(
    gym_api_config: &State<GymApiConfig>,
    session: Session,
    id: u32,
) -> Result<Status, Status> {
    let client = build_client().map_err(log_error_and_return(Status::InternalServerError))?;
    gym::plans::delete_plan(&client, gym_api_config.host(), session.token(), id)
        .await
        .map(|_| Status::NoContent)
        .map_err(map_gym_error)
}
