use crate::gym;
use crate::gym::config::GymApiConfig;
use crate::tools::log_error_and_return;
use crate::tools::web::build_client;
use crate::web::api::map_gym_error;
use crate::web::session::Session;
use dto::trainer::{TrainerProfile, TrainerToCreate, TrainerToUpdate};
use rocket::State;
use rocket::http::Status;
use rocket::serde::json::Json;

#[get("/trainers")]
pub async fn list_trainers(
    gym_api_config: &State<GymApiConfig>,
    session: Session,
) -> Result<Json<Vec<TrainerProfile>>, Status> {
    let client = build_client().map_err(log_error_and_return(Status::InternalServerError))?;
    gym::trainers::list_trainers(&client, gym_api_config.host(), session.token())
        .await
        .map(Json)
        .map_err(map_gym_error)
}

#[get("/trainers/<id>")]
pub async fn get_trainer(
    gym_api_config: &State<GymApiConfig>,
    session: Session,
    id: u32,
) -> Result<Json<TrainerProfile>, Status> {
    let client = build_client().map_err(log_error_and_return(Status::InternalServerError))?;
    gym::trainers::get_trainer(&client, gym_api_config.host(), session.token(), id)
        .await
        .map(Json)
        .map_err(map_gym_error)
}

#[post("/trainers", format = "application/json", data = "<trainer>")]
pub async fn create_trainer(
    gym_api_config: &State<GymApiConfig>,
    session: Session,
    trainer: Json<TrainerToCreate>,
) -> Result<Json<TrainerProfile>, Status> {
    let client = build_client().map_err(log_error_and_return(Status::InternalServerError))?;
    gym::trainers::create_trainer(
        &client,
        gym_api_config.host(),
        session.token(),
        &trainer.into_inner(),
    )
    .await
    .map(Json)
    .map_err(map_gym_error)
}

#[put("/trainers/<id>", format = "application/json", data = "<trainer>")]
pub async fn update_trainer(
    gym_api_config: &State<GymApiConfig>,
    session: Session,
    id: u32,
    trainer: Json<TrainerToUpdate>,
) -> Result<Json<TrainerProfile>, Status> {
    let client = build_client().map_err(log_error_and_return(Status::InternalServerError))?;
    gym::trainers::update_trainer(
        &client,
        gym_api_config.host(),
        session.token(),
        id,
        &trainer.into_inner(),
    )
    .await
    .map(Json)
    .map_err(map_gym_error)
}

#[delete("/trainers/<id>")]
pub async fn delete_trainer(
    gym_api_config: &State<GymApiConfig>,
    session: Session,
    id: u32,
) -> Result<Status, Status> {
    let client = build_client().map_err(log_error_and_return(Status::InternalServerError))?;
    gym::trainers::delete_trainer(&client, gym_api_config.host(), session.token(), id)
        .await
        .map(|_| Status::NoContent)
        .map_err(map_gym_error)
}
