use crate::gym;
use crate::gym::config::GymApiConfig;
use crate::tools::log_error_and_return;
use crate::tools::web::build_client;
use crate::web::api::map_gym_error;
use crate::web::session::Session;
use dto::workout::{Workout, WorkoutToCreate, WorkoutToUpdate};
use rocket::State;
use rocket::http::Status;
use rocket::serde::json::Json;

#[get("/workouts")]
pub async fn list_workouts(
    gym_api_config: &State<GymApiConfig>,
    session: Session,
) -> Result<Json<Vec<Workout>>, Status> {
    let client = build_client().map_err(log_error_and_return(Status::InternalServerError))?;
    gym::workouts::list_workouts(&client, gym_api_config.host(), session.token())
        .await
        .map(Json)
        .map_err(map_gym_error)
}

#[get("/workouts/<id>")]
pub async fn get_workout(
    gym_api_config: &State<GymApiConfig>,
    session: Session,
    id: u32,
) -> Result<Json<Workout>, Status> {
    let client = build_client().map_err(log_error_and_return(Status::InternalServerError))?;
    gym::workouts::get_workout(&client, gym_api_config.host(), session.token(), id)
        .await
        .map(Json)
        .map_err(map_gym_error)
}

#[post("/workouts", format = "application/json", data = "<workout>")]
pub async fn create_workout(
    gym_api_config: &State<GymApiConfig>,
    session: Session,
    workout: Json<WorkoutToCreate>,
) -> Result<Json<Workout>, Status> {
    let client = build_client().map_err(log_error_and_return(Status::InternalServerError))?;
    gym::workouts::create_workout(
        &client,
        gym_api_config.host(),
        session.token(),
        &workout.into_inner(),
    )
    .await
    .map(Json)
    .map_err(map_gym_error)
}

#[put("/workouts/<id>", format = "application/json", data = "<workout>")]
pub async fn update_workout(
    gym_api_config: &State<GymApiConfig>,
    session: Session,
    id: u32,
    workout: Json<WorkoutToUpdate>,
) -> Result<Json<Workout>, Status> {
    let client = build_client().map_err(log_error_and_return(Status::InternalServerError))?;
    gym::workouts::update_workout(
        &client,
        gym_api_config.host(),
        session.token(),
        id,
        &workout.into_inner(),
    )
    .await
    .map(Json)
    .map_err(map_gym_error)
}

#[delete("/workouts/<id>")]
pub async fn delete_workout(
    gym_api_config: &State<GymApiConfig>,
    session: Session,
    id: u32,
) -> Result<Status, Status> {
    let client = build_client().map_err(log_error_and_return(Status::InternalServerError))?;
    gym::workouts::delete_workout(&client, gym_api_config.host(), session.token(), id)
        .await
        .map(|_| Status::NoContent)
        .map_err(map_gym_error)
}
