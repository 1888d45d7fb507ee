use crate::gym::config::GymApiConfig;
use crate::web::api::{
    auth_controller, checkups_controller, members_controller, plans_controller,
    queries_controller, trainers_controller, workouts_controller,
};
use crate::web::server::Server;
use crate::web::session::SessionStorage;
use rocket::{Build, Rocket};
use std::sync::Mutex;

pub struct ApiServer {}

impl ApiServer {
    pub fn new() -> Self {
        Self {}
    }
}

impl Server for ApiServer {
    fn configure(&self, rocket_build: Rocket<Build>) -> Rocket<Build> {
        let rocket_build = rocket_build
            .manage(Mutex::new(SessionStorage::default()))
            .mount(
                "/api/",
                routes![
                    auth_controller::login,
                    auth_controller::register,
                    auth_controller::current_user,
                    auth_controller::logout,
                    members_controller::list_members,
                    members_controller::get_member,
                    members_controller::create_member,
                    members_controller::update_member,
                    members_controller::delete_member,
                    trainers_controller::list_trainers,
                    trainers_controller::get_trainer,
                    trainers_controller::create_trainer,
                    trainers_controller::update_trainer,
                    trainers_controller::delete_trainer,
                    plans_controller::list_plans,
                    plans_controller::get_plan,
                    plans_controller::create_plan,
                    plans_controller::update_plan,
                    plans_controller::delete_plan,
                    queries_controller::list_queries,
                    queries_controller::submit_query,
                    queries_controller::update_query_status,
                    queries_controller::delete_query,
                    workouts_controller::list_workouts,
                    workouts_controller::get_workout,
                    workouts_controller::create_workout,
                    workouts_controller::update_workout,
                    workouts_controller::delete_workout,
                    checkups_controller::list_due_checkups,
                    checkups_controller::mark_checkup_done,
                ],
            );
        manage_gym_config(rocket_build)
    }
}

#[cfg(not(feature = "demo"))]
fn manage_gym_config(rocket_build: Rocket<Build>) -> Rocket<Build> {
    rocket_build.manage(GymApiConfig::new(get_gym_host()))
}

#[cfg(not(feature = "demo"))]
fn get_gym_host() -> String {
    const GYM_HOST_ARG: &str = "--gym-host";
    const DEFAULT_GYM_HOST: &str = "http://localhost:8000";

    crate::tools::env_args::retrieve_arg_value(GYM_HOST_ARG)
        .unwrap_or_else(|| DEFAULT_GYM_HOST.to_owned())
}

/// In demo mode, the backend is a wiremock stand-in started on ignition.
/// Its port is only known then, hence the fairing.
#[cfg(feature = "demo")]
fn manage_gym_config(rocket_build: Rocket<Build>) -> Rocket<Build> {
    rocket_build.attach(rocket::fairing::AdHoc::on_ignite(
        "Demo gym backend",
        |rocket| async {
            let host = crate::demo_mock_server::init_demo().await;
            rocket.manage(GymApiConfig::new(host))
        },
    ))
}
