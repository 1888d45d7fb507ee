use rocket::{Build, Rocket};

use crate::tools::env_args::retrieve_arg_value;
use crate::web::api::server::ApiServer;
use crate::web::frontend::server::FrontendServer;

const PORT_ARG: &str = "--port";
const DEFAULT_PORT: i32 = 8080;

pub trait Server {
    fn configure(&self, rocket_build: Rocket<Build>) -> Rocket<Build>;
}

pub fn build_server() -> Rocket<Build> {
    let port = get_port();
    let rocket_build = rocket::build().configure(rocket::Config::figment().merge(("port", port)));

    let servers: Vec<Box<dyn Server>> = vec![
        Box::new(ApiServer::new()),
        Box::new(FrontendServer::new()),
    ];
    servers
        .iter()
        .fold(rocket_build, |rocket_build, server| {
            server.configure(rocket_build)
        })
}

fn get_port() -> i32 {
    retrieve_arg_value(PORT_ARG)
        .and_then(|port| port.parse::<i32>().ok())
        .unwrap_or(DEFAULT_PORT)
}
