mod access;
#[cfg(feature = "demo")]
mod demo_mock_server;
mod gym;
mod tools;
mod web;

#[macro_use]
extern crate rocket;
#[macro_use]
extern crate log;

use crate::web::server::build_server;

#[launch]
fn rocket() -> _ {
    env_logger::init();
    build_server()
}
