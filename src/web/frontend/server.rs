use crate::web::frontend::{filters, frontend_controller};
use crate::web::server::Server;
use rocket::fs::FileServer;
use rocket::{Build, Rocket};
use rocket_dyn_templates::Template;

pub struct FrontendServer {}

impl FrontendServer {
    pub fn new() -> Self {
        Self {}
    }
}

impl Server for FrontendServer {
    fn configure(&self, rocket_build: Rocket<Build>) -> Rocket<Build> {
        rocket_build
            .mount(
                "/",
                routes![
                    frontend_controller::index,
                    frontend_controller::try_us,
                    frontend_controller::submit_try_us,
                    frontend_controller::contact,
                    frontend_controller::submit_contact,
                    frontend_controller::login,
                    frontend_controller::register,
                    frontend_controller::dashboard,
                    frontend_controller::dashboard_unauthenticated,
                    frontend_controller::members,
                    frontend_controller::members_unauthenticated,
                    frontend_controller::trainers,
                    frontend_controller::trainers_unauthenticated,
                    frontend_controller::plans,
                    frontend_controller::plans_unauthenticated,
                    frontend_controller::queries,
                    frontend_controller::queries_unauthenticated,
                    frontend_controller::workouts,
                    frontend_controller::workouts_unauthenticated,
                    frontend_controller::profile,
                    frontend_controller::profile_unauthenticated,
                ],
            )
            .mount("/", FileServer::from("./public/static"))
            .register("/", catchers![frontend_controller::not_found])
            .attach(Template::custom(|engines| {
                engines
                    .tera
                    .register_filter("membership_label", filters::membership_label);
                engines
                    .tera
                    .register_filter("membership_badge", filters::membership_badge);
                engines
                    .tera
                    .register_filter("checkup_label", filters::checkup_label);
            }))
    }
}
