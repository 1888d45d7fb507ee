pub mod auth_controller;
pub mod checkups_controller;
pub mod members_controller;
pub mod plans_controller;
pub mod queries_controller;
pub mod server;
pub mod trainers_controller;
pub mod workouts_controller;

use crate::gym::error::GymApiError;
use crate::gym::error::GymApiError::{
    BackendUnreachable, LackOfPermissions, NotFound, Rejected, TokenRejected, UnexpectedResponse,
    WrongCredentials,
};
use rocket::http::Status;

/// Translate a gateway error into the status the page scripts expect.
/// Real authorization lives in the backend: a 403 here is its verdict
/// travelling through, not a decision of this server.
pub(crate) fn map_gym_error(error: GymApiError) -> Status {
    warn!("Gym backend call failed [error: {error}]");
    match error {
        WrongCredentials | TokenRejected => Status::Unauthorized,
        LackOfPermissions => Status::Forbidden,
        NotFound => Status::NotFound,
        Rejected(_) => Status::UnprocessableEntity,
        UnexpectedResponse(_) | BackendUnreachable => Status::BadGateway,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_gym_errors_to_statuses() {
        assert_eq!(Status::Unauthorized, map_gym_error(TokenRejected));
        assert_eq!(Status::Forbidden, map_gym_error(LackOfPermissions));
        assert_eq!(Status::NotFound, map_gym_error(NotFound));
        assert_eq!(
            Status::UnprocessableEntity,
            map_gym_error(Rejected("nope".to_owned()))
        );
        assert_eq!(Status::BadGateway, map_gym_error(BackendUnreachable));
    }
}
