use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum GymApiError {
    #[error("The gym backend can't be reached.")]
    BackendUnreachable,
    #[error("The backend rejected the provided credentials.")]
    WrongCredentials,
    #[error("The backend rejected the session token.")]
    TokenRejected,
    #[error(
        "Although the token is valid, the user doesn't have permissions to execute the operation."
    )]
    LackOfPermissions,
    #[error("The requested record has not been found.")]
    NotFound,
    #[error("The backend refused the submitted data: {0}")]
    Rejected(String),
    #[error("The backend answered with an unexpected payload: {0}")]
    UnexpectedResponse(String),
}
