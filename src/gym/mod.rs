//! Thin client for the gym backend: one async function per resource
//! operation, all going through the same response handling so that every
//! caller sees the same error taxonomy.

pub mod auth;
pub mod checkups;
pub mod config;
pub mod error;
pub mod members;
pub mod plans;
pub mod queries;
pub mod trainers;
pub mod workouts;

use crate::gym::error::GymApiError;
use crate::gym::error::GymApiError::{
    BackendUnreachable, LackOfPermissions, NotFound, Rejected, TokenRejected, UnexpectedResponse,
};
use crate::tools::log_message_and_return;
use reqwest::{Response, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;

/// Error payload shape of the backend.
#[derive(Deserialize)]
struct BackendDetail {
    detail: String,
}

/// Read a successful JSON body into the declared schema.
/// A 2xx body which doesn't match the schema is an explicit
/// [GymApiError::UnexpectedResponse], never a silent coercion.
pub(crate) async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, GymApiError> {
    let response = reject_error_status(response).await?;
    let body = response.text().await.map_err(log_message_and_return(
        "Can't read gym backend response body.",
        BackendUnreachable,
    ))?;
    serde_json::from_str(&body).map_err(|error| {
        warn!("Gym backend answered with an unexpected payload [error: {error}]");
        UnexpectedResponse(error.to_string())
    })
}

/// Some operations only matter for their status code.
pub(crate) async fn read_no_content(response: Response) -> Result<(), GymApiError> {
    reject_error_status(response).await.map(|_| ())
}

async fn reject_error_status(response: Response) -> Result<Response, GymApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let detail = response
        .json::<BackendDetail>()
        .await
        .ok()
        .map(|body| body.detail);
    warn!("Gym backend refused the request [status: {status}, detail: {detail:?}]");
    Err(match status {
        StatusCode::UNAUTHORIZED => TokenRejected,
        StatusCode::FORBIDDEN => LackOfPermissions,
        StatusCode::NOT_FOUND => NotFound,
        StatusCode::BAD_REQUEST | StatusCode::CONFLICT | StatusCode::UNPROCESSABLE_ENTITY => {
            Rejected(detail.unwrap_or_else(|| "The submitted data has been refused.".to_owned()))
        }
        _ => BackendUnreachable,
    })
}
