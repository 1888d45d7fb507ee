use crate::gym::error::GymApiError;
use crate::gym::error::GymApiError::BackendUnreachable;
use crate::gym::read_json;
use crate::tools::log_message_and_return;
use dto::member::Member;
use reqwest::Client;

/// Members whose next checkup falls within the backend's due window.
pub async fn list_due_checkups(
    client: &Client,
    host: &str,
    token: &str,
) -> Result<Vec<Member>, GymApiError> {
    let url = format!("{host}/fitness-checkups/due");
    let response = client
        .get(url)
        .bearer_auth(token)
        .send()
        .await
        .map_err(log_message_and_return(
            "Can't reach gym backend to list due checkups.",
            BackendUnreachable,
        ))?;

    read_json(response).await
}

/// Record a completed checkup. The backend sets the last checkup date to
/// today and reschedules the next one 21 days later; the updated member
/// comes back so the view can re-derive the urgency.
pub async fn mark_checkup_done(
    client: &Client,
    host: &str,
    token: &str,
    member_id: u32,
) -> Result<Member, GymApiError> {
    let url = format!("{host}/fitness-checkups/{member_id}/mark-done");
    let response = client
        .post(url)
        .bearer_auth(token)
        .send()
        .await
        .map_err(log_message_and_return(
            "Can't reach gym backend to mark a checkup as done.",
            BackendUnreachable,
        ))?;

    read_json(response).await
}
