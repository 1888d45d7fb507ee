use crate::gym::error::GymApiError;
use crate::gym::error::GymApiError::BackendUnreachable;
use crate::gym::{read_json, read_no_content};
use crate::tools::log_message_and_return;
use dto::customer_query::{CustomerQuery, QueryStatus, QueryToCreate};
use reqwest::Client;

pub async fn list_queries(
    client: &Client,
    host: &str,
    token: &str,
) -> Result<Vec<CustomerQuery>, GymApiError> {
    let url = format!("{host}/queries");
    let response = client
        .get(url)
        .bearer_auth(token)
        .send()
        .await
        .map_err(log_message_and_return(
            "Can't reach gym backend to list queries.",
            BackendUnreachable,
        ))?;

    read_json(response).await
}

/// The only unauthenticated write: the public trial/join/contact forms all
/// land here.
pub async fn create_query(
    client: &Client,
    host: &str,
    query: &QueryToCreate,
) -> Result<CustomerQuery, GymApiError> {
    let url = format!("{host}/queries");
    let response = client
        .post(url)
        .json(query)
        .send()
        .await
        .map_err(log_message_and_return(
            "Can't reach gym backend to submit a query.",
            BackendUnreachable,
        ))?;

    read_json(response).await
}

/// The backend only answers with an acknowledgement message here,
/// not with the updated record. Callers re-fetch the list if they need it.
pub async fn update_query_status(
    client: &Client,
    host: &str,
    token: &str,
    id: u32,
    status: QueryStatus,
) -> Result<(), GymApiError> {
    let url = format!("{host}/queries/{id}/status?status={}", status.as_str());
    let response = client
        .patch(url)
        .bearer_auth(token)
        .send()
        .await
        .map_err(log_message_and_return(
            "Can't reach gym backend to update a query status.",
            BackendUnreachable,
        ))?;

    read_no_content(response).await
}

pub async fn delete_query(
    client: &Client,
    host: &str,
    token: &str,
    id: u32,
) -> Result<(), GymApiError> {
    let url = format!("{host}/queries/{id}");
    let response = client
        .delete(url)
        .bearer_auth(token)
        .send()
        .await
        .map_err(log_message_and_return(
            "Can't reach gym backend to delete a query.",
            BackendUnreachable,
        ))?;

    read_no_content(response).await
}
