use crate::gym::error::GymApiError;
use crate::gym::error::GymApiError::BackendUnreachable;
use crate::gym::{read_json, read_no_content};
use crate::tools::log_message_and_return;
use dto::member::{Member, MemberToCreate, MemberToUpdate};
use reqwest::Client;

pub async fn list_members(
    client: &Client,
    host: &str,
    token: &str,
) -> Result<Vec<Member>, GymApiError> {
    let url = format!("{host}/members");
    let response = client
        .get(url)
        .bearer_auth(token)
        .send()
        .await
        .map_err(log_message_and_return(
            "Can't reach gym backend to list members.",
            BackendUnreachable,
        ))?;

    read_json(response).await
}

pub async fn get_member(
    client: &Client,
    host: &str,
    token: &str,
    id: u32,
) -> Result<Member, GymApiError> {
    let url = format!("{host}/members/{id}");
    let response = client
        .get(url)
        .bearer_auth(token)
        .send()
        .await
        .map_err(log_message_and_return(
            "Can't reach gym backend to get a member.",
            BackendUnreachable,
        ))?;

    read_json(response).await
}

pub async fn create_member(
    client: &Client,
    host: &str,
    token: &str,
    member: &MemberToCreate,
) -> Result<Member, GymApiError> {
    let url = format!("{host}/members");
    let response = client
        .post(url)
        .bearer_auth(token)
        .json(member)
        .send()
        .await
        .map_err(log_message_and_return(
            "Can't reach gym backend to create a member.",
            BackendUnreachable,
        ))?;

    read_json(response).await
}

pub async fn update_member(
    client: &Client,
    host: &str,
    token: &str,
    id: u32,
    member: &MemberToUpdate,
) -> Result<Member, GymApiError> {
    let url = format!("{host}/members/{id}");
    let response = client
        .put(url)
        .bearer_auth(token)
        .json(member)
        .send()
        .await
        .map_err(log_message_and_return(
            "Can't reach gym backend to update a member.",
            BackendUnreachable,
        ))?;

    read_json(response).await
}

pub async fn delete_member(
    client: &Client,
    host: &str,
    token: &str,
    id: u32,
) -> Result<(), GymApiError> {
    let url = format!("{host}/members/{id}");
    let response = client
        .delete(url)
        .bearer_auth(token)
        .send()
        .await
        .map_err(log_message_and_return(
            "Can't reach gym backend to delete a member.",
            BackendUnreachable,
        ))?;

    read_no_content(response).await
}
