use log::info;
use reqwest::Method;

use super::{ensure_success, Api};
use crate::error::ApiError;
use crate::models::participant::{Participant, ParticipantPayload};

pub async fn list(api: &Api) -> Result<Vec<Participant>, ApiError> {
    let url = api.url("/participantes");
    let resp = api.client().get(&url).send().await?;
    let participants = ensure_success(resp, Method::GET, &url)?
        .json::<Vec<Participant>>()
        .await?;
    info!("Loaded {} participants", participants.len());
    Ok(participants)
}

pub async fn get(api: &Api, id: i64) -> Result<Participant, ApiError> {
    let url = api.url(&format!("/participantes/{}", id));
    let resp = api.client().get(&url).send().await?;
    Ok(ensure_success(resp, Method::GET, &url)?.json().await?)
}

pub async fn create(api: &Api, payload: &ParticipantPayload) -> Result<Participant, ApiError> {
    let url = api.url("/participantes");
    let resp = api.client().post(&url).json(payload).send().await?;
    let created: Participant = ensure_success(resp, Method::POST, &url)?.json().await?;
    info!("Participant {} created", created.id);
    Ok(created)
}

pub async fn update(
    api: &Api,
    id: i64,
    payload: &ParticipantPayload,
) -> Result<Participant, ApiError> {
    let url = api.url(&format!("/participantes/{}", id));
    let resp = api.client().put(&url).json(payload).send().await?;
    let updated = ensure_success(resp, Method::PUT, &url)?.json().await?;
    info!("Participant {} updated", id);
    Ok(updated)
}

pub async fn delete(api: &Api, id: i64) -> Result<(), ApiError> {
    let url = api.url(&format!("/participantes/{}", id));
    let resp = api.client().delete(&url).send().await?;
    ensure_success(resp, Method::DELETE, &url)?;
    info!("Participant {} deleted", id);
    Ok(())
}
