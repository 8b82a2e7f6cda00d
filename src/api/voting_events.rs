use log::info;
use reqwest::Method;

use super::{ensure_success, Api};
use crate::error::ApiError;
use crate::models::participant::{Participant, RosterAddition};
use crate::models::voting_event::{VotingEvent, VotingEventPayload};

pub async fn list(api: &Api) -> Result<Vec<VotingEvent>, ApiError> {
    let url = api.url("/votacoes");
    let resp = api.client().get(&url).send().await?;
    let events = ensure_success(resp, Method::GET, &url)?
        .json::<Vec<VotingEvent>>()
        .await?;
    info!("Loaded {} voting events", events.len());
    Ok(events)
}

pub async fn get(api: &Api, id: i64) -> Result<VotingEvent, ApiError> {
    let url = api.url(&format!("/votacoes/{}", id));
    let resp = api.client().get(&url).send().await?;
    Ok(ensure_success(resp, Method::GET, &url)?.json().await?)
}

pub async fn create(api: &Api, payload: &VotingEventPayload) -> Result<VotingEvent, ApiError> {
    let url = api.url("/votacoes");
    let resp = api.client().post(&url).json(payload).send().await?;
    let created: VotingEvent = ensure_success(resp, Method::POST, &url)?.json().await?;
    info!("Voting event {} created", created.id);
    Ok(created)
}

pub async fn update(
    api: &Api,
    id: i64,
    payload: &VotingEventPayload,
) -> Result<VotingEvent, ApiError> {
    let url = api.url(&format!("/votacoes/{}", id));
    let resp = api.client().put(&url).json(payload).send().await?;
    let updated = ensure_success(resp, Method::PUT, &url)?.json().await?;
    info!("Voting event {} updated", id);
    Ok(updated)
}

pub async fn delete(api: &Api, id: i64) -> Result<(), ApiError> {
    let url = api.url(&format!("/votacoes/{}", id));
    let resp = api.client().delete(&url).send().await?;
    ensure_success(resp, Method::DELETE, &url)?;
    info!("Voting event {} deleted", id);
    Ok(())
}

/// Participants attached to a voting event.
pub async fn roster(api: &Api, id: i64) -> Result<Vec<Participant>, ApiError> {
    let url = api.url(&format!("/votacoes/{}/participantes", id));
    let resp = api.client().get(&url).send().await?;
    Ok(ensure_success(resp, Method::GET, &url)?.json().await?)
}

pub async fn add_to_roster(
    api: &Api,
    id: i64,
    participant_id: i64,
) -> Result<Participant, ApiError> {
    let url = api.url(&format!("/votacoes/{}/participantes", id));
    let body = RosterAddition { participant_id };
    let resp = api.client().post(&url).json(&body).send().await?;
    let added = ensure_success(resp, Method::POST, &url)?.json().await?;
    info!("Participant {} added to voting event {}", participant_id, id);
    Ok(added)
}
