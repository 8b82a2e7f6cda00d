use reqwest::Method;

use super::{ensure_success, Api};
use crate::error::ApiError;
use crate::models::statistics::{HourlyTally, ParticipantTally, VoteTotal};

pub async fn total(api: &Api, voting_event_id: i64) -> Result<VoteTotal, ApiError> {
    let url = api.url(&format!("/estatisticas/votacoes/{}/total", voting_event_id));
    let resp = api.client().get(&url).send().await?;
    Ok(ensure_success(resp, Method::GET, &url)?.json().await?)
}

pub async fn by_participant(
    api: &Api,
    voting_event_id: i64,
) -> Result<Vec<ParticipantTally>, ApiError> {
    let url = api.url(&format!(
        "/estatisticas/votacoes/{}/participantes",
        voting_event_id
    ));
    let resp = api.client().get(&url).send().await?;
    Ok(ensure_success(resp, Method::GET, &url)?.json().await?)
}

pub async fn by_hour(api: &Api, voting_event_id: i64) -> Result<Vec<HourlyTally>, ApiError> {
    let url = api.url(&format!("/estatisticas/votacoes/{}/hourly", voting_event_id));
    let resp = api.client().get(&url).send().await?;
    Ok(ensure_success(resp, Method::GET, &url)?.json().await?)
}
