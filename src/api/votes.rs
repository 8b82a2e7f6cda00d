use log::info;
use reqwest::Method;

use super::{ensure_success, Api};
use crate::error::ApiError;
use crate::models::vote::Vote;

/// Casts a vote. The acknowledgement body is not decoded; a 2xx status is
/// the only thing that counts.
pub async fn cast(api: &Api, vote: &Vote) -> Result<(), ApiError> {
    let url = api.url("/votos");
    let resp = api.client().post(&url).json(vote).send().await?;
    ensure_success(resp, Method::POST, &url)?;
    info!(
        "Vote for participant {} in voting event {} accepted",
        vote.participant_id, vote.voting_event_id
    );
    Ok(())
}
