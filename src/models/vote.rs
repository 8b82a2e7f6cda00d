use serde::Serialize;

/// A single ballot. Write-only: the client never reads votes back.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vote {
    #[serde(rename = "participanteId")]
    pub participant_id: i64,
    #[serde(rename = "votacaoId")]
    pub voting_event_id: i64,
}
