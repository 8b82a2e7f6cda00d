use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    pub id: i64,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "urlFoto")]
    pub photo_url: String,
}

/// Body of `POST /participantes` and `PUT /participantes/{id}`.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ParticipantPayload {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "urlFoto")]
    pub photo_url: String,
}

/// Body of `POST /votacoes/{id}/participantes`.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RosterAddition {
    #[serde(rename = "participanteId")]
    pub participant_id: i64,
}
