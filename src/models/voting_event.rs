use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct VotingEvent {
    pub id: i64,
    #[serde(rename = "descricao")]
    pub description: String,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct VotingEventPayload {
    #[serde(rename = "descricao")]
    pub description: String,
}
