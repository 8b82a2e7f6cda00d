use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoteTotal {
    pub total: i64,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ParticipantTally {
    #[serde(rename = "nome")]
    pub name: String,
    pub total: i64,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct HourlyTally {
    pub hour: u32,
    pub total: i64,
}
