use futures_util::future::try_join3;

use crate::api::{self, Api};
use crate::error::ApiError;
use crate::models::statistics::{HourlyTally, ParticipantTally};
use crate::models::voting_event::VotingEvent;

use super::Generation;

pub const PANEL_ERROR: &str = "Erro ao carregar dados";
pub const PANEL_LOADING: &str = "Carregando...";
pub const PANEL_EMPTY: &str = "Nenhum dado disponível";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub total: i64,
    pub by_participant: Vec<ParticipantTally>,
    pub by_hour: Vec<HourlyTally>,
}

/// State shared by the three report panels. They always render together:
/// a single failed fetch turns all three into the error message.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum Panels {
    #[default]
    Hidden,
    Loading,
    Ready(Report),
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantRow {
    pub name: String,
    pub total: i64,
    pub percentage: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HourRow {
    pub label: String,
    pub total: i64,
}

#[derive(Debug)]
pub enum Command {
    LoadVotingEvents,
    LoadReport {
        voting_event_id: i64,
        generation: Generation,
    },
}

#[derive(Debug)]
pub enum Message {
    VotingEventsLoaded(Result<Vec<VotingEvent>, ApiError>),
    ReportLoaded {
        generation: Generation,
        result: Result<Report, ApiError>,
    },
}

impl Command {
    pub async fn run(self, api: &Api) -> Message {
        match self {
            Command::LoadVotingEvents => {
                Message::VotingEventsLoaded(api::voting_events::list(api).await)
            }
            Command::LoadReport {
                voting_event_id,
                generation,
            } => Message::ReportLoaded {
                generation,
                result: load_report(api, voting_event_id).await,
            },
        }
    }
}

async fn load_report(api: &Api, voting_event_id: i64) -> Result<Report, ApiError> {
    let (total, by_participant, by_hour) = try_join3(
        api::statistics::total(api, voting_event_id),
        api::statistics::by_participant(api, voting_event_id),
        api::statistics::by_hour(api, voting_event_id),
    )
    .await?;
    Ok(Report {
        total: total.total,
        by_participant,
        by_hour,
    })
}

#[derive(Debug, Default)]
pub struct ReportsState {
    pub voting_events: Vec<VotingEvent>,
    pub selected_event: Option<i64>,
    pub panels: Panels,
    generation: Generation,
}

impl ReportsState {
    pub fn load(&mut self) -> Vec<Command> {
        vec![Command::LoadVotingEvents]
    }

    pub fn select_voting_event(&mut self, id: Option<i64>) -> Vec<Command> {
        self.selected_event = id;
        let generation = self.generation.bump();
        match id {
            Some(voting_event_id) => {
                self.panels = Panels::Loading;
                vec![Command::LoadReport {
                    voting_event_id,
                    generation,
                }]
            }
            None => {
                self.panels = Panels::Hidden;
                Vec::new()
            }
        }
    }

    pub fn update(&mut self, msg: Message) -> Vec<Command> {
        match msg {
            Message::VotingEventsLoaded(Ok(events)) => self.voting_events = events,
            // The dashboard has no banner; a failed selector load is only logged.
            Message::VotingEventsLoaded(Err(e)) => {
                log::error!("Failed to load voting events for reports: {}", e)
            }
            Message::ReportLoaded { generation, result } => {
                if generation != self.generation {
                    log::debug!("Dropping report for a previous selection");
                    return Vec::new();
                }
                self.panels = match result {
                    Ok(report) => Panels::Ready(report),
                    Err(e) => {
                        log::error!("Error loading reports: {}", e);
                        Panels::Failed
                    }
                };
            }
        }
        Vec::new()
    }
}

/// Percentages are relative to the sum of the rows, not to the separately
/// fetched total.
pub fn participant_rows(tally: &[ParticipantTally]) -> Vec<ParticipantRow> {
    let sum: i64 = tally.iter().map(|t| t.total).sum();
    tally
        .iter()
        .map(|t| ParticipantRow {
            name: t.name.clone(),
            total: t.total,
            percentage: if sum > 0 {
                format!("{:.2}", t.total as f64 / sum as f64 * 100.0)
            } else {
                "0.00".to_owned()
            },
        })
        .collect()
}

pub fn hour_label(hour: u32) -> String {
    format!("{:02}:00", hour)
}

pub fn hour_rows(tally: &[HourlyTally]) -> Vec<HourRow> {
    tally
        .iter()
        .map(|t| HourRow {
            label: hour_label(t.hour),
            total: t.total,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tally(name: &str, total: i64) -> ParticipantTally {
        ParticipantTally {
            name: name.to_owned(),
            total,
        }
    }

    #[test]
    fn percentages_use_row_sum() {
        let rows = participant_rows(&[tally("A", 1), tally("B", 2)]);
        assert_eq!(rows[0].percentage, "33.33");
        assert_eq!(rows[1].percentage, "66.67");
    }

    #[test]
    fn zero_sum_is_zero_percent() {
        let rows = participant_rows(&[tally("A", 0)]);
        assert_eq!(rows[0].percentage, "0.00");
        assert!(participant_rows(&[]).is_empty());
    }

    #[test]
    fn hours_are_zero_padded() {
        assert_eq!(hour_label(0), "00:00");
        assert_eq!(hour_label(9), "09:00");
        assert_eq!(hour_label(23), "23:00");
        let rows = hour_rows(&[HourlyTally { hour: 7, total: 3 }]);
        assert_eq!(
            rows,
            vec![HourRow {
                label: "07:00".to_owned(),
                total: 3
            }]
        );
    }

    #[test]
    fn deselect_hides_panels() {
        let mut state = ReportsState::default();
        state.select_voting_event(Some(1));
        assert_eq!(state.panels, Panels::Loading);
        assert!(state.select_voting_event(None).is_empty());
        assert_eq!(state.panels, Panels::Hidden);
    }

    #[test]
    fn stale_report_is_discarded() {
        let mut state = ReportsState::default();
        let old = match state.select_voting_event(Some(1)).as_slice() {
            [Command::LoadReport { generation, .. }] => *generation,
            _ => unreachable!(),
        };
        state.select_voting_event(Some(2));
        state.update(Message::ReportLoaded {
            generation: old,
            result: Ok(Report {
                total: 1,
                by_participant: vec![],
                by_hour: vec![],
            }),
        });
        assert_eq!(state.panels, Panels::Loading);
    }
}
