use crate::api::{self, Api};
use crate::error::ApiError;
use crate::models::participant::Participant;
use crate::models::vote::Vote;
use crate::models::voting_event::VotingEvent;

use super::{AlertSlot, Generation, Navigation, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VotingPhase {
    NoEventSelected,
    EventSelected,
    ReadyToSubmit,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum RosterView {
    /// No voting event chosen yet.
    #[default]
    Prompt,
    Loading,
    Loaded(Vec<Participant>),
    Failed,
}

#[derive(Debug)]
pub enum Command {
    LoadVotingEvents,
    LoadRoster {
        voting_event_id: i64,
        generation: Generation,
    },
    CastVote(Vote),
}

#[derive(Debug)]
pub enum Message {
    VotingEventsLoaded(Result<Vec<VotingEvent>, ApiError>),
    RosterLoaded {
        generation: Generation,
        result: Result<Vec<Participant>, ApiError>,
    },
    VoteCast {
        vote: Vote,
        result: Result<(), ApiError>,
    },
}

impl Command {
    pub async fn run(self, api: &Api) -> Message {
        match self {
            Command::LoadVotingEvents => {
                Message::VotingEventsLoaded(api::voting_events::list(api).await)
            }
            Command::LoadRoster {
                voting_event_id,
                generation,
            } => Message::RosterLoaded {
                generation,
                result: api::voting_events::roster(api, voting_event_id).await,
            },
            Command::CastVote(vote) => Message::VoteCast {
                vote,
                result: api::votes::cast(api, &vote).await,
            },
        }
    }
}

#[derive(Debug, Default)]
pub struct VotingState {
    pub voting_events: Vec<VotingEvent>,
    pub selected_event: Option<i64>,
    pub selected_participant: Option<i64>,
    pub roster: RosterView,
    pub loading: bool,
    pub alert: AlertSlot,
    generation: Generation,
    navigation: Option<Navigation>,
}

impl VotingState {
    pub fn load(&mut self) -> Vec<Command> {
        self.loading = true;
        vec![Command::LoadVotingEvents]
    }

    pub fn phase(&self) -> VotingPhase {
        match (self.selected_event, self.selected_participant) {
            (None, _) => VotingPhase::NoEventSelected,
            (Some(_), None) => VotingPhase::EventSelected,
            (Some(_), Some(_)) => VotingPhase::ReadyToSubmit,
        }
    }

    pub fn can_submit(&self) -> bool {
        self.phase() == VotingPhase::ReadyToSubmit
    }

    pub fn select_voting_event(&mut self, id: Option<i64>) -> Vec<Command> {
        self.selected_event = id;
        self.selected_participant = None;
        let generation = self.generation.bump();
        match id {
            Some(voting_event_id) => {
                self.roster = RosterView::Loading;
                self.loading = true;
                vec![Command::LoadRoster {
                    voting_event_id,
                    generation,
                }]
            }
            None => {
                self.roster = RosterView::Prompt;
                self.loading = false;
                Vec::new()
            }
        }
    }

    /// Marks `id` as the single selected card. An id outside the current
    /// roster clears the selection instead.
    pub fn select_participant(&mut self, id: i64) {
        self.selected_participant = match &self.roster {
            RosterView::Loaded(roster) if roster.iter().any(|p| p.id == id) => Some(id),
            _ => None,
        };
    }

    pub fn is_selected(&self, id: i64) -> bool {
        self.selected_participant == Some(id)
    }

    pub fn submit_vote(&mut self) -> Vec<Command> {
        match (self.selected_event, self.selected_participant) {
            (Some(voting_event_id), Some(participant_id)) => {
                self.loading = true;
                vec![Command::CastVote(Vote {
                    participant_id,
                    voting_event_id,
                })]
            }
            _ => {
                self.alert.reject(ValidationError::SelectionRequired);
                Vec::new()
            }
        }
    }

    pub fn update(&mut self, msg: Message) -> Vec<Command> {
        match msg {
            Message::VotingEventsLoaded(result) => {
                self.loading = false;
                match result {
                    Ok(events) => self.voting_events = events,
                    Err(e) => self.alert.failure("Falha ao carregar votações", &e),
                }
            }
            Message::RosterLoaded { generation, result } => {
                if generation != self.generation {
                    log::debug!("Dropping roster response for a previous selection");
                    return Vec::new();
                }
                self.loading = false;
                match result {
                    Ok(roster) => self.roster = RosterView::Loaded(roster),
                    Err(e) => {
                        self.alert.failure("Falha ao carregar participantes", &e);
                        self.roster = RosterView::Failed;
                    }
                }
            }
            Message::VoteCast { vote, result } => {
                self.loading = false;
                match result {
                    Ok(()) => {
                        self.navigation = Some(Navigation::Success {
                            voting_event_id: vote.voting_event_id,
                        })
                    }
                    Err(e) => self.alert.failure("Falha ao registrar voto", &e),
                }
            }
        }
        Vec::new()
    }

    pub fn take_navigation(&mut self) -> Option<Navigation> {
        self.navigation.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::AlertKind;

    fn participant(id: i64, name: &str) -> Participant {
        Participant {
            id,
            name: name.to_owned(),
            photo_url: format!("http://img/{}.png", id),
        }
    }

    fn with_roster(state: &mut VotingState, event: i64) -> Generation {
        let cmds = state.select_voting_event(Some(event));
        let generation = match cmds.as_slice() {
            [Command::LoadRoster { generation, .. }] => *generation,
            other => panic!("unexpected commands {:?}", other),
        };
        state.update(Message::RosterLoaded {
            generation,
            result: Ok(vec![participant(1, "Ana"), participant(2, "Bia")]),
        });
        generation
    }

    #[test]
    fn phases_follow_selection() {
        let mut state = VotingState::default();
        assert_eq!(state.phase(), VotingPhase::NoEventSelected);
        assert!(!state.can_submit());

        with_roster(&mut state, 7);
        assert_eq!(state.phase(), VotingPhase::EventSelected);
        assert!(!state.can_submit());

        state.select_participant(2);
        assert_eq!(state.phase(), VotingPhase::ReadyToSubmit);
        assert!(state.can_submit());

        state.select_voting_event(None);
        assert_eq!(state.phase(), VotingPhase::NoEventSelected);
        assert!(!state.can_submit());
        assert_eq!(state.roster, RosterView::Prompt);
    }

    #[test]
    fn clearing_event_settles_loading() {
        let mut state = VotingState::default();
        let generation = match state.select_voting_event(Some(1)).as_slice() {
            [Command::LoadRoster { generation, .. }] => *generation,
            other => panic!("unexpected commands {:?}", other),
        };
        assert!(state.loading);
        state.select_voting_event(None);
        state.update(Message::RosterLoaded {
            generation,
            result: Ok(vec![]),
        });
        assert!(!state.loading);
        assert_eq!(state.roster, RosterView::Prompt);
    }

    #[test]
    fn changing_event_clears_participant() {
        let mut state = VotingState::default();
        with_roster(&mut state, 7);
        state.select_participant(1);
        let cmds = state.select_voting_event(Some(8));
        assert_eq!(state.selected_participant, None);
        assert!(!state.can_submit());
        assert!(matches!(
            cmds.as_slice(),
            [Command::LoadRoster { voting_event_id: 8, .. }]
        ));
    }

    #[test]
    fn at_most_one_card_selected() {
        let mut state = VotingState::default();
        with_roster(&mut state, 7);
        state.select_participant(1);
        state.select_participant(2);
        assert!(!state.is_selected(1));
        assert!(state.is_selected(2));

        state.select_participant(99);
        assert!(!state.is_selected(1));
        assert!(!state.is_selected(2));
        assert!(!state.can_submit());
    }

    #[test]
    fn submit_without_selection_issues_nothing() {
        let mut state = VotingState::default();
        assert!(state.submit_vote().is_empty());
        let alert = state.alert.peek().unwrap();
        assert_eq!(alert.kind, AlertKind::Danger);
        assert_eq!(alert.message, "Selecione uma votação e um participante");
    }

    #[test]
    fn stale_roster_is_discarded() {
        let mut state = VotingState::default();
        let old = match state.select_voting_event(Some(1)).as_slice() {
            [Command::LoadRoster { generation, .. }] => *generation,
            _ => unreachable!(),
        };
        let current = match state.select_voting_event(Some(2)).as_slice() {
            [Command::LoadRoster { generation, .. }] => *generation,
            _ => unreachable!(),
        };
        state.update(Message::RosterLoaded {
            generation: old,
            result: Ok(vec![participant(10, "Old")]),
        });
        assert_eq!(state.roster, RosterView::Loading);

        state.update(Message::RosterLoaded {
            generation: current,
            result: Ok(vec![participant(20, "New")]),
        });
        assert_eq!(state.roster, RosterView::Loaded(vec![participant(20, "New")]));
    }

    #[test]
    fn failed_vote_keeps_selection() {
        let mut state = VotingState::default();
        with_roster(&mut state, 7);
        state.select_participant(1);
        let vote = match state.submit_vote().as_slice() {
            [Command::CastVote(vote)] => *vote,
            _ => unreachable!(),
        };
        assert_eq!(
            vote,
            Vote {
                participant_id: 1,
                voting_event_id: 7
            }
        );
        state.update(Message::VoteCast {
            vote,
            result: Err(ApiError::Status {
                method: reqwest::Method::POST,
                url: "http://test/votos".to_owned(),
                status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            }),
        });
        assert!(state.can_submit());
        assert_eq!(state.take_navigation(), None);
        assert_eq!(state.alert.peek().unwrap().message, "Falha ao registrar voto");
    }

    #[test]
    fn accepted_vote_navigates_to_results() {
        let mut state = VotingState::default();
        let vote = Vote {
            participant_id: 3,
            voting_event_id: 4,
        };
        state.update(Message::VoteCast {
            vote,
            result: Ok(()),
        });
        assert_eq!(
            state.take_navigation(),
            Some(Navigation::Success { voting_event_id: 4 })
        );
        assert_eq!(state.take_navigation(), None);
    }
}
