//! Participant and voting event administration.
//!
//! Edit targets live inside the open form and vanish when it closes, so a
//! stale id can never leak from one dialog into the next.

use crate::api::{self, Api};
use crate::error::ApiError;
use crate::models::participant::{Participant, ParticipantPayload};
use crate::models::voting_event::{VotingEvent, VotingEventPayload};

use super::{AlertSlot, Generation, ValidationError};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum AdminTab {
    #[default]
    Participants,
    VotingEvents,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ParticipantForm {
    pub target: Option<i64>,
    pub name: String,
    pub photo_url: String,
}

impl ParticipantForm {
    pub fn title(&self) -> &'static str {
        if self.target.is_some() {
            "Editar Participante"
        } else {
            "Adicionar Participante"
        }
    }

    pub fn validate(&self) -> Result<ParticipantPayload, ValidationError> {
        if self.name.is_empty() || self.photo_url.is_empty() {
            return Err(ValidationError::ParticipantFieldsRequired);
        }
        Ok(ParticipantPayload {
            name: self.name.clone(),
            photo_url: self.photo_url.clone(),
        })
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct VotingEventForm {
    pub target: Option<i64>,
    pub description: String,
}

impl VotingEventForm {
    pub fn title(&self) -> &'static str {
        if self.target.is_some() {
            "Editar Votação"
        } else {
            "Adicionar Votação"
        }
    }

    pub fn validate(&self) -> Result<VotingEventPayload, ValidationError> {
        if self.description.is_empty() {
            return Err(ValidationError::DescriptionRequired);
        }
        Ok(VotingEventPayload {
            description: self.description.clone(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteTarget {
    Participant(i64),
    VotingEvent(i64),
}

impl DeleteTarget {
    pub fn prompt(&self) -> &'static str {
        match self {
            DeleteTarget::Participant(_) => "Tem certeza que deseja excluir este participante?",
            DeleteTarget::VotingEvent(_) => "Tem certeza que deseja excluir esta votação?",
        }
    }
}

/// The "manage participants" dialog of one voting event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterDialog {
    pub voting_event_id: i64,
    pub title: String,
    pub members: Vec<Participant>,
    /// Participant chosen in the "add" dropdown.
    pub pick: Option<i64>,
}

#[derive(Debug)]
pub enum Command {
    LoadParticipants,
    LoadVotingEvents,
    FetchParticipant {
        id: i64,
    },
    FetchVotingEvent {
        id: i64,
    },
    SaveParticipant {
        target: Option<i64>,
        payload: ParticipantPayload,
    },
    SaveVotingEvent {
        target: Option<i64>,
        payload: VotingEventPayload,
    },
    Delete(DeleteTarget),
    OpenRoster {
        voting_event_id: i64,
        generation: Generation,
    },
    AddToRoster {
        voting_event_id: i64,
        participant_id: i64,
        generation: Generation,
    },
    ReloadRoster {
        voting_event_id: i64,
        generation: Generation,
    },
}

#[derive(Debug)]
pub enum Message {
    ParticipantsLoaded(Result<Vec<Participant>, ApiError>),
    VotingEventsLoaded(Result<Vec<VotingEvent>, ApiError>),
    ParticipantFetched {
        id: i64,
        result: Result<Participant, ApiError>,
    },
    VotingEventFetched {
        id: i64,
        result: Result<VotingEvent, ApiError>,
    },
    ParticipantSaved {
        target: Option<i64>,
        result: Result<Participant, ApiError>,
    },
    VotingEventSaved {
        target: Option<i64>,
        result: Result<VotingEvent, ApiError>,
    },
    Deleted {
        target: DeleteTarget,
        result: Result<(), ApiError>,
    },
    RosterOpened {
        voting_event_id: i64,
        generation: Generation,
        result: Result<(VotingEvent, Vec<Participant>), ApiError>,
    },
    RosterAdded {
        generation: Generation,
        result: Result<Participant, ApiError>,
    },
    RosterReloaded {
        generation: Generation,
        result: Result<Vec<Participant>, ApiError>,
    },
}

impl Command {
    pub async fn run(self, api: &Api) -> Message {
        match self {
            Command::LoadParticipants => {
                Message::ParticipantsLoaded(api::participants::list(api).await)
            }
            Command::LoadVotingEvents => {
                Message::VotingEventsLoaded(api::voting_events::list(api).await)
            }
            Command::FetchParticipant { id } => Message::ParticipantFetched {
                id,
                result: api::participants::get(api, id).await,
            },
            Command::FetchVotingEvent { id } => Message::VotingEventFetched {
                id,
                result: api::voting_events::get(api, id).await,
            },
            Command::SaveParticipant { target, payload } => {
                let result = match target {
                    Some(id) => api::participants::update(api, id, &payload).await,
                    None => api::participants::create(api, &payload).await,
                };
                Message::ParticipantSaved { target, result }
            }
            Command::SaveVotingEvent { target, payload } => {
                let result = match target {
                    Some(id) => api::voting_events::update(api, id, &payload).await,
                    None => api::voting_events::create(api, &payload).await,
                };
                Message::VotingEventSaved { target, result }
            }
            Command::Delete(target) => {
                let result = match target {
                    DeleteTarget::Participant(id) => api::participants::delete(api, id).await,
                    DeleteTarget::VotingEvent(id) => api::voting_events::delete(api, id).await,
                };
                Message::Deleted { target, result }
            }
            Command::OpenRoster {
                voting_event_id,
                generation,
            } => Message::RosterOpened {
                voting_event_id,
                generation,
                result: open_roster(api, voting_event_id).await,
            },
            Command::AddToRoster {
                voting_event_id,
                participant_id,
                generation,
            } => Message::RosterAdded {
                generation,
                result: api::voting_events::add_to_roster(api, voting_event_id, participant_id)
                    .await,
            },
            Command::ReloadRoster {
                voting_event_id,
                generation,
            } => Message::RosterReloaded {
                generation,
                result: api::voting_events::roster(api, voting_event_id).await,
            },
        }
    }
}

async fn open_roster(
    api: &Api,
    voting_event_id: i64,
) -> Result<(VotingEvent, Vec<Participant>), ApiError> {
    let event = api::voting_events::get(api, voting_event_id).await?;
    let members = api::voting_events::roster(api, voting_event_id).await?;
    Ok((event, members))
}

#[derive(Debug, Default)]
pub struct AdminState {
    pub tab: AdminTab,
    pub participants: Vec<Participant>,
    pub voting_events: Vec<VotingEvent>,
    pub participant_form: Option<ParticipantForm>,
    pub voting_event_form: Option<VotingEventForm>,
    pub pending_delete: Option<DeleteTarget>,
    pub roster: Option<RosterDialog>,
    pub alert: AlertSlot,
    roster_generation: Generation,
}

impl AdminState {
    pub fn load(&mut self) -> Vec<Command> {
        vec![Command::LoadParticipants, Command::LoadVotingEvents]
    }

    pub fn open_participant_form(&mut self, id: Option<i64>) -> Vec<Command> {
        self.participant_form = Some(ParticipantForm {
            target: id,
            ..Default::default()
        });
        id.map(|id| Command::FetchParticipant { id })
            .into_iter()
            .collect()
    }

    pub fn close_participant_form(&mut self) {
        self.participant_form = None;
    }

    pub fn submit_participant(&mut self) -> Vec<Command> {
        let Some(form) = &self.participant_form else {
            return Vec::new();
        };
        match form.validate() {
            Ok(payload) => vec![Command::SaveParticipant {
                target: form.target,
                payload,
            }],
            Err(e) => {
                self.alert.reject(e);
                Vec::new()
            }
        }
    }

    pub fn open_voting_event_form(&mut self, id: Option<i64>) -> Vec<Command> {
        self.voting_event_form = Some(VotingEventForm {
            target: id,
            ..Default::default()
        });
        id.map(|id| Command::FetchVotingEvent { id })
            .into_iter()
            .collect()
    }

    pub fn close_voting_event_form(&mut self) {
        self.voting_event_form = None;
    }

    pub fn submit_voting_event(&mut self) -> Vec<Command> {
        let Some(form) = &self.voting_event_form else {
            return Vec::new();
        };
        match form.validate() {
            Ok(payload) => vec![Command::SaveVotingEvent {
                target: form.target,
                payload,
            }],
            Err(e) => {
                self.alert.reject(e);
                Vec::new()
            }
        }
    }

    /// Only records the target; nothing is sent until [`Self::confirm_delete`].
    pub fn request_delete(&mut self, target: DeleteTarget) {
        self.pending_delete = Some(target);
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    pub fn confirm_delete(&mut self) -> Vec<Command> {
        self.pending_delete.take().map(Command::Delete).into_iter().collect()
    }

    pub fn manage_roster(&mut self, voting_event_id: i64) -> Vec<Command> {
        let generation = self.roster_generation.bump();
        vec![Command::OpenRoster {
            voting_event_id,
            generation,
        }]
    }

    pub fn close_roster(&mut self) {
        self.roster = None;
        self.roster_generation.bump();
    }

    pub fn add_to_roster(&mut self) -> Vec<Command> {
        let Some(dialog) = &self.roster else {
            return Vec::new();
        };
        match dialog.pick {
            Some(participant_id) => vec![Command::AddToRoster {
                voting_event_id: dialog.voting_event_id,
                participant_id,
                generation: self.roster_generation,
            }],
            None => {
                self.alert.reject(ValidationError::ParticipantRequired);
                Vec::new()
            }
        }
    }

    pub fn update(&mut self, msg: Message) -> Vec<Command> {
        match msg {
            Message::ParticipantsLoaded(result) => match result {
                Ok(participants) => self.participants = participants,
                Err(e) => self.alert.failure("Falha ao carregar participantes", &e),
            },
            Message::VotingEventsLoaded(result) => match result {
                Ok(events) => self.voting_events = events,
                Err(e) => self.alert.failure("Falha ao carregar votações", &e),
            },
            Message::ParticipantFetched { id, result } => match result {
                Ok(participant) => {
                    if let Some(form) = self
                        .participant_form
                        .as_mut()
                        .filter(|f| f.target == Some(id))
                    {
                        form.name = participant.name;
                        form.photo_url = participant.photo_url;
                    }
                }
                Err(e) => self.alert.failure("Falha ao carregar participante", &e),
            },
            Message::VotingEventFetched { id, result } => match result {
                Ok(event) => {
                    if let Some(form) = self
                        .voting_event_form
                        .as_mut()
                        .filter(|f| f.target == Some(id))
                    {
                        form.description = event.description;
                    }
                }
                Err(e) => self.alert.failure("Falha ao carregar votação", &e),
            },
            Message::ParticipantSaved { target, result } => match result {
                Ok(_) => {
                    self.participant_form = None;
                    self.alert.success(if target.is_some() {
                        "Participante atualizado com sucesso"
                    } else {
                        "Participante criado com sucesso"
                    });
                    return vec![Command::LoadParticipants];
                }
                Err(e) => self.alert.failure("Falha ao salvar participante", &e),
            },
            Message::VotingEventSaved { target, result } => match result {
                Ok(_) => {
                    self.voting_event_form = None;
                    self.alert.success(if target.is_some() {
                        "Votação atualizada com sucesso"
                    } else {
                        "Votação criada com sucesso"
                    });
                    return vec![Command::LoadVotingEvents];
                }
                Err(e) => self.alert.failure("Falha ao salvar votação", &e),
            },
            Message::Deleted { target, result } => match (target, result) {
                (DeleteTarget::Participant(_), Ok(())) => {
                    self.alert.success("Participante excluído com sucesso");
                    return vec![Command::LoadParticipants];
                }
                (DeleteTarget::VotingEvent(_), Ok(())) => {
                    self.alert.success("Votação excluída com sucesso");
                    return vec![Command::LoadVotingEvents];
                }
                (DeleteTarget::Participant(_), Err(e)) => {
                    self.alert.failure("Falha ao excluir participante", &e)
                }
                (DeleteTarget::VotingEvent(_), Err(e)) => {
                    self.alert.failure("Falha ao excluir votação", &e)
                }
            },
            Message::RosterOpened {
                voting_event_id,
                generation,
                result,
            } => {
                if generation != self.roster_generation {
                    log::debug!("Dropping roster for a dialog that is no longer wanted");
                    return Vec::new();
                }
                match result {
                    Ok((event, members)) => {
                        self.roster = Some(RosterDialog {
                            voting_event_id,
                            title: format!("Participantes da Votação: {}", event.description),
                            members,
                            pick: None,
                        })
                    }
                    Err(e) => self
                        .alert
                        .failure("Falha ao gerenciar participantes da votação", &e),
                }
            }
            Message::RosterAdded { generation, result } => {
                if generation != self.roster_generation {
                    match result {
                        Ok(_) => self
                            .alert
                            .success("Participante adicionado à votação com sucesso"),
                        Err(e) => self
                            .alert
                            .failure("Falha ao adicionar participante à votação", &e),
                    }
                    return Vec::new();
                }
                match (result, self.roster.as_mut()) {
                    (Ok(_), Some(dialog)) => {
                        self.alert
                            .success("Participante adicionado à votação com sucesso");
                        dialog.pick = None;
                        return vec![Command::ReloadRoster {
                            voting_event_id: dialog.voting_event_id,
                            generation,
                        }];
                    }
                    (Ok(_), None) => {}
                    (Err(e), _) => self
                        .alert
                        .failure("Falha ao adicionar participante à votação", &e),
                }
            }
            Message::RosterReloaded { generation, result } => {
                if generation != self.roster_generation {
                    return Vec::new();
                }
                match (result, self.roster.as_mut()) {
                    (Ok(members), Some(dialog)) => dialog.members = members,
                    (Ok(_), None) => {}
                    (Err(e), _) => self
                        .alert
                        .failure("Falha ao adicionar participante à votação", &e),
                }
            }
        }
        Vec::new()
    }
}
