use std::sync::mpsc::{channel, Receiver, Sender};
use std::time::Instant;

use log::{debug, warn};
use tokio::runtime::Handle;

use crate::api::Api;
use crate::config::StartPage;
use crate::controllers::admin::{self, AdminState};
use crate::controllers::reports::{self, ReportsState};
use crate::controllers::success::{self, SuccessState};
use crate::controllers::voting::{self, VotingState};
use crate::controllers::Navigation;

pub enum Page {
    Voting(VotingState),
    Admin(AdminState),
    Reports(ReportsState),
    Success(SuccessState),
}

impl Page {
    pub fn kind(&self) -> StartPage {
        match self {
            Page::Voting(_) => StartPage::Voting,
            Page::Admin(_) => StartPage::Admin,
            Page::Reports(_) => StartPage::Reports,
            Page::Success(_) => StartPage::Success,
        }
    }
}

/// Network work of whichever page is active.
#[derive(Debug)]
pub enum Task {
    Voting(voting::Command),
    Admin(admin::Command),
    Reports(reports::Command),
    Success(success::Command),
}

#[derive(Debug)]
pub enum Outcome {
    Voting(voting::Message),
    Admin(admin::Message),
    Reports(reports::Message),
    Success(success::Message),
}

impl Task {
    pub async fn run(self, api: &Api) -> Outcome {
        match self {
            Task::Voting(cmd) => Outcome::Voting(cmd.run(api).await),
            Task::Admin(cmd) => Outcome::Admin(cmd.run(api).await),
            Task::Reports(cmd) => Outcome::Reports(cmd.run(api).await),
            Task::Success(cmd) => Outcome::Success(cmd.run(api).await),
        }
    }
}

pub fn tasks<C>(commands: Vec<C>, wrap: fn(C) -> Task) -> Vec<Task> {
    commands.into_iter().map(wrap).collect()
}

/// Owns the active page and shuttles its commands to the tokio runtime.
/// Responses come back over an mpsc channel tagged with the page epoch, so a
/// response issued for a page that has since been left is dropped.
pub struct AppState {
    pub page: Page,
    api: Api,
    runtime: Handle,
    epoch: u64,
    pending: Vec<Task>,
    sender: Sender<(u64, Outcome)>,
    receiver: Receiver<(u64, Outcome)>,
}

impl AppState {
    pub fn new(api: Api, runtime: Handle, start: StartPage, voting_event_id: Option<i64>) -> Self {
        let (sender, receiver) = channel();
        let mut state = Self {
            page: Page::Voting(VotingState::default()),
            api,
            runtime,
            epoch: 0,
            pending: Vec::new(),
            sender,
            receiver,
        };
        state.open(start, voting_event_id);
        state
    }

    pub fn api(&self) -> &Api {
        &self.api
    }

    /// Replaces the active page with a freshly loaded one.
    pub fn open(&mut self, kind: StartPage, voting_event_id: Option<i64>) {
        self.epoch += 1;
        self.pending.clear();
        let (page, initial) = match kind {
            StartPage::Voting => {
                let mut s = VotingState::default();
                let cmds = tasks(s.load(), Task::Voting);
                (Page::Voting(s), cmds)
            }
            StartPage::Admin => {
                let mut s = AdminState::default();
                let cmds = tasks(s.load(), Task::Admin);
                (Page::Admin(s), cmds)
            }
            StartPage::Reports => {
                let mut s = ReportsState::default();
                let cmds = tasks(s.load(), Task::Reports);
                (Page::Reports(s), cmds)
            }
            StartPage::Success => {
                let mut s = SuccessState::new(voting_event_id);
                let cmds = tasks(s.load(), Task::Success);
                (Page::Success(s), cmds)
            }
        };
        debug!("Opening page {:?}", kind);
        self.page = page;
        self.pending = initial;
    }

    pub fn navigate(&mut self, navigation: Navigation) {
        match navigation {
            Navigation::Landing => self.open(StartPage::Voting, None),
            Navigation::Success { voting_event_id } => {
                self.open(StartPage::Success, Some(voting_event_id))
            }
        }
    }

    pub fn queue(&mut self, tasks: Vec<Task>) {
        self.pending.extend(tasks);
    }

    /// Applies every response that has arrived since the last frame.
    pub fn drain(&mut self) {
        while let Ok((epoch, outcome)) = self.receiver.try_recv() {
            if epoch != self.epoch {
                debug!("Dropping response for a page that was left");
                continue;
            }
            let follow_up = match (&mut self.page, outcome) {
                (Page::Voting(s), Outcome::Voting(msg)) => tasks(s.update(msg), Task::Voting),
                (Page::Admin(s), Outcome::Admin(msg)) => tasks(s.update(msg), Task::Admin),
                (Page::Reports(s), Outcome::Reports(msg)) => tasks(s.update(msg), Task::Reports),
                (Page::Success(s), Outcome::Success(msg)) => tasks(s.update(msg), Task::Success),
                (_, outcome) => {
                    warn!("Response {:?} does not belong to the active page", outcome);
                    Vec::new()
                }
            };
            self.pending.extend(follow_up);
        }
    }

    /// Page transitions requested by the active controller.
    pub fn poll_navigation(&mut self, now: Instant) -> Option<Navigation> {
        match &mut self.page {
            Page::Voting(s) => s.take_navigation(),
            Page::Success(s) => s.poll_navigation(now),
            Page::Admin(_) | Page::Reports(_) => None,
        }
    }

    /// Spawns queued tasks. Each one repaints the UI once its response is sent.
    pub fn flush(&mut self, ctx: &egui::Context) {
        for task in self.pending.drain(..) {
            let api = self.api.clone();
            let sender = self.sender.clone();
            let ctx = ctx.clone();
            let epoch = self.epoch;
            self.runtime.spawn(async move {
                let outcome = task.run(&api).await;
                if sender.send((epoch, outcome)).is_err() {
                    warn!("UI closed before a response arrived");
                }
                ctx.request_repaint();
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tokio::runtime::Runtime;

    use super::*;
    use crate::models::participant::Participant;
    use crate::models::voting_event::VotingEvent;

    fn app(runtime: &Runtime) -> AppState {
        let api = Api::new("http://127.0.0.1:9", Duration::from_secs(1)).unwrap();
        AppState::new(api, runtime.handle().clone(), StartPage::Voting, None)
    }

    fn admin_page(state: &AppState) -> &AdminState {
        match &state.page {
            Page::Admin(s) => s,
            _ => panic!("admin page expected"),
        }
    }

    #[test]
    fn response_for_left_page_is_dropped() {
        let runtime = Runtime::new().unwrap();
        let mut state = app(&runtime);
        let voting_epoch = state.epoch;

        state.open(StartPage::Admin, None);
        state
            .sender
            .send((
                voting_epoch,
                Outcome::Voting(voting::Message::VotingEventsLoaded(Ok(vec![VotingEvent {
                    id: 1,
                    description: "Paredão".to_owned(),
                }]))),
            ))
            .unwrap();
        state
            .sender
            .send((
                voting_epoch,
                Outcome::Admin(admin::Message::ParticipantsLoaded(Ok(vec![Participant {
                    id: 1,
                    name: "Ana".to_owned(),
                    photo_url: "http://img/1.png".to_owned(),
                }]))),
            ))
            .unwrap();
        state.drain();

        assert!(admin_page(&state).participants.is_empty());
        assert!(admin_page(&state).voting_events.is_empty());
        assert!(admin_page(&state).alert.peek().is_none());
    }

    #[test]
    fn response_for_another_page_kind_is_dropped() {
        let runtime = Runtime::new().unwrap();
        let mut state = app(&runtime);
        state.open(StartPage::Admin, None);
        let current = state.epoch;

        state
            .sender
            .send((
                current,
                Outcome::Voting(voting::Message::VotingEventsLoaded(Ok(vec![VotingEvent {
                    id: 1,
                    description: "Paredão".to_owned(),
                }]))),
            ))
            .unwrap();
        state.drain();

        assert!(admin_page(&state).voting_events.is_empty());
        assert_eq!(state.page.kind(), StartPage::Admin);
    }

    #[test]
    fn response_for_current_page_is_applied() {
        let runtime = Runtime::new().unwrap();
        let mut state = app(&runtime);
        state.open(StartPage::Admin, None);
        let current = state.epoch;

        state
            .sender
            .send((
                current,
                Outcome::Admin(admin::Message::VotingEventsLoaded(Ok(vec![VotingEvent {
                    id: 3,
                    description: "Final".to_owned(),
                }]))),
            ))
            .unwrap();
        state.drain();

        assert_eq!(admin_page(&state).voting_events.len(), 1);
    }
}
