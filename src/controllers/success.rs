use std::time::{Duration, Instant};

use reqwest::Url;

use crate::api::{self, Api};
use crate::error::ApiError;
use crate::models::statistics::ParticipantTally;
use crate::models::voting_event::VotingEvent;

use super::{Alert, AlertSlot, Navigation};

/// Delay before a results page without a voting event falls back to the landing page.
pub const REDIRECT_DELAY: Duration = Duration::from_secs(3);

const AVATAR_ENDPOINT: &str = "https://ui-avatars.com/api/";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rank {
    First,
    Second,
    Third,
    Other,
}

impl Rank {
    fn from_position(index: usize) -> Self {
        match index {
            0 => Rank::First,
            1 => Rank::Second,
            2 => Rank::Third,
            _ => Rank::Other,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultCard {
    pub name: String,
    pub total: i64,
    pub percentage: String,
    pub rank: Rank,
    pub avatar_url: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Results {
    pub voting_event: VotingEvent,
    pub total_votes: i64,
    pub tally: Vec<ParticipantTally>,
}

#[derive(Debug)]
pub enum Command {
    LoadResults { voting_event_id: i64 },
}

#[derive(Debug)]
pub enum Message {
    ResultsLoaded(Result<Results, ApiError>),
}

impl Command {
    pub async fn run(self, api: &Api) -> Message {
        match self {
            Command::LoadResults { voting_event_id } => {
                Message::ResultsLoaded(load_results(api, voting_event_id).await)
            }
        }
    }
}

/// Event, total and tally are fetched one after the other; the first
/// failure aborts the rest.
async fn load_results(api: &Api, voting_event_id: i64) -> Result<Results, ApiError> {
    let voting_event = api::voting_events::get(api, voting_event_id).await?;
    let total = api::statistics::total(api, voting_event_id).await?;
    let tally = api::statistics::by_participant(api, voting_event_id).await?;
    Ok(Results {
        voting_event,
        total_votes: total.total,
        tally,
    })
}

#[derive(Debug)]
pub struct SuccessState {
    pub voting_event_id: Option<i64>,
    pub results: Option<Results>,
    pub loading: bool,
    pub alert: AlertSlot,
    redirect_at: Option<Instant>,
}

impl SuccessState {
    pub fn new(voting_event_id: Option<i64>) -> Self {
        Self {
            voting_event_id,
            results: None,
            loading: false,
            alert: AlertSlot::default(),
            redirect_at: None,
        }
    }

    pub fn load(&mut self) -> Vec<Command> {
        self.load_at(Instant::now())
    }

    pub fn load_at(&mut self, now: Instant) -> Vec<Command> {
        match self.voting_event_id {
            Some(voting_event_id) => {
                self.loading = true;
                vec![Command::LoadResults { voting_event_id }]
            }
            None => {
                log::error!("Results page opened without a voting event");
                self.alert.show(Alert::danger(
                    "Votação não encontrada. Redirecionando para a página inicial...",
                ));
                self.redirect_at = Some(now + REDIRECT_DELAY);
                Vec::new()
            }
        }
    }

    pub fn update(&mut self, msg: Message) -> Vec<Command> {
        match msg {
            Message::ResultsLoaded(result) => {
                self.loading = false;
                match result {
                    Ok(results) => self.results = Some(results),
                    Err(e) => self.alert.failure("Falha ao carregar dados da votação", &e),
                }
            }
        }
        Vec::new()
    }

    pub fn redirect_at(&self) -> Option<Instant> {
        self.redirect_at
    }

    /// Yields [`Navigation::Landing`] once the redirect delay has elapsed.
    pub fn poll_navigation(&mut self, now: Instant) -> Option<Navigation> {
        match self.redirect_at {
            Some(at) if now >= at => {
                self.redirect_at = None;
                Some(Navigation::Landing)
            }
            _ => None,
        }
    }

    pub fn cards(&self) -> Vec<ResultCard> {
        self.results
            .as_ref()
            .map(|r| ranked_cards(&r.tally, r.total_votes))
            .unwrap_or_default()
    }
}

/// Percentage of `total` with one decimal, or "0" when nothing was counted.
pub fn percentage(votes: i64, total: i64) -> String {
    if total > 0 {
        format!("{:.1}", votes as f64 / total as f64 * 100.0)
    } else {
        "0".to_owned()
    }
}

/// Placeholder portrait keyed by name. The tally endpoint carries no photo URL.
pub fn avatar_url(name: &str) -> String {
    Url::parse_with_params(
        AVATAR_ENDPOINT,
        &[
            ("name", name),
            ("background", "random"),
            ("color", "fff"),
            ("size", "100"),
        ],
    )
    .map(String::from)
    .unwrap_or_else(|_| AVATAR_ENDPOINT.to_owned())
}

/// Orders the tally by votes, highest first. Ties keep the server order.
pub fn ranked_cards(tally: &[ParticipantTally], total_votes: i64) -> Vec<ResultCard> {
    let mut sorted: Vec<&ParticipantTally> = tally.iter().collect();
    sorted.sort_by(|a, b| b.total.cmp(&a.total));
    sorted
        .into_iter()
        .enumerate()
        .map(|(index, entry)| ResultCard {
            name: entry.name.clone(),
            total: entry.total,
            percentage: percentage(entry.total, total_votes),
            rank: Rank::from_position(index),
            avatar_url: avatar_url(&entry.name),
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
    fn cards_sorted_with_percentages() {
        let cards = ranked_cards(&[tally("A", 10), tally("B", 30), tally("C", 0)], 40);
        let view: Vec<(&str, &str, Rank)> = cards
            .iter()
            .map(|c| (c.name.as_str(), c.percentage.as_str(), c.rank))
            .collect();
        assert_eq!(
            view,
            vec![
                ("B", "75.0", Rank::First),
                ("A", "25.0", Rank::Second),
                ("C", "0.0", Rank::Third),
            ]
        );
    }

    #[test]
    fn zero_total_shows_zero() {
        let cards = ranked_cards(&[tally("A", 0), tally("B", 0)], 0);
        assert!(cards.iter().all(|c| c.percentage == "0"));
    }

    #[test]
    fn ties_keep_server_order() {
        let cards = ranked_cards(
            &[tally("X", 5), tally("Y", 5), tally("Z", 9), tally("W", 5)],
            24,
        );
        let names: Vec<&str> = cards.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Z", "X", "Y", "W"]);
        assert_eq!(cards[3].rank, Rank::Other);
    }

    #[test]
    fn avatar_url_encodes_name() {
        let url = avatar_url("João & Maria");
        assert!(url.starts_with("https://ui-avatars.com/api/?name="));
        assert!(!url.contains(' '));
        assert!(!url.contains("& "));
        assert!(url.ends_with("&background=random&color=fff&size=100"));
    }

    #[test]
    fn missing_voting_event_redirects_after_delay() {
        let start = Instant::now();
        let mut state = SuccessState::new(None);
        assert!(state.load_at(start).is_empty());
        assert!(state.alert.peek().is_some());
        assert_eq!(state.poll_navigation(start + Duration::from_secs(1)), None);
        assert_eq!(
            state.poll_navigation(start + REDIRECT_DELAY),
            Some(Navigation::Landing)
        );
        assert_eq!(state.poll_navigation(start + REDIRECT_DELAY), None);
    }

    #[test]
    fn present_voting_event_loads_results() {
        let mut state = SuccessState::new(Some(3));
        let cmds = state.load();
        assert!(matches!(
            cmds.as_slice(),
            [Command::LoadResults { voting_event_id: 3 }]
        ));
        assert!(state.loading);
        assert_eq!(state.redirect_at(), None);
    }
}
