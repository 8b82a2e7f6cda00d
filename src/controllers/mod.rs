//! Page controllers.
//!
//! Every page follows the same loop: an intent method on the state returns
//! [`Command`]s, the GUI runs each command on the tokio runtime, and the
//! resulting message is fed back through `update`, which may return more
//! commands. Nothing in here touches egui.

use std::time::{Duration, Instant};

use log::error;
use thiserror::Error;

pub mod admin;
pub mod reports;
pub mod success;
pub mod voting;

/// How long a banner stays on screen.
pub const ALERT_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Danger,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub message: String,
    pub kind: AlertKind,
    raised_at: Instant,
}

impl Alert {
    pub fn success(message: impl Into<String>) -> Self {
        Self::raised_at(message, AlertKind::Success, Instant::now())
    }

    pub fn danger(message: impl Into<String>) -> Self {
        Self::raised_at(message, AlertKind::Danger, Instant::now())
    }

    pub fn raised_at(message: impl Into<String>, kind: AlertKind, at: Instant) -> Self {
        Self {
            message: message.into(),
            kind,
            raised_at: at,
        }
    }

    pub fn is_visible_at(&self, now: Instant) -> bool {
        now.duration_since(self.raised_at) < ALERT_TTL
    }

    /// Time left before the banner disappears, used to schedule a repaint.
    pub fn remaining_at(&self, now: Instant) -> Duration {
        ALERT_TTL.saturating_sub(now.duration_since(self.raised_at))
    }
}

/// Single banner slot shared by a page. A new alert replaces the old one.
#[derive(Debug, Default)]
pub struct AlertSlot {
    current: Option<Alert>,
}

impl AlertSlot {
    pub fn show(&mut self, alert: Alert) {
        self.current = Some(alert);
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.show(Alert::success(message));
    }

    /// Logs `cause` and raises a danger banner with the user-facing `message`.
    pub fn failure(&mut self, message: &str, cause: &dyn std::fmt::Display) {
        error!("{}: {}", message, cause);
        self.show(Alert::danger(message));
    }

    /// Raises the banner for a failed client-side check.
    pub fn reject(&mut self, err: ValidationError) {
        error!("Validation failed: {}", err);
        self.show(Alert::danger(err.to_string()));
    }

    /// The banner to draw at `now`; expired banners are dropped.
    pub fn visible(&mut self, now: Instant) -> Option<&Alert> {
        if self.current.as_ref().is_some_and(|a| !a.is_visible_at(now)) {
            self.current = None;
        }
        self.current.as_ref()
    }

    #[cfg(test)]
    pub fn peek(&self) -> Option<&Alert> {
        self.current.as_ref()
    }
}

/// Client-side checks that fail before any request is issued. The display
/// text doubles as the banner message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Nome e URL da foto são obrigatórios")]
    ParticipantFieldsRequired,
    #[error("Descrição é obrigatória")]
    DescriptionRequired,
    #[error("Selecione um participante")]
    ParticipantRequired,
    #[error("Selecione uma votação e um participante")]
    SelectionRequired,
}

/// Page transitions a controller can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// The voting page, which doubles as the landing page.
    Landing,
    Success { voting_event_id: i64 },
}

/// Monotonic tag attached to selection-scoped requests. A response whose tag
/// does not match the current one was issued for an older selection.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Generation(u64);

impl Generation {
    pub fn bump(&mut self) -> Generation {
        self.0 += 1;
        *self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alert_expires_after_three_seconds() {
        let start = Instant::now();
        let alert = Alert::raised_at("ok", AlertKind::Success, start);
        assert!(alert.is_visible_at(start + Duration::from_millis(2999)));
        assert!(!alert.is_visible_at(start + ALERT_TTL));
        assert_eq!(alert.remaining_at(start + Duration::from_secs(1)), Duration::from_secs(2));
        assert_eq!(alert.remaining_at(start + Duration::from_secs(10)), Duration::ZERO);
    }

    #[test]
    fn error_banners_expire_like_success_banners() {
        let start = Instant::now();
        let mut slot = AlertSlot::default();
        slot.show(Alert::raised_at("boom", AlertKind::Danger, start));
        assert!(slot.visible(start).is_some());
        assert!(slot.visible(start + Duration::from_secs(4)).is_none());
        assert!(slot.peek().is_none());
    }

    #[test]
    fn newer_alert_replaces_older() {
        let mut slot = AlertSlot::default();
        slot.success("first");
        slot.failure("second", &"cause");
        let alert = slot.peek().unwrap();
        assert_eq!(alert.message, "second");
        assert_eq!(alert.kind, AlertKind::Danger);
    }

    #[test]
    fn generation_bump_is_monotonic() {
        let mut g = Generation::default();
        let first = g.bump();
        let second = g.bump();
        assert_ne!(first, second);
        assert_eq!(g, second);
    }
}
