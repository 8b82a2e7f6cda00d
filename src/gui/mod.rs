use std::time::Instant;

use egui::{Color32, RichText};

use crate::config::StartPage;
use crate::controllers::{AlertKind, AlertSlot};
use state::{tasks, AppState, Page, Task};

mod admin;
mod reports;
pub mod state;
mod success;
mod voting;

pub struct PollingApp {
    state: AppState,
}

impl PollingApp {
    pub fn new(cc: &eframe::CreationContext<'_>, state: AppState) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::light());
        Self { state }
    }
}

impl eframe::App for PollingApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.drain();
        if let Some(navigation) = self.state.poll_navigation(Instant::now()) {
            self.state.navigate(navigation);
        }
        ui_main(ctx, &mut self.state);
        self.state.flush(ctx);
    }
}

fn ui_main(ctx: &egui::Context, state: &mut AppState) {
    let current = state.page.kind();

    egui::TopBottomPanel::top("header").show(ctx, |ui| {
        egui::Frame::default()
            .outer_margin(egui::vec2(0.0, 4.0))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.heading("Paredão");
                    ui.separator();
                    for (kind, label) in [
                        (StartPage::Voting, "Votar"),
                        (StartPage::Admin, "Administração"),
                        (StartPage::Reports, "Relatórios"),
                    ] {
                        if ui.selectable_label(current == kind, label).clicked() && current != kind {
                            state.open(kind, None);
                        }
                    }
                });
            });
    });

    egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!("API: {}", state.api().base_url()));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if is_loading(&state.page) {
                    ui.spinner();
                }
            });
        });
    });

    egui::CentralPanel::default().show(ctx, |ui| {
        let queued = match &mut state.page {
            Page::Voting(s) => {
                alert_banner(ui, &mut s.alert);
                tasks(voting::show(ui, s), Task::Voting)
            }
            Page::Admin(s) => {
                alert_banner(ui, &mut s.alert);
                tasks(admin::show(ui, s), Task::Admin)
            }
            Page::Reports(s) => tasks(reports::show(ui, s), Task::Reports),
            Page::Success(s) => {
                alert_banner(ui, &mut s.alert);
                if let Some(at) = s.redirect_at() {
                    ctx.request_repaint_after(at.saturating_duration_since(Instant::now()));
                }
                tasks(success::show(ui, s), Task::Success)
            }
        };
        state.queue(queued);
    });
}

fn is_loading(page: &Page) -> bool {
    match page {
        Page::Voting(s) => s.loading,
        Page::Success(s) => s.loading,
        Page::Admin(_) | Page::Reports(_) => false,
    }
}

/// Draws the page banner, if any, and schedules the repaint that hides it.
fn alert_banner(ui: &mut egui::Ui, slot: &mut AlertSlot) {
    let now = Instant::now();
    let Some(alert) = slot.visible(now) else {
        return;
    };
    let (fill, text) = match alert.kind {
        AlertKind::Success => (Color32::from_rgb(212, 237, 218), Color32::from_rgb(21, 87, 36)),
        AlertKind::Danger => (Color32::from_rgb(248, 215, 218), Color32::from_rgb(114, 28, 36)),
    };
    egui::Frame::none()
        .fill(fill)
        .rounding(4.0)
        .inner_margin(egui::Margin::same(8.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(&alert.message).color(text));
        });
    ui.ctx().request_repaint_after(alert.remaining_at(now));
    ui.add_space(8.0);
}
