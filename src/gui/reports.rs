use egui::RichText;

use crate::controllers::reports::{
    hour_rows, participant_rows, Command, Panels, Report, ReportsState, PANEL_EMPTY, PANEL_ERROR,
    PANEL_LOADING,
};

pub fn show(ui: &mut egui::Ui, state: &mut ReportsState) -> Vec<Command> {
    let mut commands = Vec::new();

    ui.heading("Relatórios");
    ui.add_space(8.0);

    let selected_text = state
        .selected_event
        .and_then(|id| state.voting_events.iter().find(|v| v.id == id))
        .map(|v| v.description.clone())
        .unwrap_or_else(|| "Selecione uma votação".to_owned());
    let mut choice = state.selected_event;
    egui::ComboBox::from_id_salt("report-votacao-select")
        .selected_text(selected_text)
        .width(320.0)
        .show_ui(ui, |ui| {
            ui.selectable_value(&mut choice, None, "Selecione uma votação");
            for event in &state.voting_events {
                ui.selectable_value(&mut choice, Some(event.id), &event.description);
            }
        });
    if choice != state.selected_event {
        commands.extend(state.select_voting_event(choice));
    }

    ui.add_space(12.0);
    match &state.panels {
        Panels::Hidden => {}
        Panels::Loading => {
            for title in PANEL_TITLES {
                panel(ui, title, |ui| {
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.label(PANEL_LOADING);
                    });
                });
            }
        }
        Panels::Failed => {
            for title in PANEL_TITLES {
                panel(ui, title, |ui| {
                    ui.colored_label(ui.visuals().error_fg_color, PANEL_ERROR);
                });
            }
        }
        Panels::Ready(report) => ready(ui, report),
    }

    commands
}

const PANEL_TITLES: [&str; 3] = ["Total de Votos", "Votos por Participante", "Votos por Hora"];

fn panel(ui: &mut egui::Ui, title: &str, body: impl FnOnce(&mut egui::Ui)) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(RichText::new(title).strong());
        ui.add_space(4.0);
        body(ui);
    });
    ui.add_space(8.0);
}

fn ready(ui: &mut egui::Ui, report: &Report) {
    panel(ui, PANEL_TITLES[0], |ui| {
        ui.horizontal(|ui| {
            ui.label(RichText::new(report.total.to_string()).size(28.0).strong());
            ui.label("votos totais");
        });
    });

    panel(ui, PANEL_TITLES[1], |ui| {
        let rows = participant_rows(&report.by_participant);
        if rows.is_empty() {
            ui.label(PANEL_EMPTY);
            return;
        }
        egui::Grid::new("votes-by-participant")
            .striped(true)
            .num_columns(3)
            .show(ui, |ui| {
                ui.strong("Participante");
                ui.strong("Total de Votos");
                ui.strong("Porcentagem");
                ui.end_row();
                for row in rows {
                    ui.label(row.name);
                    ui.label(row.total.to_string());
                    ui.label(format!("{}%", row.percentage));
                    ui.end_row();
                }
            });
    });

    panel(ui, PANEL_TITLES[2], |ui| {
        let rows = hour_rows(&report.by_hour);
        if rows.is_empty() {
            ui.label(PANEL_EMPTY);
            return;
        }
        egui::Grid::new("votes-by-hour")
            .striped(true)
            .num_columns(2)
            .show(ui, |ui| {
                ui.strong("Hora");
                ui.strong("Total de Votos");
                ui.end_row();
                for row in rows {
                    ui.label(row.label);
                    ui.label(row.total.to_string());
                    ui.end_row();
                }
            });
    });
}
