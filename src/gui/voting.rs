use egui::{Color32, RichText};

use crate::controllers::voting::{Command, RosterView, VotingState};

const SELECTED: Color32 = Color32::from_rgb(0, 123, 255);

pub fn show(ui: &mut egui::Ui, state: &mut VotingState) -> Vec<Command> {
    let mut commands = Vec::new();

    ui.heading("Votação");
    ui.add_space(8.0);

    let selected_text = state
        .selected_event
        .and_then(|id| state.voting_events.iter().find(|v| v.id == id))
        .map(|v| v.description.clone())
        .unwrap_or_else(|| "Selecione uma votação".to_owned());

    let mut choice = state.selected_event;
    egui::ComboBox::from_id_salt("votacao-selector")
        .selected_text(selected_text)
        .width(320.0)
        .show_ui(ui, |ui| {
            ui.selectable_value(&mut choice, None, "Selecione uma votação");
            if state.voting_events.is_empty() {
                ui.add_enabled(false, egui::Label::new("Nenhuma votação disponível"));
            }
            for event in &state.voting_events {
                ui.selectable_value(&mut choice, Some(event.id), &event.description);
            }
        });
    if choice != state.selected_event {
        commands.extend(state.select_voting_event(choice));
    }

    ui.add_space(12.0);

    let mut clicked = None;
    match &state.roster {
        RosterView::Prompt => {
            ui.label("Selecione uma votação para ver os participantes");
        }
        RosterView::Loading => {
            ui.spinner();
        }
        RosterView::Failed => {
            ui.label("Erro ao carregar participantes");
        }
        RosterView::Loaded(roster) if roster.is_empty() => {
            ui.label("Nenhum participante nesta votação");
        }
        RosterView::Loaded(roster) => {
            ui.horizontal_wrapped(|ui| {
                for participant in roster {
                    let selected = state.is_selected(participant.id);
                    let stroke = if selected {
                        egui::Stroke::new(3.0, SELECTED)
                    } else {
                        ui.visuals().widgets.noninteractive.bg_stroke
                    };
                    let card = egui::Frame::group(ui.style())
                        .stroke(stroke)
                        .inner_margin(egui::Margin::same(12.0))
                        .show(ui, |ui| {
                            ui.set_min_width(140.0);
                            ui.vertical_centered(|ui| {
                                ui.label(RichText::new(&participant.name).strong().size(16.0));
                                ui.hyperlink_to("foto", &participant.photo_url);
                            });
                        });
                    if card.response.interact(egui::Sense::click()).clicked() {
                        clicked = Some(participant.id);
                    }
                }
            });
        }
    }
    if let Some(id) = clicked {
        state.select_participant(id);
    }

    ui.add_space(16.0);
    let button = egui::Button::new(RichText::new("Votar").size(18.0));
    if ui.add_enabled(state.can_submit() && !state.loading, button).clicked() {
        commands.extend(state.submit_vote());
    }

    commands
}
