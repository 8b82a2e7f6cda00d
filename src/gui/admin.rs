use egui::RichText;

use crate::controllers::admin::{AdminState, AdminTab, Command, DeleteTarget};

pub fn show(ui: &mut egui::Ui, state: &mut AdminState) -> Vec<Command> {
    let mut commands = Vec::new();

    ui.horizontal(|ui| {
        ui.selectable_value(&mut state.tab, AdminTab::Participants, "Participantes");
        ui.selectable_value(&mut state.tab, AdminTab::VotingEvents, "Votações");
    });
    ui.separator();

    match state.tab {
        AdminTab::Participants => participants_table(ui, state, &mut commands),
        AdminTab::VotingEvents => voting_events_table(ui, state, &mut commands),
    }

    let ctx = ui.ctx().clone();
    participant_dialog(&ctx, state, &mut commands);
    voting_event_dialog(&ctx, state, &mut commands);
    delete_dialog(&ctx, state, &mut commands);
    roster_dialog(&ctx, state, &mut commands);

    commands
}

fn participants_table(ui: &mut egui::Ui, state: &mut AdminState, commands: &mut Vec<Command>) {
    let mut edit = None;
    let mut delete = None;
    egui::Grid::new("participants-table")
        .striped(true)
        .num_columns(4)
        .show(ui, |ui| {
            ui.strong("ID");
            ui.strong("Nome");
            ui.strong("Foto");
            ui.strong("Ações");
            ui.end_row();

            if state.participants.is_empty() {
                ui.label("Nenhum participante encontrado");
                ui.end_row();
            }
            for participant in &state.participants {
                ui.label(participant.id.to_string());
                ui.label(&participant.name);
                ui.hyperlink_to("foto", &participant.photo_url);
                ui.horizontal(|ui| {
                    if ui.button("Editar").clicked() {
                        edit = Some(participant.id);
                    }
                    if ui.button("Excluir").clicked() {
                        delete = Some(participant.id);
                    }
                });
                ui.end_row();
            }
        });

    if let Some(id) = edit {
        commands.extend(state.open_participant_form(Some(id)));
    }
    if let Some(id) = delete {
        state.request_delete(DeleteTarget::Participant(id));
    }
    ui.add_space(8.0);
    if ui.button("Adicionar Participante").clicked() {
        commands.extend(state.open_participant_form(None));
    }
}

fn voting_events_table(ui: &mut egui::Ui, state: &mut AdminState, commands: &mut Vec<Command>) {
    let mut edit = None;
    let mut delete = None;
    let mut manage = None;
    egui::Grid::new("votacoes-table")
        .striped(true)
        .num_columns(3)
        .show(ui, |ui| {
            ui.strong("ID");
            ui.strong("Descrição");
            ui.strong("Ações");
            ui.end_row();

            if state.voting_events.is_empty() {
                ui.label("Nenhuma votação encontrada");
                ui.end_row();
            }
            for event in &state.voting_events {
                ui.label(event.id.to_string());
                ui.label(&event.description);
                ui.horizontal(|ui| {
                    if ui.button("Editar").clicked() {
                        edit = Some(event.id);
                    }
                    if ui.button("Excluir").clicked() {
                        delete = Some(event.id);
                    }
                    if ui.button("Gerenciar Participantes").clicked() {
                        manage = Some(event.id);
                    }
                });
                ui.end_row();
            }
        });

    if let Some(id) = edit {
        commands.extend(state.open_voting_event_form(Some(id)));
    }
    if let Some(id) = delete {
        state.request_delete(DeleteTarget::VotingEvent(id));
    }
    if let Some(id) = manage {
        commands.extend(state.manage_roster(id));
    }
    ui.add_space(8.0);
    if ui.button("Adicionar Votação").clicked() {
        commands.extend(state.open_voting_event_form(None));
    }
}

fn participant_dialog(ctx: &egui::Context, state: &mut AdminState, commands: &mut Vec<Command>) {
    let Some(form) = state.participant_form.as_mut() else {
        return;
    };
    let mut open = true;
    let mut submit = false;
    egui::Window::new(form.title())
        .id(egui::Id::new("participante-modal"))
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            egui::Grid::new("participante-form").num_columns(2).show(ui, |ui| {
                ui.label("Nome:");
                ui.text_edit_singleline(&mut form.name);
                ui.end_row();
                ui.label("URL da Foto:");
                ui.text_edit_singleline(&mut form.photo_url);
                ui.end_row();
            });
            submit = ui.button("Salvar").clicked();
        });
    if !open {
        state.close_participant_form();
    } else if submit {
        commands.extend(state.submit_participant());
    }
}

fn voting_event_dialog(ctx: &egui::Context, state: &mut AdminState, commands: &mut Vec<Command>) {
    let Some(form) = state.voting_event_form.as_mut() else {
        return;
    };
    let mut open = true;
    let mut submit = false;
    egui::Window::new(form.title())
        .id(egui::Id::new("votacao-modal"))
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("Descrição:");
                ui.text_edit_singleline(&mut form.description);
            });
            submit = ui.button("Salvar").clicked();
        });
    if !open {
        state.close_voting_event_form();
    } else if submit {
        commands.extend(state.submit_voting_event());
    }
}

fn delete_dialog(ctx: &egui::Context, state: &mut AdminState, commands: &mut Vec<Command>) {
    let Some(target) = state.pending_delete else {
        return;
    };
    let mut confirmed = false;
    let mut cancelled = false;
    egui::Window::new("Confirmar exclusão")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .show(ctx, |ui| {
            ui.label(target.prompt());
            ui.horizontal(|ui| {
                confirmed = ui.button("OK").clicked();
                cancelled = ui.button("Cancelar").clicked();
            });
        });
    if confirmed {
        commands.extend(state.confirm_delete());
    } else if cancelled {
        state.cancel_delete();
    }
}

fn roster_dialog(ctx: &egui::Context, state: &mut AdminState, commands: &mut Vec<Command>) {
    let Some(dialog) = state.roster.as_mut() else {
        return;
    };
    let mut open = true;
    let mut add = false;
    let participants = &state.participants;
    egui::Window::new(dialog.title.clone())
        .id(egui::Id::new("votacao-participantes-modal"))
        .open(&mut open)
        .collapsible(false)
        .show(ctx, |ui| {
            if dialog.members.is_empty() {
                ui.label("Nenhum participante nesta votação");
            }
            for member in &dialog.members {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(&member.name).strong());
                    ui.hyperlink_to("foto", &member.photo_url);
                });
            }
            ui.separator();

            let picked = dialog
                .pick
                .and_then(|id| participants.iter().find(|p| p.id == id))
                .map(|p| p.name.clone())
                .unwrap_or_else(|| "Selecione um participante".to_owned());
            ui.horizontal(|ui| {
                egui::ComboBox::from_id_salt("participante-id")
                    .selected_text(picked)
                    .show_ui(ui, |ui| {
                        ui.selectable_value(&mut dialog.pick, None, "Selecione um participante");
                        for participant in participants {
                            ui.selectable_value(
                                &mut dialog.pick,
                                Some(participant.id),
                                &participant.name,
                            );
                        }
                    });
                add = ui.button("Adicionar").clicked();
            });
        });
    if !open {
        state.close_roster();
    } else if add {
        commands.extend(state.add_to_roster());
    }
}
