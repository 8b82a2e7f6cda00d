use egui::{Color32, RichText};

use crate::controllers::success::{Command, Rank, SuccessState};

fn rank_color(rank: Rank) -> Color32 {
    match rank {
        Rank::First => Color32::from_rgb(255, 215, 0),
        Rank::Second => Color32::from_rgb(192, 192, 192),
        Rank::Third => Color32::from_rgb(205, 127, 50),
        Rank::Other => Color32::from_rgb(108, 117, 125),
    }
}

pub fn show(ui: &mut egui::Ui, state: &mut SuccessState) -> Vec<Command> {
    if state.loading {
        ui.spinner();
        return Vec::new();
    }
    let Some(results) = &state.results else {
        return Vec::new();
    };

    ui.heading("Voto registrado com sucesso!");
    ui.label(RichText::new(&results.voting_event.description).size(20.0));
    ui.label(format!("Total de votos: {}", results.total_votes));
    ui.add_space(12.0);

    let cards = state.cards();
    if cards.is_empty() {
        ui.label("Nenhum participante nesta votação");
        return Vec::new();
    }

    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.horizontal_wrapped(|ui| {
            for card in &cards {
                egui::Frame::group(ui.style())
                    .stroke(egui::Stroke::new(3.0, rank_color(card.rank)))
                    .inner_margin(egui::Margin::same(12.0))
                    .show(ui, |ui| {
                        ui.set_min_width(160.0);
                        ui.vertical_centered(|ui| {
                            ui.label(RichText::new(&card.name).strong().size(18.0));
                            ui.hyperlink_to("avatar", &card.avatar_url);
                            ui.label(
                                RichText::new(format!("{}%", card.percentage))
                                    .size(24.0)
                                    .color(rank_color(card.rank)),
                            );
                            ui.label(format!("({} votos)", card.total));
                        });
                    });
            }
        });
    });

    Vec::new()
}
