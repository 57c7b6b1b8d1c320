use std::time::Instant;

use eframe::egui;

use super::{
    app::SomoApp,
    grade_selector::grade_selector,
    subject_picker::subject_picker,
};
use crate::{
    core::SUBJECTS,
    review::{
        DeckPhase,
        TransitionKind,
    },
};

pub fn show(ctx: &egui::Context, app: &mut SomoApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading("Practice with Flashcards");
            ui.label(egui::RichText::new("Select a grade and subject to generate flashcards.").weak());
        });
        ui.add_space(8.0);

        if let Some(grade) = grade_selector(ui, app.grade) {
            app.grade = Some(grade);
        }
        if app.grade.is_some() {
            if let Some(subject) = subject_picker(ui, SUBJECTS, app.subject.as_deref()) {
                app.subject = Some(subject);
            }
        }

        ui.add_space(8.0);

        let context = app.study_context();
        let loading = app.review.phase() == DeckPhase::Loading;
        let generate_label = if loading { "Generating..." } else { "Generate Flashcards" };

        if ui.add_enabled(context.is_some() && !loading, egui::Button::new(generate_label)).clicked()
        {
            if let Some(request) = app.review.regenerate(context.expect("button gated on context")) {
                app.task_manager.generate_flashcards(app.settings.backend_url.clone(), request);
            }
        }

        ui.add_space(12.0);

        match app.review.phase() {
            DeckPhase::Empty => {
                if let Some(notice) = app.review.notice() {
                    ui.colored_label(app.theme.orange(ui.ctx()), notice);
                }
            }
            DeckPhase::Loading => {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.weak("Generating flashcards...");
                });
            }
            DeckPhase::Ready => card_section(ui, app),
        }
    });
}

fn card_section(ui: &mut egui::Ui, app: &mut SomoApp) {
    let now = Instant::now();

    ui.label(format!(
        "Flashcard {} of {}",
        app.review.current_index() + 1,
        app.review.deck_len()
    ));
    ui.add_space(4.0);

    // The transition lock drives the fade/flip; rendering only reads it.
    let opacity = match app.review.transition() {
        Some(transition) => {
            let progress = transition.progress(now);
            match transition.kind {
                TransitionKind::Advancing => 1.0 - progress,
                TransitionKind::Flipping => (1.0 - 2.0 * progress).abs(),
            }
        }
        None => 1.0,
    };

    ui.scope(|ui| {
        ui.multiply_opacity(opacity);

        egui::Frame::new()
            .fill(app.theme.assistant_bubble(ui.ctx()))
            .corner_radius(egui::CornerRadius::same(8))
            .inner_margin(egui::Margin::same(16))
            .show(ui, |ui| {
                ui.set_width(ui.available_width().min(480.0));

                if let Some(card) = app.review.current_card() {
                    if app.review.answer_visible() {
                        ui.label(
                            egui::RichText::new(&card.question)
                                .small()
                                .color(app.theme.muted(ui.ctx())),
                        );
                        ui.add_space(6.0);
                        ui.label(egui::RichText::new(&card.answer).size(20.0).strong());
                    } else {
                        ui.label(egui::RichText::new(&card.question).size(18.0).strong());
                    }
                }
            });
    });

    ui.add_space(8.0);

    ui.horizontal(|ui| {
        if ui.button("Next Card").clicked() {
            app.review.advance(now);
        }

        let reveal_label = if app.review.answer_visible() { "Hide Answer" } else { "Show Answer" };
        if ui.button(reveal_label).clicked() {
            app.review.toggle_answer(now);
        }
    });

    if let Some(notice) = app.review.notice() {
        ui.add_space(6.0);
        ui.colored_label(app.theme.green(ui.ctx()), notice);
    }
}
