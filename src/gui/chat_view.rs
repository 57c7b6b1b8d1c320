use eframe::egui;

use super::{
    app::SomoApp,
    grade_selector::grade_selector,
    subject_picker::subject_picker,
};
use crate::core::{
    Turn,
    SUBJECTS,
};

pub fn show(ctx: &egui::Context, app: &mut SomoApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading("Somo");
            ui.label(egui::RichText::new("Bridging Education and Artificial Intelligence").weak());
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
        ui.separator();

        // Footer is laid out first so the transcript can take what is left.
        egui::TopBottomPanel::bottom("chat_input")
            .frame(egui::Frame::NONE.inner_margin(egui::Margin::symmetric(0, 6)))
            .show_inside(ui, |ui| {
                input_row(ui, app);
            });

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show_inside(ui, |ui| {
                transcript_area(ui, app);
            });
    });
}

fn transcript_area(ui: &mut egui::Ui, app: &mut SomoApp) {
    egui::ScrollArea::vertical().auto_shrink([false, false]).stick_to_bottom(true).show(
        ui,
        |ui| {
            for turn in app.session.transcript() {
                turn_bubble(ui, app, turn);
            }

            if app.session.is_awaiting() {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.weak("Thinking...");
                    if ui.small_button("Cancel").clicked() {
                        app.session.cancel();
                    }
                });
            }
        },
    );
}

fn turn_bubble(ui: &mut egui::Ui, app: &SomoApp, turn: &Turn) {
    let max_width = ui.available_width() * 0.8;
    let fill = if turn.is_user() {
        app.theme.user_bubble(ui.ctx())
    } else {
        app.theme.assistant_bubble(ui.ctx())
    };

    let layout = if turn.is_user() {
        egui::Layout::right_to_left(egui::Align::TOP)
    } else {
        egui::Layout::left_to_right(egui::Align::TOP)
    };

    ui.with_layout(layout, |ui| {
        egui::Frame::new()
            .fill(fill)
            .corner_radius(egui::CornerRadius::same(8))
            .inner_margin(egui::Margin::same(8))
            .show(ui, |ui| {
                ui.set_max_width(max_width);
                ui.vertical(|ui| {
                    ui.label(&turn.content);
                    ui.small(
                        egui::RichText::new(turn.created_at.format("%H:%M:%S").to_string())
                            .color(app.theme.muted(ui.ctx())),
                    );
                });
            });
    });
    ui.add_space(6.0);
}

fn input_row(ui: &mut egui::Ui, app: &mut SomoApp) {
    let context = app.study_context();
    let context_ready = context.is_some();
    let awaiting = app.session.is_awaiting();

    let mut send = false;

    ui.horizontal(|ui| {
        let edit = egui::TextEdit::singleline(&mut app.session.input)
            .hint_text("Ask your curriculum question...")
            .desired_width(ui.available_width() - 110.0);
        let response = ui.add_enabled(context_ready && !awaiting, edit);

        if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            send = true;
        }

        let mic_label = if app.session.is_listening() { "🎤 ..." } else { "🎤" };
        if ui
            .add_enabled(!awaiting, egui::Button::new(mic_label))
            .on_hover_text("Dictate your question")
            .clicked()
        {
            if app.session.is_listening() {
                app.session.stop_capture();
            } else {
                app.session.start_capture();
            }
        }

        let can_send = context_ready && !awaiting && !app.session.input.trim().is_empty();
        let ask_label = if awaiting { "Sending..." } else { "Ask" };
        if ui.add_enabled(can_send, egui::Button::new(ask_label)).clicked() {
            send = true;
        }
    });

    if send {
        if let Some(request) = app.session.submit(context) {
            app.task_manager.ask(app.settings.backend_url.clone(), request);
        }
    }
}
