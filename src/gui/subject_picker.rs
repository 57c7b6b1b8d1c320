use eframe::egui;

/// Stateless subject picker; reports a newly selected subject, if any.
pub fn subject_picker(
    ui: &mut egui::Ui,
    subjects: &[&str],
    current: Option<&str>,
) -> Option<String> {
    let mut selected = None;

    ui.horizontal_wrapped(|ui| {
        ui.label("Subject:");
        for subject in subjects {
            if ui.selectable_label(current == Some(*subject), *subject).clicked() {
                selected = Some(subject.to_string());
            }
        }
    });

    selected
}
