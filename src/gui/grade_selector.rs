use eframe::egui;

use crate::core::GradeLevel;

/// Stateless grade picker; reports a newly selected level, if any.
pub fn grade_selector(ui: &mut egui::Ui, current: Option<GradeLevel>) -> Option<GradeLevel> {
    let mut selected = None;

    ui.horizontal(|ui| {
        ui.label("Grade:");
        for grade in [GradeLevel::Primary, GradeLevel::Secondary] {
            if ui.selectable_label(current == Some(grade), grade.label()).clicked() {
                selected = Some(grade);
            }
        }
    });

    selected
}
