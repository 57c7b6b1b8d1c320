use eframe::egui;
use serde::{
    Deserialize,
    Serialize,
};

use crate::api;

#[derive(Clone, Serialize, Deserialize)]
pub struct SettingsData {
    pub backend_url: String,
    pub capture_locale: String,
    pub dark_mode: bool,
}

impl Default for SettingsData {
    fn default() -> Self {
        Self {
            backend_url: api::DEFAULT_BASE_URL.to_string(),
            capture_locale: "en-KE".to_string(),
            dark_mode: true,
        }
    }
}

pub struct SettingsModal {
    open: bool,
    draft: SettingsData,
}

impl SettingsModal {
    pub fn new() -> Self {
        Self { open: false, draft: SettingsData::default() }
    }

    pub fn open_settings(&mut self, current: SettingsData) {
        self.draft = current;
        self.open = true;
    }

    /// Returns the edited settings when the user saves.
    pub fn show(&mut self, ctx: &egui::Context) -> Option<SettingsData> {
        if !self.open {
            return None;
        }

        let mut saved = None;

        let modal = egui::Modal::new(egui::Id::new("settings_modal")).show(ctx, |ui| {
            ui.set_width(380.0);

            ui.heading("Settings");
            ui.add_space(10.0);

            ui.label("Backend URL");
            ui.text_edit_singleline(&mut self.draft.backend_url);
            ui.add_space(6.0);

            ui.label("Speech locale");
            ui.text_edit_singleline(&mut self.draft.capture_locale)
                .on_hover_text("Fixed for the lifetime of the capture adapter; takes effect on restart.");

            ui.add_space(12.0);

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Save").clicked() {
                    // Trailing slashes break the endpoint joins.
                    self.draft.backend_url = self.draft.backend_url.trim_end_matches('/').to_string();
                    saved = Some(self.draft.clone());
                    ui.close();
                }
                if ui.button("Cancel").clicked() {
                    ui.close();
                }
            });
        });

        if modal.should_close() {
            self.open = false;
        }

        saved
    }
}

impl Default for SettingsModal {
    fn default() -> Self {
        Self::new()
    }
}
