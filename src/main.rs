use eframe::egui;
use somo::gui::SomoApp;

fn main() -> eframe::Result {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 700.0])
            .with_min_inner_size([600.0, 480.0])
            .with_title("Somo"),
        ..Default::default()
    };

    eframe::run_native("somo", options, Box::new(|cc| Ok(Box::new(SomoApp::new(cc)))))
}
