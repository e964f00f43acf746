//! slowPick - a date picker for slowOS

mod app;

use app::SlowPickApp;
use eframe::NativeOptions;

fn main() -> eframe::Result<()> {
    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size([320.0, 470.0])
        .with_title("slowPick");

    if let Some(pos) = datecore::cascade_position() {
        viewport = viewport.with_position(pos);
    }

    let options = NativeOptions {
        viewport,
        ..Default::default()
    };
    eframe::run_native("slowPick", options, Box::new(move |cc| {
        datecore::SlowTheme::default().apply(&cc.egui_ctx);
        Box::new(SlowPickApp::new(cc))
    }))
}
