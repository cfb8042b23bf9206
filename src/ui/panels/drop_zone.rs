// CsvEdit - ui/panels/drop_zone.rs
//
// The "drag 'n' drop" target. Clicking it opens a native file dialog; files
// dropped anywhere on the window are handled by the top-level app, this
// panel only reflects the hover state.

use crate::app::state::AppState;
use crate::core::intake::IntakeConfig;
use crate::ui::theme;
use crate::util::constants;

/// Render the drop zone.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let hovering = ui.ctx().input(|i| !i.raw.hovered_files.is_empty());

    let frame = egui::Frame::group(ui.style())
        .stroke(egui::Stroke::new(2.0, theme::drop_zone_stroke(hovering)));

    let response = frame
        .show(ui, |ui| {
            ui.set_min_size(egui::vec2(ui.available_width(), theme::DROP_ZONE_HEIGHT));
            ui.centered_and_justified(|ui| {
                ui.label(prompt(state.session.intake_config(), hovering));
            });
        })
        .response
        .interact(egui::Sense::click());

    if response.clicked() {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV", constants::OPEN_DIALOG_EXTENSIONS)
            .pick_file()
        {
            state.pending.open_file = Some(path);
        }
    }
}

/// Text shown inside the drop zone, naming the accepted file patterns.
fn prompt(intake: &IntakeConfig, hovering: bool) -> String {
    if hovering {
        return "Release to load the file".to_string();
    }
    format!(
        "Drag 'n' drop a CSV file here ({}), or click to select one",
        intake.accepted_patterns.join(", ")
    )
}
