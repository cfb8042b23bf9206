// CsvEdit - ui/panels/about.rs
//
// About dialog: centred, non-resizable, non-collapsible window.

use crate::app::state::AppState;
use crate::util::constants;

/// Render the About dialog (if `state.show_about` is true).
pub fn render(ctx: &egui::Context, state: &mut AppState) {
    if !state.show_about {
        return;
    }

    let mut open = true;
    egui::Window::new(format!("About {}", constants::APP_NAME))
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .min_width(320.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new(constants::APP_NAME).size(28.0).strong());
                ui.add_space(4.0);
                ui.label(
                    egui::RichText::new(format!("v{}", constants::APP_VERSION))
                        .size(14.0)
                        .weak(),
                );
            });

            ui.add_space(12.0);
            ui.separator();
            ui.add_space(8.0);

            ui.vertical_centered(|ui| {
                ui.label("View and edit CSV files: drop a file, edit cells,");
                ui.label("add or delete rows, then download the result.");
                ui.add_space(6.0);
                ui.label(egui::RichText::new(settings_line(state)).small().weak());
            });

            if !state.warnings.is_empty() {
                ui.add_space(8.0);
                ui.separator();
                ui.label(egui::RichText::new("Configuration warnings").strong());
                for warning in &state.warnings {
                    ui.label(egui::RichText::new(warning).small());
                }
            }

            ui.add_space(8.0);
        });

    if !open {
        state.show_about = false;
    }
}

/// One-line summary of the active settings.
fn settings_line(state: &AppState) -> String {
    let mut line = format!(
        "Delimiter: {:?}  \u{00b7}  Export name: {}",
        state.session.delimiter(),
        state.config.export_file_name
    );
    if state.debug_mode {
        line.push_str("  \u{00b7}  Debug logging on");
    }
    line
}
