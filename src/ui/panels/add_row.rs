// CsvEdit - ui/panels/add_row.rs
//
// "Add New Row" form and the Add Row / Download CSV buttons.

use crate::app::state::AppState;
use crate::ui::theme;

/// Render the add-row form below the grid.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let Some(doc) = state.session.document() else {
        return;
    };

    ui.heading("Add New Row");
    ui.add_space(4.0);

    for header in doc.headers() {
        // Only columns the user actually typed into enter the draft.
        let mut text = state.new_row.get(header).cloned().unwrap_or_default();
        let response = ui.add(
            egui::TextEdit::singleline(&mut text)
                .hint_text(header.as_str())
                .desired_width(theme::ADD_ROW_FIELD_WIDTH),
        );
        if response.changed() {
            state.new_row.insert(header.clone(), text);
        }
    }

    ui.add_space(4.0);
    ui.horizontal(|ui| {
        if ui.button("Add Row").clicked() {
            state.pending.add_row = true;
        }
        if ui.button("Download CSV").clicked() {
            state.pending.save_requested = true;
        }
    });
}
