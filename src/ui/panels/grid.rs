// CsvEdit - ui/panels/grid.rs
//
// Editable table: one text field per cell plus a Delete button per row.
//
// Only the rows inside the viewport are laid out (`show_rows`), so frame
// cost does not grow with the document. Columns use a fixed width so the
// header row lines up with the virtualised body.
//
// Changes are collected into `state.pending` and applied after the frame,
// so the document is only borrowed immutably while it is drawn.

use crate::app::state::{AppState, CellEdit};
use crate::ui::theme;
use std::ops::Range;

/// Render the record grid (central area).
///
/// Returns the range of record positions that were drawn this frame.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) -> Range<usize> {
    let Some(doc) = state.session.document() else {
        return 0..0;
    };

    let mut edits: Vec<CellEdit> = Vec::new();
    let mut deletes = Vec::new();
    let row_height = theme::ROW_HEIGHT;
    let cell_size = egui::vec2(theme::CELL_WIDTH, row_height);

    let drawn = egui::ScrollArea::horizontal()
        .id_salt("record_grid_h")
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            // Header row stays outside the vertical scroll area.
            ui.horizontal(|ui| {
                for header in doc.headers() {
                    let label =
                        egui::Label::new(egui::RichText::new(header).strong()).truncate();
                    ui.add_sized(cell_size, label);
                }
                ui.add_sized(
                    cell_size,
                    egui::Label::new(egui::RichText::new("Actions").strong()),
                );
            });
            ui.separator();

            egui::ScrollArea::vertical()
                .id_salt("record_grid_v")
                .auto_shrink([false; 2])
                .show_rows(ui, row_height, doc.len(), |ui, row_range| {
                    let Some(records) = doc.records().get(row_range.clone()) else {
                        return 0..0;
                    };
                    for record in records {
                        let id = record.id();
                        ui.horizontal(|ui| {
                            for (col, header) in doc.headers().iter().enumerate() {
                                let mut text = record.display_value(header).to_owned();
                                // Stable per-cell id so focus follows the cell
                                // while rows scroll in and out of view.
                                let edit = egui::TextEdit::singleline(&mut text)
                                    .id(egui::Id::new(("cell", id.get(), col)));
                                if ui.add_sized(cell_size, edit).changed() {
                                    edits.push(CellEdit {
                                        id,
                                        column: header.clone(),
                                        value: text,
                                    });
                                }
                            }

                            let delete = egui::Button::new(
                                egui::RichText::new("Delete").color(theme::DESTRUCTIVE_TEXT),
                            )
                            .fill(theme::DESTRUCTIVE);
                            if ui.add(delete).clicked() {
                                deletes.push(id);
                            }
                        });
                    }
                    row_range
                })
                .inner
        })
        .inner;

    state.pending.edits.extend(edits);
    state.pending.deletes.extend(deletes);
    drawn
}
