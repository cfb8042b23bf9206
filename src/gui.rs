// CsvEdit - gui.rs
//
// Top-level eframe::App implementation.
// Wires together the UI panels, file drops, and the export dialog.

use crate::app::state::AppState;
use crate::ui;
use crate::util::constants;

/// The CsvEdit application.
pub struct CsvEditApp {
    pub state: AppState,
    /// Title last sent to the viewport.
    title: String,
    /// Theme last applied to the context.
    applied_dark_mode: Option<bool>,
}

impl CsvEditApp {
    /// Create a new application instance with the given state.
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            title: String::new(),
            applied_dark_mode: None,
        }
    }

    /// Load the first file dropped onto the window this frame, if any.
    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        let Some(file) = dropped.into_iter().next() else {
            return;
        };

        let state = &mut self.state;
        let loaded = if let Some(path) = file.path.as_deref() {
            tracing::debug!(path = %path.display(), mime = %file.mime, "File dropped");
            state
                .session
                .load_file(path, &file.mime, &mut state.notifications)
        } else if let Some(bytes) = file.bytes.as_deref() {
            tracing::debug!(name = %file.name, mime = %file.mime, "File contents dropped");
            state
                .session
                .load_bytes(&file.name, &file.mime, bytes, &mut state.notifications)
        } else {
            tracing::warn!(name = %file.name, "Dropped file has neither path nor contents");
            return;
        };

        if loaded.is_ok() {
            state.new_row.clear();
        }
    }

    /// Ask for a destination and write the document there.
    fn save_with_dialog(&mut self) {
        if self.state.session.document().is_none() {
            return;
        }
        if let Some(dest) = rfd::FileDialog::new()
            .add_filter("CSV", constants::OPEN_DIALOG_EXTENSIONS)
            .set_file_name(&self.state.config.export_file_name)
            .save_file()
        {
            let state = &mut self.state;
            // The outcome is reported through the notification log.
            let _ = state.session.export_to_path(&dest, &mut state.notifications);
        }
    }

    fn window_title(&self) -> String {
        match self.state.session.source_name() {
            Some(name) => format!("{name} - {}", constants::APP_NAME),
            None => format!("{} v{}", constants::APP_NAME, constants::APP_VERSION),
        }
    }
}

impl eframe::App for CsvEditApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_dropped_files(ctx);

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open CSV\u{2026}").clicked() {
                        if let Some(path) = rfd::FileDialog::new()
                            .add_filter("CSV", constants::OPEN_DIALOG_EXTENSIONS)
                            .pick_file()
                        {
                            self.state.pending.open_file = Some(path);
                        }
                        ui.close_menu();
                    }
                    let has_document = self.state.session.document().is_some();
                    ui.add_enabled_ui(has_document, |ui| {
                        if ui.button("Download CSV\u{2026}").clicked() {
                            self.state.pending.save_requested = true;
                            ui.close_menu();
                        }
                        if ui.button("Close").clicked() {
                            self.state.session.close();
                            self.state.new_row.clear();
                            ui.close_menu();
                        }
                    });
                    ui.separator();
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
                ui.menu_button("View", |ui| {
                    let label = if self.state.dark_mode {
                        "Light Theme"
                    } else {
                        "Dark Theme"
                    };
                    if ui.button(label).clicked() {
                        self.state.dark_mode = !self.state.dark_mode;
                        ui.close_menu();
                    }
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("\u{24d8}").on_hover_text("About").clicked() {
                        self.state.show_about = true;
                    }
                });
            });
        });

        // Status bar
        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(ui::theme::STATUS_BAR_HEIGHT)
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    ui.label(self.state.status_message());
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if let Some(summary) = self.state.document_summary() {
                            ui.label(summary);
                        }
                    });
                });
            });

        // Add-row form (bottom), shown once rows exist.
        if self.state.session.has_rows() {
            egui::TopBottomPanel::bottom("add_row")
                .resizable(true)
                .show(ctx, |ui| {
                    egui::ScrollArea::vertical()
                        .id_salt("add_row_form")
                        .show(ui, |ui| {
                            ui::panels::add_row::render(ui, &mut self.state);
                        });
                });
        }

        // Central panel: drop zone and grid
        egui::CentralPanel::default().show(ctx, |ui| {
            ui::panels::drop_zone::render(ui, &mut self.state);
            ui.add_space(8.0);

            if self.state.session.has_rows() {
                ui::panels::grid::render(ui, &mut self.state);
            } else {
                ui.centered_and_justified(|ui| match self.state.session.document() {
                    Some(_) => ui.label("The loaded file has no data rows."),
                    None => ui.label("No CSV file loaded."),
                });
            }
        });

        ui::panels::about::render(ctx, &mut self.state);
        ui::panels::toasts::render(ctx, &self.state);

        // Apply everything the panels asked for this frame.
        let had_actions = !self.state.pending.is_empty();
        if self.state.apply_pending() {
            self.save_with_dialog();
        }
        if had_actions {
            ctx.request_repaint();
        }

        if self.applied_dark_mode != Some(self.state.dark_mode) {
            let visuals = if self.state.dark_mode {
                egui::Visuals::dark()
            } else {
                egui::Visuals::light()
            };
            ctx.set_visuals(visuals);
            self.applied_dark_mode = Some(self.state.dark_mode);
        }

        let title = self.window_title();
        if title != self.title {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title.clone()));
            self.title = title;
        }
    }
}

/// Load a file given on the command line before the first frame.
pub fn load_initial_file(state: &mut AppState, path: &std::path::Path) {
    // No media type is known for a command-line path; the name patterns decide.
    if let Err(e) = state
        .session
        .load_file(path, "", &mut state.notifications)
    {
        tracing::error!(path = %path.display(), error = %e, "Failed to load initial file");
    }
}
