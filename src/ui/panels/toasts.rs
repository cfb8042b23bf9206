// CsvEdit - ui/panels/toasts.rs
//
// Transient success/failure toasts stacked in the bottom-right corner.
// Reads the notification log; never modifies it.

use crate::app::state::AppState;
use crate::ui::theme;
use crate::util::constants;
use chrono::{Duration, Utc};

/// Render recent notifications and schedule a repaint for their expiry.
pub fn render(ctx: &egui::Context, state: &AppState) {
    let window = Duration::seconds(state.config.toast_secs);
    let now = Utc::now();
    let recent = state.notifications.recent(now, window);
    if recent.is_empty() {
        return;
    }

    egui::Area::new(egui::Id::new("toasts"))
        .anchor(
            egui::Align2::RIGHT_BOTTOM,
            [
                -theme::TOAST_MARGIN,
                -(theme::STATUS_BAR_HEIGHT + theme::TOAST_MARGIN),
            ],
        )
        .order(egui::Order::Foreground)
        .interactable(false)
        .show(ctx, |ui| {
            for notification in recent.iter().take(constants::MAX_VISIBLE_TOASTS) {
                egui::Frame::popup(ui.style())
                    .fill(theme::toast_fill(notification.level, state.dark_mode))
                    .show(ui, |ui| {
                        ui.set_width(theme::TOAST_WIDTH);
                        ui.label(
                            egui::RichText::new(&notification.message)
                                .color(theme::toast_text(state.dark_mode)),
                        );
                    });
                ui.add_space(6.0);
            }
        });

    // Wake up again when the oldest visible toast expires.
    if let Some(oldest) = recent.last() {
        let remaining = (oldest.at + window - now)
            .to_std()
            .unwrap_or(std::time::Duration::ZERO);
        ctx.request_repaint_after(remaining);
    }
}
