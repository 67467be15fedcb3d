use crate::window::{numeric_field, WindowKind, WindowLifecycle};
use eframe::egui;
use matika_core::input::{parse_bounds, BOUND_MAX_LEN};
use matika_core::Bounds;
use tracing::info;

/// Lets the user pick a new operand range. Owned by the root window for as
/// long as it is open.
pub struct SettingsWindow {
    initial: Bounds,
    min_input: String,
    max_input: String,
}

impl SettingsWindow {
    pub fn new(initial: Bounds) -> Self {
        Self {
            initial,
            min_input: String::new(),
            max_input: String::new(),
        }
    }

    /// `Some` only when both fields parse and min < max.
    pub fn pending_bounds(&self) -> Option<Bounds> {
        parse_bounds(&self.min_input, &self.max_input)
    }
}

impl WindowLifecycle for SettingsWindow {
    /// Bounds to apply when the user pressed Apply this frame.
    type Output = Option<Bounds>;

    fn kind(&self) -> WindowKind {
        WindowKind::Settings
    }

    fn build(&mut self, ui: &mut egui::Ui) -> Option<Bounds> {
        let mut applied = None;

        egui::Grid::new("settings_grid")
            .num_columns(2)
            .spacing([10.0, 10.0])
            .show(ui, |ui| {
                ui.label("Maximal value: ");
                numeric_field(ui, &mut self.max_input, BOUND_MAX_LEN, 60.0);
                ui.end_row();

                ui.label("Minimal value: ");
                numeric_field(ui, &mut self.min_input, BOUND_MAX_LEN, 60.0);
                ui.end_row();

                ui.label("");
                let pending = parse_bounds(&self.min_input, &self.max_input);
                if ui
                    .add_enabled(pending.is_some(), egui::Button::new("Apply"))
                    .clicked()
                {
                    applied = pending;
                }
                ui.end_row();
            });

        applied
    }

    fn on_open(&mut self) {
        self.min_input = self.initial.min.to_string();
        self.max_input = self.initial.max.to_string();
        info!(
            window = ?self.kind(),
            min = self.initial.min,
            max = self.initial.max,
            "settings window opened"
        );
    }

    fn on_close(&mut self) {
        info!(window = ?self.kind(), "settings window closed");
    }
}
