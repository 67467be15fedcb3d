use crate::config::Config;
use crate::settings::SettingsWindow;
use crate::window::{numeric_field, WindowKind, WindowLifecycle};
use eframe::egui;
use matika_core::input::{parse_integer, ANSWER_MAX_LEN};
use matika_core::{Bounds, ExerciseModel};
use tracing::{info, warn};

pub struct RootWindow {
    model: ExerciseModel,
    answer_input: String,
    settings: Option<SettingsWindow>,
}

impl RootWindow {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: &Config) -> Self {
        let mut window = Self::from_config(config);
        window.on_open();
        window
    }

    fn from_config(config: &Config) -> Self {
        Self {
            model: ExerciseModel::with_bounds(config.bounds),
            answer_input: String::new(),
            settings: None,
        }
    }

    fn submit_answer(&mut self) {
        let Some(value) = parse_integer(&self.answer_input) else {
            return;
        };

        self.answer_input.clear();
        self.model.answer(value);
    }

    fn open_settings(&mut self) {
        if self.settings.is_some() {
            return;
        }

        let mut settings = SettingsWindow::new(self.model.bounds());
        settings.on_open();
        self.settings = Some(settings);
    }

    /// Root controls are disabled while the settings window is open.
    fn is_sensitive(&self) -> bool {
        self.settings.is_none()
    }

    fn close_settings(&mut self) {
        if let Some(mut settings) = self.settings.take() {
            settings.on_close();
        }
    }

    fn apply_settings(&mut self, bounds: Bounds) {
        if let Err(err) = self.model.reconfigure(bounds.min, bounds.max) {
            warn!("ignoring settings: {err}");
        }
    }

    /// Shows the settings window in its own viewport, or embedded when the
    /// backend only supports one.
    fn show_settings(&mut self, ctx: &egui::Context) {
        let Some(settings) = self.settings.as_mut() else {
            return;
        };

        let kind = settings.kind();
        let mut applied = None;
        let mut close = false;

        ctx.show_viewport_immediate(
            kind.viewport_id(),
            egui::ViewportBuilder::default()
                .with_title(kind.title())
                .with_inner_size([280.0, 140.0])
                .with_resizable(false),
            |ctx, class| {
                if class == egui::ViewportClass::Embedded {
                    let mut open = true;
                    egui::Window::new(kind.title())
                        .open(&mut open)
                        .collapsible(false)
                        .resizable(false)
                        .show(ctx, |ui| {
                            applied = settings.build(ui);
                        });
                    close = !open;
                } else {
                    egui::CentralPanel::default().show(ctx, |ui| {
                        applied = settings.build(ui);
                    });
                    close = ctx.input(|i| i.viewport().close_requested());
                }
            },
        );

        if let Some(bounds) = applied {
            self.apply_settings(bounds);
        }
        if close {
            self.close_settings();
        }
    }
}

impl WindowLifecycle for RootWindow {
    type Output = ();

    fn kind(&self) -> WindowKind {
        WindowKind::Root
    }

    fn build(&mut self, ui: &mut egui::Ui) {
        let mut submit = false;
        let mut open_settings = false;
        let sensitive = self.is_sensitive();

        ui.add_enabled_ui(sensitive, |ui| {
            egui::Grid::new("root_grid")
                .spacing([10.0, 10.0])
                .show(ui, |ui| {
                    ui.label(
                        egui::RichText::new(self.model.current().to_string())
                            .size(24.0)
                            .strong(),
                    );

                    let response =
                        numeric_field(ui, &mut self.answer_input, ANSWER_MAX_LEN, 70.0);
                    if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                        submit = true;
                    }
                    if sensitive {
                        response.request_focus();
                    }

                    if ui.button("Check!").clicked() {
                        submit = true;
                    }
                    ui.end_row();

                    ui.label(format!("Correct: {}", self.model.number_of_correct()));
                    ui.label(format!("Failed: {}", self.model.number_of_failed()));
                    if ui.button("Preferences").clicked() {
                        open_settings = true;
                    }
                    ui.end_row();
                });
        });

        if submit {
            self.submit_answer();
        }
        if open_settings {
            self.open_settings();
        }
    }

    fn on_open(&mut self) {
        info!(
            window = ?self.kind(),
            min = self.model.min(),
            max = self.model.max(),
            "root window opened"
        );
    }

    fn on_close(&mut self) {
        self.close_settings();
        info!(
            window = ?self.kind(),
            correct = self.model.number_of_correct(),
            failed = self.model.number_of_failed(),
            "root window closed"
        );
    }
}

impl eframe::App for RootWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(20.0);
                self.build(ui);
            });
        });

        self.show_settings(ctx);

        if ctx.input(|i| i.viewport().close_requested()) {
            self.on_close();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window() -> RootWindow {
        RootWindow::from_config(&Config::default())
    }

    #[test]
    fn test_submit_records_answer_and_clears_input() {
        let mut window = window();
        let exercise = *window.model.current();
        window.answer_input = "-12".to_string();

        window.submit_answer();

        assert!(window.answer_input.is_empty());
        assert_eq!(window.model.history(), &[exercise.with_user_input(-12)]);
    }

    #[test]
    fn test_submit_ignores_unparsable_input() {
        let mut window = window();
        window.answer_input = "-".to_string();

        window.submit_answer();

        assert_eq!(window.answer_input, "-");
        assert!(window.model.history().is_empty());
    }

    #[test]
    fn test_only_one_settings_window() {
        let mut window = window();
        assert!(window.is_sensitive());
        window.open_settings();
        assert!(!window.is_sensitive());
        window.model.reconfigure(1, 2).unwrap();
        window.open_settings();
        // Still the window opened against the old bounds.
        assert_eq!(
            window.settings.as_ref().and_then(|s| s.pending_bounds()),
            Some(Bounds::default())
        );

        window.close_settings();
        assert!(window.settings.is_none());
        assert!(window.is_sensitive());
    }

    #[test]
    fn test_apply_settings_reconfigures_model() {
        let mut window = window();
        window.model.answer(1);

        window.apply_settings(Bounds::new(50, 60).unwrap());

        assert_eq!(window.model.bounds(), Bounds::new(50, 60).unwrap());
        assert_eq!(window.model.history().len(), 1);
        assert!(window.model.bounds().contains(window.model.current().lhs()));
    }

    #[test]
    fn test_apply_settings_ignores_inverted_bounds() {
        let mut window = window();
        window.apply_settings(Bounds::unchecked(60, 50));
        assert_eq!(window.model.bounds(), Bounds::default());
    }

    #[test]
    fn test_config_bounds_seed_model() {
        let config = Config {
            bounds: Bounds::new(1, 5).unwrap(),
            ..Config::default()
        };
        let window = RootWindow::from_config(&config);
        assert_eq!(window.model.bounds(), Bounds::new(1, 5).unwrap());
    }
}
