use eframe::egui;
use matika_core::input::filter_numeric;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindowKind {
    Root,
    Settings,
}

impl WindowKind {
    pub fn title(&self) -> &'static str {
        match self {
            WindowKind::Root => "Matika",
            WindowKind::Settings => "Preferences",
        }
    }

    pub fn viewport_id(&self) -> egui::ViewportId {
        match self {
            WindowKind::Root => egui::ViewportId::ROOT,
            WindowKind::Settings => egui::ViewportId::from_hash_of("matika_settings"),
        }
    }
}

/// Hooks every window kind provides. The owner of a window calls `on_open`
/// once before the first `build`, and `on_close` once before dropping it.
pub trait WindowLifecycle {
    type Output;

    fn kind(&self) -> WindowKind;

    /// Lays out the window's widgets for one frame.
    fn build(&mut self, ui: &mut egui::Ui) -> Self::Output;

    fn on_open(&mut self) {}

    fn on_close(&mut self) {}
}

/// Single-line entry accepting only digits and `-`, at most `max_len` chars.
pub fn numeric_field(
    ui: &mut egui::Ui,
    text: &mut String,
    max_len: usize,
    width: f32,
) -> egui::Response {
    let response = ui.add(
        egui::TextEdit::singleline(text)
            .char_limit(max_len)
            .desired_width(width)
            .horizontal_align(egui::Align::Center),
    );
    if response.changed() {
        filter_numeric(text);
    }
    response
}
