use eframe::egui::Color32;

pub use crate::ui::ui_text::UI_TEXT;

/// Panel and text colours shared by both chart windows
#[derive(Clone, Copy)]
pub struct PanelColors {
    /// Subdued text: metric labels, axis captions
    pub label: Color32,
    /// Window headings above each chart
    pub heading: Color32,
    pub central_panel: Color32,
    pub status_panel: Color32,
    /// Positive and negative total returns in the status bar
    pub gain: Color32,
    pub loss: Color32,
}

#[derive(Clone, Copy)]
pub struct UiConfig {
    pub colors: PanelColors,
}

pub static UI_CONFIG: UiConfig = UiConfig {
    colors: PanelColors {
        label: Color32::GRAY,
        heading: Color32::from_rgb(230, 230, 180),
        central_panel: Color32::from_rgb(20, 20, 24),
        status_panel: Color32::from_rgb(28, 28, 32),
        gain: Color32::from_rgb(100, 200, 100),
        loss: Color32::from_rgb(255, 100, 100),
    },
};
