use eframe::egui::Color32;

pub use crate::ui::ui_text::{UI_TEXT, UiText};

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subsection_heading: Color32,
    pub central_panel: Color32,
    pub side_panel: Color32,
    pub error_value: Color32,
    pub optimal_value: Color32,
    pub prediction_value: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::GRAY,
        heading: Color32::from_rgb(255, 200, 80),
        subsection_heading: Color32::from_rgb(255, 160, 60),
        central_panel: Color32::from_rgb(20, 22, 28),
        side_panel: Color32::from_rgb(25, 25, 25),
        error_value: Color32::from_rgb(255, 100, 100),
        optimal_value: Color32::from_rgb(130, 220, 140),
        prediction_value: Color32::from_rgb(255, 215, 0),
    },
};
