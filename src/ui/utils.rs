use eframe::egui::{Context, RichText, Ui, Visuals};

use crate::config::CONTROLS;
use crate::domain::Line;
use crate::ui::config::{UI_CONFIG, UI_TEXT};

/// Creates a colored heading with uppercase text and monospace font
pub fn colored_heading(text: impl Into<String>) -> RichText {
    let uppercase_text = text.into().to_uppercase() + ":";
    RichText::new(uppercase_text)
        .color(UI_CONFIG.colors.heading)
        .monospace()
}

/// Creates a colored sub-section heading using the configured label color
pub fn colored_subsection_heading(text: impl Into<String>) -> RichText {
    RichText::new(text.into()).color(UI_CONFIG.colors.subsection_heading)
}

/// Sets up custom visuals for the entire application
pub fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();

    visuals.window_fill = UI_CONFIG.colors.central_panel;
    visuals.panel_fill = UI_CONFIG.colors.side_panel;

    // Make the widgets stand out a bit more
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;

    ctx.set_visuals(visuals);
}

/// Creates a section heading with standard spacing
pub fn section_heading(ui: &mut Ui, text: impl Into<String>) {
    ui.add_space(10.0);
    ui.heading(colored_heading(text));
    ui.add_space(5.0);
}

/// Creates a separator with standard spacing
pub fn spaced_separator(ui: &mut Ui) {
    ui.add_space(10.0);
    ui.separator();
    ui.add_space(10.0);
}

/// "y = 0.031x + 0.23", slope to three decimals, intercept to two,
/// the same shape the sliders advertise.
pub fn format_equation(line: &Line) -> String {
    format!(
        "y = {:.kd$}x + {:.md$}",
        line.k,
        line.m,
        kd = CONTROLS.slope_decimals,
        md = CONTROLS.intercept_decimals,
    )
}

/// "Error(k, m) = 12.345"
pub fn format_error(sse: f64) -> String {
    format!(
        "{} = {:.prec$}",
        UI_TEXT.error_label,
        sse,
        prec = CONTROLS.error_decimals,
    )
}

/// "Price ≈ 2.71 million kr"
pub fn format_predicted_price(price: f64) -> String {
    format!(
        "{}{:.prec$}{}",
        UI_TEXT.prediction_prefix,
        price,
        UI_TEXT.prediction_suffix,
        prec = CONTROLS.price_decimals,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equation_uses_configured_precision() {
        let line = Line::new(0.0312457501, 0.2293918589);
        assert_eq!(format_equation(&line), "y = 0.031x + 0.23");
    }

    #[test]
    fn error_and_price_formatting() {
        assert_eq!(format_error(3.8310009), "Error(k, m) = 3.831");
        assert_eq!(
            format_predicted_price(2.714999),
            "Price ≈ 2.71 million kr"
        );
    }
}
