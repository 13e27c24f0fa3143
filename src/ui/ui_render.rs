use eframe::egui::{
    CentralPanel, Context, Frame, Grid, Key, Margin, RichText, SidePanel, TopBottomPanel, Window,
};

use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;
use crate::ui::ui_panels::{
    DataTablePanel, LineControlsEvent, LineControlsPanel, Panel, PredictionEvent, PredictionPanel,
};
use crate::ui::utils::{
    colored_subsection_heading, format_equation, format_error, spaced_separator,
};

use super::app::HouseFitApp;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

impl HouseFitApp {
    pub(super) fn render_side_panel(&mut self, ctx: &Context) {
        let side_panel_frame = Frame::new().fill(UI_CONFIG.colors.side_panel);
        SidePanel::left("left_panel")
            .min_width(220.0)
            .frame(side_panel_frame)
            .show(ctx, |ui| {
                let control_events = self.line_controls_panel(ui);
                for event in control_events {
                    #[cfg(debug_assertions)]
                    if DEBUG_FLAGS.print_ui_interactions {
                        log::info!("control changed: {:?}", event);
                    }
                    match event {
                        LineControlsEvent::Slope(k) => self.slope = k,
                        LineControlsEvent::Intercept(m) => self.intercept = m,
                        LineControlsEvent::ShowLine(on) => self.visibility.candidate_line = on,
                        LineControlsEvent::ShowError(on) => self.visibility.squared_error = on,
                        LineControlsEvent::ShowOptimal(on) => self.visibility.optimal_line = on,
                        LineControlsEvent::ShowPrediction(on) => self.visibility.prediction = on,
                    }
                }

                spaced_separator(ui);
                ui.label(colored_subsection_heading(UI_TEXT.readout_heading));
                ui.add_space(5.0);
                self.render_fit_readout(ui);

                if self.visibility.prediction {
                    spaced_separator(ui);
                    let prediction_events = self.prediction_panel(ui);
                    for PredictionEvent::InputChanged(input) in prediction_events {
                        self.prediction_input = input;
                    }
                }

                spaced_separator(ui);
                ui.label(colored_subsection_heading(UI_TEXT.export_heading));
                ui.add_space(5.0);
                if ui.button(UI_TEXT.export_button).clicked() {
                    self.export_chart();
                }
                if let Some(status) = &self.export_status {
                    ui.label_subdued(status.clone());
                }
            });
    }

    fn render_fit_readout(&mut self, ui: &mut eframe::egui::Ui) {
        if self.visibility.candidate_line {
            let candidate = self.candidate_line();
            ui.label(RichText::new(format_equation(&candidate)).monospace());

            if self.visibility.squared_error {
                ui.label(
                    RichText::new(format_error(self.candidate_error()))
                        .monospace()
                        .color(UI_CONFIG.colors.error_value),
                );
            } else {
                ui.label_subdued(format!(
                    "{} = {}",
                    UI_TEXT.error_label, UI_TEXT.error_placeholder
                ));
            }
        }

        if self.visibility.optimal_line {
            ui.add_space(5.0);
            match (self.data_state.optimal, self.data_state.optimal_error) {
                (Some(fit), Some(error)) => {
                    ui.label(
                        RichText::new(format!(
                            "{} {}",
                            UI_TEXT.optimal_prefix,
                            format_equation(&fit)
                        ))
                        .monospace()
                        .color(UI_CONFIG.colors.optimal_value),
                    );
                    ui.label(
                        RichText::new(format_error(error))
                            .monospace()
                            .color(UI_CONFIG.colors.optimal_value),
                    );
                }
                _ => {
                    let reason = self
                        .data_state
                        .last_fit_error
                        .as_ref()
                        .map(|err| err.to_string())
                        .unwrap_or_default();
                    ui.label_error(format!(
                        "{} {}",
                        UI_TEXT.optimal_unavailable_prefix, reason
                    ));
                }
            }
        }
    }

    pub(super) fn render_central_panel(&mut self, ctx: &Context) {
        let central_panel_frame = Frame::new().fill(UI_CONFIG.colors.central_panel);
        CentralPanel::default()
            .frame(central_panel_frame)
            .show(ctx, |ui| {
                ui.add_space(10.0);

                if self.data_state.dataset.is_empty() {
                    ui.vertical_centered(|ui| {
                        ui.add_space(40.0);
                        ui.heading(UI_TEXT.empty_dataset_heading);
                        ui.add_space(10.0);
                        ui.label(UI_TEXT.empty_dataset_hint);
                    });
                    return;
                }

                let candidate = self.candidate_line();
                let visibility = self.visibility;
                let prediction_point = self.prediction_point();
                self.plot_view.show_plot(
                    ui,
                    &self.data_state,
                    candidate,
                    &visibility,
                    prediction_point,
                );
            });
    }

    pub(super) fn render_status_panel(&mut self, ctx: &Context) {
        let status_frame = Frame::new()
            .fill(UI_CONFIG.colors.side_panel)
            .inner_margin(Margin::symmetric(8, 4));
        TopBottomPanel::bottom("status_panel")
            .frame(status_frame)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    // 1. Dataset summary
                    let n = self.data_state.dataset.len();
                    ui.metric(
                        "🏠",
                        &format!("{} {}", n, UI_TEXT.status_points_suffix),
                        UI_CONFIG.colors.label,
                    );
                    if n > 0 {
                        let (area_min, area_max) = self.data_state.dataset.area_min_max();
                        ui.label_subdued(format!(
                            "{}: {:.0}–{:.0} m²",
                            UI_TEXT.status_area_label, area_min, area_max
                        ));
                    }
                    ui.separator();

                    // 2. Candidate line
                    ui.metric(
                        "k",
                        &format!("{:.3}", self.slope),
                        UI_CONFIG.colors.heading,
                    );
                    ui.metric(
                        "m",
                        &format!("{:.2}", self.intercept),
                        UI_CONFIG.colors.heading,
                    );
                    ui.metric(
                        "Σe²",
                        &format!("{:.3}", self.candidate_error()),
                        UI_CONFIG.colors.error_value,
                    );
                    ui.separator();

                    // 3. Optimal fit, once computed
                    if let (Some(fit), Some(error)) =
                        (self.data_state.optimal, self.data_state.optimal_error)
                    {
                        ui.metric(
                            "best",
                            &format!("{} (Σe² {:.3})", format_equation(&fit), error),
                            UI_CONFIG.colors.optimal_value,
                        );
                        ui.separator();
                    }

                    // 4. Last export outcome
                    if let Some(status) = &self.export_status {
                        ui.label_subdued(status.clone());
                    }
                });
            });
    }

    pub(super) fn render_table_window(&mut self, ctx: &Context) {
        let mut open = self.show_table;
        Window::new(UI_TEXT.table_heading)
            .open(&mut open)
            .resizable(false)
            .default_width(320.0)
            .show(ctx, |ui| {
                let mut panel = DataTablePanel::new(self.data_state.dataset.points());
                panel.render(ui);
            });
        self.show_table = open;
    }

    fn render_shortcut_rows(ui: &mut eframe::egui::Ui, rows: &[(&str, &str)]) {
        for (key, description) in rows {
            ui.label(RichText::new(*key).monospace().strong());
            ui.label(*description);
            ui.end_row();
        }
    }

    pub(super) fn render_help_panel(&mut self, ctx: &Context) {
        Window::new("⌨ Keyboard Shortcuts")
            .open(&mut self.show_help)
            .resizable(false)
            .collapsible(false)
            .default_width(360.0)
            .show(ctx, |ui| {
                ui.label("Press any key to execute the command:");
                ui.add_space(5.0);

                let shortcuts = [
                    ("H", "Toggle this help panel"),
                    ("L", "Toggle the candidate line"),
                    ("E", "Toggle the squared-error overlay"),
                    ("O", "Toggle the optimal line"),
                    ("P", "Toggle the price prediction"),
                    ("T", "Toggle the data table"),
                    ("X", "Export the chart as SVG"),
                ];

                Grid::new("shortcuts_grid")
                    .num_columns(2)
                    .spacing([20.0, 8.0])
                    .striped(true)
                    .show(ui, |ui| {
                        Self::render_shortcut_rows(ui, &shortcuts);
                    });
            });
    }

    fn line_controls_panel(&mut self, ui: &mut eframe::egui::Ui) -> Vec<LineControlsEvent> {
        let mut panel = LineControlsPanel::new(self.slope, self.intercept, self.visibility);
        panel.render(ui)
    }

    fn prediction_panel(&mut self, ui: &mut eframe::egui::Ui) -> Vec<PredictionEvent> {
        let mut panel =
            PredictionPanel::new(self.prediction_input.clone(), self.prediction_outcome());
        panel.render(ui)
    }

    pub(super) fn handle_global_shortcuts(&mut self, ctx: &Context) {
        // Keys typed into the prediction field are not shortcuts
        if ctx.wants_keyboard_input() {
            return;
        }

        ctx.input(|i| {
            if i.key_pressed(Key::L) {
                self.visibility.candidate_line = !self.visibility.candidate_line;
            }
            if i.key_pressed(Key::E) {
                self.visibility.squared_error = !self.visibility.squared_error;
            }
            if i.key_pressed(Key::O) {
                self.visibility.optimal_line = !self.visibility.optimal_line;
            }
            if i.key_pressed(Key::P) {
                self.visibility.prediction = !self.visibility.prediction;
            }
            if i.key_pressed(Key::T) {
                self.show_table = !self.show_table;
            }
            if i.key_pressed(Key::X) {
                self.export_chart();
            }
            if i.key_pressed(Key::H) {
                self.show_help = !self.show_help;
            }
            if i.key_pressed(Key::Escape) && self.show_help {
                self.show_help = false;
            }
        });
    }
}
