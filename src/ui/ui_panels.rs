use eframe::egui::{Grid, RichText, ScrollArea, Slider, TextEdit, Ui};

use crate::config::CONTROLS;
use crate::domain::HousePoint;
use crate::ui::app::{PlotVisibility, PredictionOutcome};
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;
use crate::ui::utils::{colored_subsection_heading, format_predicted_price, section_heading};

/// Trait for UI panels that can be rendered
pub trait Panel {
    type Event;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event>;
}

/// Panel for the candidate-line sliders and the display toggles
pub struct LineControlsPanel {
    slope: f64,
    intercept: f64,
    visibility: PlotVisibility,
}

#[derive(Debug)]
pub enum LineControlsEvent {
    Slope(f64),
    Intercept(f64),
    ShowLine(bool),
    ShowError(bool),
    ShowOptimal(bool),
    ShowPrediction(bool),
}

impl LineControlsPanel {
    pub fn new(slope: f64, intercept: f64, visibility: PlotVisibility) -> Self {
        Self {
            slope,
            intercept,
            visibility,
        }
    }

    fn render_slope_slider(&mut self, ui: &mut Ui) -> Option<f64> {
        ui.add_space(5.0);
        ui.label(colored_subsection_heading(UI_TEXT.slope_label));
        let response = ui.add(
            Slider::new(&mut self.slope, CONTROLS.slope.min..=CONTROLS.slope.max)
                .step_by(CONTROLS.slope.step)
                .fixed_decimals(CONTROLS.slope_decimals),
        );
        response.changed().then_some(self.slope)
    }

    fn render_intercept_slider(&mut self, ui: &mut Ui) -> Option<f64> {
        ui.add_space(5.0);
        ui.label(colored_subsection_heading(UI_TEXT.intercept_label));
        let response = ui.add(
            Slider::new(
                &mut self.intercept,
                CONTROLS.intercept.min..=CONTROLS.intercept.max,
            )
            .step_by(CONTROLS.intercept.step)
            .fixed_decimals(CONTROLS.intercept_decimals),
        );
        response.changed().then_some(self.intercept)
    }
}

impl Panel for LineControlsPanel {
    type Event = LineControlsEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();
        section_heading(ui, UI_TEXT.controls_heading);

        ui.label(colored_subsection_heading(UI_TEXT.candidate_heading));
        if let Some(slope) = self.render_slope_slider(ui) {
            events.push(LineControlsEvent::Slope(slope));
        }
        if let Some(intercept) = self.render_intercept_slider(ui) {
            events.push(LineControlsEvent::Intercept(intercept));
        }

        ui.add_space(10.0);
        if ui
            .checkbox(&mut self.visibility.candidate_line, UI_TEXT.show_line_label)
            .changed()
        {
            events.push(LineControlsEvent::ShowLine(self.visibility.candidate_line));
        }
        if ui
            .checkbox(&mut self.visibility.squared_error, UI_TEXT.show_error_label)
            .changed()
        {
            events.push(LineControlsEvent::ShowError(self.visibility.squared_error));
        }
        if ui
            .checkbox(&mut self.visibility.optimal_line, UI_TEXT.show_optimal_label)
            .changed()
        {
            events.push(LineControlsEvent::ShowOptimal(self.visibility.optimal_line));
        }
        if ui
            .checkbox(
                &mut self.visibility.prediction,
                UI_TEXT.show_prediction_label,
            )
            .changed()
        {
            events.push(LineControlsEvent::ShowPrediction(self.visibility.prediction));
        }

        ui.add_space(10.0);
        events
    }
}

/// Panel for the free-form prediction query
pub struct PredictionPanel {
    input: String,
    outcome: PredictionOutcome,
}

#[derive(Debug)]
pub enum PredictionEvent {
    InputChanged(String),
}

impl PredictionPanel {
    pub fn new(input: String, outcome: PredictionOutcome) -> Self {
        Self { input, outcome }
    }
}

impl Panel for PredictionPanel {
    type Event = PredictionEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();

        ui.label(colored_subsection_heading(UI_TEXT.prediction_heading));
        let response = ui.add(
            TextEdit::singleline(&mut self.input)
                .hint_text(UI_TEXT.prediction_hint)
                .desired_width(100.0),
        );
        if response.changed() {
            events.push(PredictionEvent::InputChanged(self.input.clone()));
        }

        match self.outcome {
            PredictionOutcome::Price { price, .. } => {
                ui.label(
                    RichText::new(format_predicted_price(price))
                        .color(UI_CONFIG.colors.prediction_value),
                );
            }
            PredictionOutcome::Invalid => {
                // A stale or garbage price would be worse than no price
                ui.label_error(UI_TEXT.prediction_invalid);
            }
            PredictionOutcome::Empty => {}
        }

        events
    }
}

/// Read-only table of the embedded dataset
pub struct DataTablePanel<'a> {
    points: &'a [HousePoint],
}

impl<'a> DataTablePanel<'a> {
    pub fn new(points: &'a [HousePoint]) -> Self {
        Self { points }
    }
}

impl<'a> Panel for DataTablePanel<'a> {
    type Event = ();

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        ScrollArea::vertical()
            .max_height(360.0)
            .id_salt("housing_table")
            .show(ui, |ui| {
                Grid::new("housing_table_grid")
                    .num_columns(3)
                    .spacing([24.0, 4.0])
                    .striped(true)
                    .show(ui, |ui| {
                        ui.label(colored_subsection_heading(UI_TEXT.table_col_index));
                        ui.label(colored_subsection_heading(UI_TEXT.table_col_area));
                        ui.label(colored_subsection_heading(UI_TEXT.table_col_price));
                        ui.end_row();

                        for point in self.points {
                            ui.label(format!("{}", point.index));
                            ui.label(format!("{:.0}", point.area));
                            ui.label(format!("{:.2}", point.price));
                            ui.end_row();
                        }
                    });
            });
        Vec::new()
    }
}
