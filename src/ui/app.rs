use eframe::{Frame, egui};
use serde::{Deserialize, Serialize};

use crate::chart::PlotBounds;
use crate::chart::svg::{SvgChartOptions, SvgOverlays, render_chart_svg};
use crate::config::CONTROLS;
use crate::data::HousingDataset;
use crate::domain::Line;
use crate::regression::{
    MIN_POINTS_FOR_FIT, RegressionError, least_squares_fit, parse_prediction_area,
    sum_squared_error,
};
use crate::ui::config::UI_TEXT;
use crate::ui::ui_plot_view::PlotView;
use crate::ui::utils::setup_custom_visuals;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// Which overlays the renderer should draw. These toggles govern what the
/// UI asks for, not what the core computes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlotVisibility {
    pub candidate_line: bool,
    pub squared_error: bool,
    pub optimal_line: bool,
    pub prediction: bool,
}

impl Default for PlotVisibility {
    fn default() -> Self {
        Self {
            candidate_line: true,
            squared_error: false,
            optimal_line: false,
            prediction: false,
        }
    }
}

/// Everything derived from the dataset once at startup. The dataset never
/// changes during a session, so the fit is computed here and reused.
#[derive(Default)]
pub struct DataState {
    pub dataset: HousingDataset,
    pub bounds: PlotBounds,
    pub optimal: Option<Line>,
    pub optimal_error: Option<f64>,
    pub last_fit_error: Option<RegressionError>,
}

impl DataState {
    pub fn new(dataset: HousingDataset) -> Self {
        if dataset.len() < MIN_POINTS_FOR_FIT {
            return Self {
                last_fit_error: Some(RegressionError::InsufficientData {
                    have: dataset.len(),
                }),
                dataset,
                ..Default::default()
            };
        }

        let bounds = PlotBounds::from_points(dataset.points());
        let (optimal, optimal_error, last_fit_error) = match least_squares_fit(dataset.points()) {
            Ok(fit) => {
                let error = sum_squared_error(dataset.points(), &fit);
                (Some(fit), Some(error), None)
            }
            Err(err) => {
                log::error!("least-squares fit failed: {}", err);
                (None, None, Some(err))
            }
        };

        Self {
            dataset,
            bounds,
            optimal,
            optimal_error,
            last_fit_error,
        }
    }
}

/// Result of parsing the prediction text field, ready for display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PredictionOutcome {
    /// Field is empty, show nothing
    Empty,
    /// Parsed fine: the queried area and the candidate line's price for it
    Price { area: f64, price: f64 },
    /// Text does not parse as a finite number, suppress the price
    Invalid,
}

#[derive(Deserialize, Serialize)]
pub struct HouseFitApp {
    // UI state
    #[serde(default = "default_slope")]
    pub(super) slope: f64,
    #[serde(default = "default_intercept")]
    pub(super) intercept: f64,
    #[serde(default)]
    pub(super) visibility: PlotVisibility,
    #[serde(default)]
    pub(super) prediction_input: String,
    #[serde(default = "default_show_table")]
    pub(super) show_table: bool,

    // Data state - skip serialization since it is rebuilt at startup
    #[serde(skip)]
    pub(super) data_state: DataState,
    #[serde(skip)]
    pub(super) plot_view: PlotView,

    // Help panel visibility
    #[serde(skip)]
    pub(super) show_help: bool,

    // Outcome message of the most recent SVG export
    #[serde(skip)]
    pub(super) export_status: Option<String>,
}

/// Default value for the slope slider - used by serde and initialization
fn default_slope() -> f64 {
    CONTROLS.slope.default
}

/// Default value for the intercept slider - used by serde and initialization
fn default_intercept() -> f64 {
    CONTROLS.intercept.default
}

fn default_show_table() -> bool {
    false
}

impl HouseFitApp {
    pub fn new(cc: &eframe::CreationContext<'_>, dataset: HousingDataset) -> Self {
        let mut app: HouseFitApp;

        // Attempt to load the persisted state
        if let Some(storage) = cc.storage {
            if let Some(value) = eframe::get_value(storage, eframe::APP_KEY) {
                #[cfg(debug_assertions)]
                if DEBUG_FLAGS.print_state_serde {
                    log::info!("Successfully loaded persisted state");
                }
                app = value;
            } else {
                #[cfg(debug_assertions)]
                if DEBUG_FLAGS.print_state_serde {
                    log::info!("No persisted state found. Creating anew.");
                }
                app = HouseFitApp::new_with_initial_state();
            }
        } else {
            app = HouseFitApp::new_with_initial_state();
        }

        // Initialize the runtime-only state from the embedded dataset
        app.data_state = DataState::new(dataset);
        app.plot_view = PlotView::new();

        // Persisted sliders may come from an older range configuration
        app.slope = app.slope.clamp(CONTROLS.slope.min, CONTROLS.slope.max);
        app.intercept = app
            .intercept
            .clamp(CONTROLS.intercept.min, CONTROLS.intercept.max);

        app
    }

    pub fn new_with_initial_state() -> Self {
        Self {
            slope: default_slope(),
            intercept: default_intercept(),
            visibility: PlotVisibility::default(),
            prediction_input: String::new(),
            show_table: default_show_table(),
            data_state: DataState::default(),
            plot_view: PlotView::default(),
            show_help: false,
            export_status: None,
        }
    }

    /// The line currently described by the sliders.
    pub fn candidate_line(&self) -> Line {
        Line::new(self.slope, self.intercept)
    }

    /// Squared error of the candidate line against the dataset. Cheap
    /// enough to recompute whenever a consumer asks.
    pub fn candidate_error(&self) -> f64 {
        sum_squared_error(self.data_state.dataset.points(), &self.candidate_line())
    }

    /// Parses the prediction field against the candidate line.
    pub fn prediction_outcome(&self) -> PredictionOutcome {
        if self.prediction_input.trim().is_empty() {
            return PredictionOutcome::Empty;
        }
        match parse_prediction_area(&self.prediction_input) {
            Ok(area) => PredictionOutcome::Price {
                area,
                price: self.candidate_line().predict(area),
            },
            Err(_) => PredictionOutcome::Invalid,
        }
    }

    /// The prediction point to mark on the plot, if there is one.
    pub(super) fn prediction_point(&self) -> Option<[f64; 2]> {
        if !self.visibility.prediction {
            return None;
        }
        match self.prediction_outcome() {
            PredictionOutcome::Price { area, price } => Some([area, price]),
            _ => None,
        }
    }

    /// Renders the current view to an SVG file next to the binary.
    pub(super) fn export_chart(&mut self) {
        let overlays = SvgOverlays {
            candidate: self.visibility.candidate_line.then(|| self.candidate_line()),
            show_residuals: self.visibility.candidate_line && self.visibility.squared_error,
            optimal: if self.visibility.optimal_line {
                self.data_state.optimal
            } else {
                None
            },
        };
        let svg = render_chart_svg(
            self.data_state.dataset.points(),
            self.data_state.bounds,
            &overlays,
            UI_TEXT.plot_x_axis,
            UI_TEXT.plot_y_axis,
            &SvgChartOptions::default(),
        );

        match write_chart_svg(&svg) {
            Ok(path) => {
                log::info!("Exported chart to {}", path);
                self.export_status = Some(format!("Saved {}", path));
            }
            Err(err) => {
                log::error!("Chart export failed: {:#}", err);
                self.export_status = Some(format!("Export failed: {}", err));
            }
        }
    }
}

fn write_chart_svg(svg: &str) -> anyhow::Result<String> {
    use anyhow::Context;

    let filename = format!(
        "housefit_{}.svg",
        chrono::Local::now().format("%Y%m%d_%H%M%S")
    );
    std::fs::write(&filename, svg).with_context(|| format!("failed to write {}", filename))?;
    Ok(filename)
}

impl eframe::App for HouseFitApp {
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);

        self.handle_global_shortcuts(ctx);

        self.render_side_panel(ctx);
        self.render_central_panel(ctx);
        self.render_status_panel(ctx);
        if self.show_table {
            self.render_table_window(ctx);
        }
        if self.show_help {
            self.render_help_panel(ctx);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::embedded_dataset;

    #[test]
    fn data_state_caches_the_fit() {
        let state = DataState::new(embedded_dataset().unwrap());
        let fit = state.optimal.expect("fit succeeds on the embedded table");
        assert!(fit.k > 0.0);
        assert!(state.optimal_error.unwrap() > 0.0);
        assert!(state.last_fit_error.is_none());
    }

    #[test]
    fn data_state_reports_insufficient_data() {
        let state = DataState::new(HousingDataset::new(Vec::new()));
        assert!(state.optimal.is_none());
        assert_eq!(
            state.last_fit_error,
            Some(RegressionError::InsufficientData { have: 0 })
        );
    }

    #[test]
    fn prediction_outcome_reflects_the_input() {
        let mut app = HouseFitApp::new_with_initial_state();
        app.data_state = DataState::new(embedded_dataset().unwrap());
        // Powers of two keep the expected price exact
        app.slope = 0.5;
        app.intercept = 0.25;

        app.prediction_input = String::new();
        assert_eq!(app.prediction_outcome(), PredictionOutcome::Empty);

        app.prediction_input = "100".to_string();
        assert_eq!(
            app.prediction_outcome(),
            PredictionOutcome::Price {
                area: 100.0,
                price: 50.25
            }
        );

        app.prediction_input = "hundred".to_string();
        assert_eq!(app.prediction_outcome(), PredictionOutcome::Invalid);
    }
}
