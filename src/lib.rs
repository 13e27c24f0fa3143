#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

// Core modules
pub mod chart;
pub mod config;
pub mod data;
pub mod domain;
pub mod regression;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use chart::{ChartMargins, PixelMap, PlotBounds};
pub use data::{HousingDataset, embedded_dataset};
pub use domain::{HousePoint, Line};
pub use regression::{RegressionError, least_squares_fit, parse_prediction_area, sum_squared_error};
pub use ui::HouseFitApp;

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Print the embedded housing table to stdout and exit
    #[arg(long, default_value_t = false)]
    pub table: bool,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext, dataset: HousingDataset) -> Box<dyn eframe::App> {
    let app = ui::HouseFitApp::new(cc, dataset);
    Box::new(app)
}
