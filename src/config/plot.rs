//! Plot visualization configuration

use eframe::egui::Color32;

pub struct PlotConfig {
    pub point_color: Color32,
    pub candidate_line_color: Color32,
    pub residual_color: Color32,
    pub optimal_line_color: Color32,
    pub prediction_marker_color: Color32,
    /// Radius of the scatter markers
    pub point_radius: f32,
    /// Width of the candidate line
    pub candidate_line_width: f32,
    /// Width of the dashed residual segments
    pub residual_line_width: f32,
    /// Width of the optimal line
    pub optimal_line_width: f32,
    /// Radius of the prediction marker
    pub prediction_marker_radius: f32,
    /// Dash length for the residual segments
    pub residual_dash_length: f32,
    /// Dash length for the optimal line
    pub optimal_dash_length: f32,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    point_color: Color32::from_rgb(220, 220, 220), // Light gray, reads on the dark theme
    candidate_line_color: Color32::from_rgb(100, 150, 255), // Blue
    residual_color: Color32::from_rgb(255, 100, 100), // Red
    optimal_line_color: Color32::from_rgb(0, 200, 0), // Green
    prediction_marker_color: Color32::from_rgb(255, 215, 0), // Gold
    point_radius: 4.0,
    candidate_line_width: 2.0,
    residual_line_width: 1.0,
    optimal_line_width: 2.0,
    prediction_marker_radius: 6.0,
    residual_dash_length: 5.0,
    optimal_dash_length: 7.0,
};
