//! Slider and formatting configuration for the line controls

/// Range, step and default for one slider
pub struct SliderRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
}

/// The Master Controls Configuration
pub struct ControlsConfig {
    /// Slope slider `k`, million kr per m²
    pub slope: SliderRange,
    /// Intercept slider `m`, million kr
    pub intercept: SliderRange,

    // Display precision, matching the on-screen equation format
    pub slope_decimals: usize,
    pub intercept_decimals: usize,
    pub error_decimals: usize,
    pub price_decimals: usize,
}

pub const CONTROLS: ControlsConfig = ControlsConfig {
    // The optimal slope for the embedded table is ~0.031, so the slider
    // brackets it with plenty of room to feel the error grow on both sides
    slope: SliderRange {
        min: 0.0,
        max: 0.1,
        step: 0.001,
        default: 0.02,
    },
    intercept: SliderRange {
        min: -2.0,
        max: 2.0,
        step: 0.01,
        default: 0.0,
    },

    slope_decimals: 3,
    intercept_decimals: 2,
    error_decimals: 3,
    price_decimals: 2,
};
