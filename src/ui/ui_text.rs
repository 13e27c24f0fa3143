//! Every user-facing string in one place.

pub struct UiText {
    // Panel headings
    pub controls_heading: &'static str,
    pub candidate_heading: &'static str,
    pub readout_heading: &'static str,
    pub prediction_heading: &'static str,
    pub export_heading: &'static str,

    // Sliders and toggles
    pub slope_label: &'static str,
    pub intercept_label: &'static str,
    pub show_line_label: &'static str,
    pub show_error_label: &'static str,
    pub show_optimal_label: &'static str,
    pub show_prediction_label: &'static str,

    // Readouts
    pub error_label: &'static str,
    pub error_placeholder: &'static str,
    pub optimal_prefix: &'static str,
    pub optimal_unavailable_prefix: &'static str,

    // Prediction
    pub prediction_hint: &'static str,
    pub prediction_prefix: &'static str,
    pub prediction_suffix: &'static str,
    pub prediction_invalid: &'static str,

    // Plot
    pub plot_x_axis: &'static str,
    pub plot_y_axis: &'static str,
    pub legend_points: &'static str,
    pub legend_candidate: &'static str,
    pub legend_error: &'static str,
    pub legend_optimal: &'static str,
    pub legend_prediction: &'static str,

    // Data table
    pub table_heading: &'static str,
    pub table_col_index: &'static str,
    pub table_col_area: &'static str,
    pub table_col_price: &'static str,

    // Status bar
    pub status_points_suffix: &'static str,
    pub status_area_label: &'static str,

    // Misc
    pub export_button: &'static str,
    pub empty_dataset_heading: &'static str,
    pub empty_dataset_hint: &'static str,
}

pub static UI_TEXT: UiText = UiText {
    controls_heading: "Line controls",
    candidate_heading: "Candidate line",
    readout_heading: "Fit readout",
    prediction_heading: "Price prediction",
    export_heading: "Export",

    slope_label: "Slope k",
    intercept_label: "Intercept m",
    show_line_label: "Show line",
    show_error_label: "Show squared error",
    show_optimal_label: "Show optimal line",
    show_prediction_label: "Predict a price",

    error_label: "Error(k, m)",
    error_placeholder: "–",
    optimal_prefix: "Optimal line:",
    optimal_unavailable_prefix: "Optimal line unavailable:",

    prediction_hint: "area in m²",
    prediction_prefix: "Price ≈ ",
    prediction_suffix: " million kr",
    prediction_invalid: "not a number",

    plot_x_axis: "Area (m²)",
    plot_y_axis: "Price (million kr)",
    legend_points: "Observed sales",
    legend_candidate: "Candidate line",
    legend_error: "Squared error",
    legend_optimal: "Least-squares fit",
    legend_prediction: "Prediction",

    table_heading: "Housing data",
    table_col_index: "#",
    table_col_area: "Area (m²)",
    table_col_price: "Price (million kr)",

    status_points_suffix: "points",
    status_area_label: "Area range",

    export_button: "Export chart (SVG)",
    empty_dataset_heading: "⚠ No data to plot",
    empty_dataset_hint: "The embedded housing table is empty.",
};
