use egui_plot::{Line, LineStyle, MarkerShape, PlotPoints, PlotUi, Points};

use crate::config::plot::PLOT_CONFIG;
use crate::ui::app::PlotVisibility;
use crate::ui::ui_plot_view::PlotCache;
use crate::ui::ui_text::UI_TEXT;

/// Context passed to every layer during rendering.
pub struct LayerContext<'a> {
    pub cache: &'a PlotCache,
    pub visibility: &'a PlotVisibility,
}

/// A standardized layer in the plot stack.
pub trait PlotLayer {
    fn render(&self, ui: &mut PlotUi, ctx: &LayerContext);
}

// ============================================================================
// 1. RESIDUAL LAYER (dashed verticals from each point to the line)
// ============================================================================
pub struct ResidualLayer;

impl PlotLayer for ResidualLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        // Geometry is already empty unless both line and error are on;
        // the visibility check keeps the intent readable
        if !(ctx.visibility.candidate_line && ctx.visibility.squared_error) {
            return;
        }

        for segment in &ctx.cache.residual_segments {
            // Same name on every segment groups them into one legend entry
            let line = Line::new(UI_TEXT.legend_error, PlotPoints::new(segment.to_vec()))
                .color(PLOT_CONFIG.residual_color)
                .width(PLOT_CONFIG.residual_line_width)
                .style(LineStyle::Dashed {
                    length: PLOT_CONFIG.residual_dash_length,
                });
            plot_ui.line(line);
        }
    }
}

// ============================================================================
// 2. CANDIDATE LINE LAYER (the slider-controlled line)
// ============================================================================
pub struct CandidateLineLayer;

impl PlotLayer for CandidateLineLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        if let Some(endpoints) = ctx.cache.candidate_endpoints {
            let line = Line::new(UI_TEXT.legend_candidate, PlotPoints::new(endpoints.to_vec()))
                .color(PLOT_CONFIG.candidate_line_color)
                .width(PLOT_CONFIG.candidate_line_width);
            plot_ui.line(line);
        }
    }
}

// ============================================================================
// 3. OPTIMAL LINE LAYER (the least-squares fit)
// ============================================================================
pub struct OptimalLineLayer;

impl PlotLayer for OptimalLineLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        if let Some(endpoints) = ctx.cache.optimal_endpoints {
            let line = Line::new(UI_TEXT.legend_optimal, PlotPoints::new(endpoints.to_vec()))
                .color(PLOT_CONFIG.optimal_line_color)
                .width(PLOT_CONFIG.optimal_line_width)
                .style(LineStyle::Dashed {
                    length: PLOT_CONFIG.optimal_dash_length,
                });
            plot_ui.line(line);
        }
    }
}

// ============================================================================
// 4. SCATTER LAYER (the data itself)
// ============================================================================
pub struct ScatterLayer;

impl PlotLayer for ScatterLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        let points = Points::new(
            UI_TEXT.legend_points,
            PlotPoints::new(ctx.cache.scatter.clone()),
        )
        .shape(MarkerShape::Circle)
        .radius(PLOT_CONFIG.point_radius)
        .color(PLOT_CONFIG.point_color);
        plot_ui.points(points);
    }
}

// ============================================================================
// 5. PREDICTION LAYER (marker at the queried area)
// ============================================================================
pub struct PredictionLayer;

impl PlotLayer for PredictionLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        if let Some(point) = ctx.cache.prediction_point {
            let marker = Points::new(UI_TEXT.legend_prediction, PlotPoints::new(vec![point]))
                .shape(MarkerShape::Cross)
                .radius(PLOT_CONFIG.prediction_marker_radius)
                .color(PLOT_CONFIG.prediction_marker_color);
            plot_ui.points(marker);
        }
    }
}
