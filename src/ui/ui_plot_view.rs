use std::hash::{Hash, Hasher};

use eframe::egui;
use egui_plot::{AxisHints, Corner, HPlacement, Legend, Plot};

use crate::domain::Line;
use crate::ui::app::{DataState, PlotVisibility};
use crate::ui::ui_text::UI_TEXT;

// The layer system does the actual drawing
use crate::ui::plot_layers::{
    CandidateLineLayer, LayerContext, OptimalLineLayer, PlotLayer, PredictionLayer, ResidualLayer,
    ScatterLayer,
};

/// Plot geometry for one frame, all in data space. egui_plot maps it to
/// screen space; the SVG exporter uses the pixel mapper for the same job.
#[derive(Clone, Default)]
pub struct PlotCache {
    pub params_hash: u64,
    pub scatter: Vec<[f64; 2]>,
    pub candidate_endpoints: Option<[[f64; 2]; 2]>,
    pub residual_segments: Vec<[[f64; 2]; 2]>,
    pub optimal_endpoints: Option<[[f64; 2]; 2]>,
    pub prediction_point: Option<[f64; 2]>,
}

#[derive(Default)]
pub struct PlotView {
    cache: Option<PlotCache>,
}

impl PlotView {
    pub fn new() -> Self {
        Self { cache: None }
    }

    pub fn show_plot(
        &mut self,
        ui: &mut egui::Ui,
        data_state: &DataState,
        candidate: Line,
        visibility: &PlotVisibility,
        prediction_point: Option<[f64; 2]>,
    ) {
        let cache = self.calculate_plot_data(data_state, candidate, visibility, prediction_point);
        let bounds = data_state.bounds;

        let legend = Legend::default().position(Corner::RightTop);

        Plot::new("housing_plot")
            .legend(legend)
            .custom_x_axes(vec![create_x_axis()])
            .custom_y_axes(vec![create_y_axis()])
            // Suppress the default hover label
            .label_formatter(|_, _| String::new())
            // The bounds are fixed for the whole session
            .allow_scroll(false)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_boxed_zoom(false)
            .show(ui, |plot_ui| {
                plot_ui.set_plot_bounds_x(bounds.x_min..=bounds.x_max);
                plot_ui.set_plot_bounds_y(bounds.y_min..=bounds.y_max);

                let ctx = LayerContext {
                    cache: &cache,
                    visibility,
                };

                // Back to front
                let layers: Vec<Box<dyn PlotLayer>> = vec![
                    Box::new(ResidualLayer),
                    Box::new(CandidateLineLayer),
                    Box::new(OptimalLineLayer),
                    Box::new(ScatterLayer),
                    Box::new(PredictionLayer),
                ];

                for layer in layers {
                    layer.render(plot_ui, &ctx);
                }
            });
    }

    fn calculate_plot_data(
        &mut self,
        data_state: &DataState,
        candidate: Line,
        visibility: &PlotVisibility,
        prediction_point: Option<[f64; 2]>,
    ) -> PlotCache {
        let mut hasher = std::collections::hash_map::DefaultHasher::new();
        candidate.k.to_bits().hash(&mut hasher);
        candidate.m.to_bits().hash(&mut hasher);
        visibility.hash(&mut hasher);
        if let Some([x, y]) = prediction_point {
            x.to_bits().hash(&mut hasher);
            y.to_bits().hash(&mut hasher);
        }
        data_state.dataset.len().hash(&mut hasher);
        let current_hash = hasher.finish();

        if let Some(cache) = &self.cache {
            if cache.params_hash == current_hash {
                return cache.clone();
            }
        }

        let points = data_state.dataset.points();
        let bounds = &data_state.bounds;

        let scatter: Vec<[f64; 2]> = points.iter().map(|p| [p.area, p.price]).collect();

        let candidate_endpoints = visibility
            .candidate_line
            .then(|| candidate.endpoints(bounds));

        // Residuals only make sense while the line itself is on screen
        let residual_segments: Vec<[[f64; 2]; 2]> =
            if visibility.candidate_line && visibility.squared_error {
                points
                    .iter()
                    .map(|p| [[p.area, p.price], [p.area, candidate.predict(p.area)]])
                    .collect()
            } else {
                Vec::new()
            };

        let optimal_endpoints = if visibility.optimal_line {
            data_state.optimal.map(|fit| fit.endpoints(bounds))
        } else {
            None
        };

        let cache = PlotCache {
            params_hash: current_hash,
            scatter,
            candidate_endpoints,
            residual_segments,
            optimal_endpoints,
            prediction_point,
        };

        self.cache = Some(cache.clone());
        cache
    }
}

fn create_x_axis() -> AxisHints<'static> {
    AxisHints::new_x()
        .label(UI_TEXT.plot_x_axis)
        .formatter(|grid_mark, _range| format!("{:.0}", grid_mark.value))
}

fn create_y_axis() -> AxisHints<'static> {
    AxisHints::new_y()
        .label(UI_TEXT.plot_y_axis)
        .formatter(|grid_mark, _range| format!("{:.1}", grid_mark.value))
        .placement(HPlacement::Left)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::embedded_dataset;

    #[test]
    fn geometry_follows_the_visibility_toggles() {
        let data_state = DataState::new(embedded_dataset().unwrap());
        let mut view = PlotView::new();
        let candidate = Line::new(0.03, 0.2);

        let all_on = PlotVisibility {
            candidate_line: true,
            squared_error: true,
            optimal_line: true,
            prediction: true,
        };
        let cache =
            view.calculate_plot_data(&data_state, candidate, &all_on, Some([100.0, 3.2]));
        assert_eq!(cache.scatter.len(), 50);
        assert!(cache.candidate_endpoints.is_some());
        assert_eq!(cache.residual_segments.len(), 50);
        assert!(cache.optimal_endpoints.is_some());
        assert_eq!(cache.prediction_point, Some([100.0, 3.2]));

        let line_hidden = PlotVisibility {
            candidate_line: false,
            squared_error: true,
            optimal_line: false,
            prediction: false,
        };
        let cache = view.calculate_plot_data(&data_state, candidate, &line_hidden, None);
        // No line on screen means no residuals either
        assert!(cache.candidate_endpoints.is_none());
        assert!(cache.residual_segments.is_empty());
        assert!(cache.optimal_endpoints.is_none());
    }

    #[test]
    fn identical_params_reuse_the_cache() {
        let data_state = DataState::new(embedded_dataset().unwrap());
        let mut view = PlotView::new();
        let candidate = Line::new(0.025, -0.1);
        let visibility = PlotVisibility::default();

        let first = view.calculate_plot_data(&data_state, candidate, &visibility, None);
        let second = view.calculate_plot_data(&data_state, candidate, &visibility, None);
        assert_eq!(first.params_hash, second.params_hash);
        assert_eq!(first.scatter, second.scatter);
    }
}
