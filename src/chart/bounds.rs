use crate::domain::HousePoint;
use crate::utils::maths_utils;

/// Each axis is padded by this fraction of its data range, so points never
/// sit on the plot edge and line overlays have room to extrapolate.
pub const BOUNDS_PADDING_FRACTION: f64 = 0.1;

/// The padded data-space rectangle mapped onto the canvas.
///
/// Derived once from the dataset at startup and fixed for the session.
/// Precondition: the dataset holds at least two distinct areas and prices,
/// so `x_min < x_max` and `y_min < y_max`. The embedded table satisfies
/// this; a degenerate dataset is a build defect, asserted in debug builds.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PlotBounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl PlotBounds {
    pub fn from_points(points: &[HousePoint]) -> Self {
        let areas: Vec<f64> = points.iter().map(|p| p.area).collect();
        let prices: Vec<f64> = points.iter().map(|p| p.price).collect();
        let (x_min_data, x_max_data) = maths_utils::get_min_max(&areas);
        let (y_min_data, y_max_data) = maths_utils::get_min_max(&prices);

        let x_padding = (x_max_data - x_min_data) * BOUNDS_PADDING_FRACTION;
        let y_padding = (y_max_data - y_min_data) * BOUNDS_PADDING_FRACTION;

        let bounds = PlotBounds {
            x_min: x_min_data - x_padding,
            x_max: x_max_data + x_padding,
            y_min: y_min_data - y_padding,
            y_max: y_max_data + y_padding,
        };
        debug_assert!(bounds.x_min < bounds.x_max);
        debug_assert!(bounds.y_min < bounds.y_max);
        bounds
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padding_is_ten_percent_of_each_range() {
        let points = vec![
            HousePoint::new(0, 20.0, 1.0),
            HousePoint::new(1, 120.0, 5.0),
        ];
        let bounds = PlotBounds::from_points(&points);
        // x range 100 -> pad 10, y range 4 -> pad 0.4
        assert!((bounds.x_min - 10.0).abs() < 1e-9);
        assert!((bounds.x_max - 130.0).abs() < 1e-9);
        assert!((bounds.y_min - 0.6).abs() < 1e-9);
        assert!((bounds.y_max - 5.4).abs() < 1e-9);
    }

    #[test]
    fn embedded_dataset_bounds() {
        let dataset = crate::data::embedded_dataset().unwrap();
        let bounds = PlotBounds::from_points(dataset.points());
        // areas 23..143 pad 12, prices 0.71..4.69 pad 0.398
        assert!((bounds.x_min - 11.0).abs() < 1e-9);
        assert!((bounds.x_max - 155.0).abs() < 1e-9);
        assert!((bounds.y_min - 0.312).abs() < 1e-9);
        assert!((bounds.y_max - 5.088).abs() < 1e-9);
    }
}
