use crate::chart::PlotBounds;

/// A straight line in data space: `price = k * area + m`.
///
/// Candidate lines come straight from the sliders; the optimal line comes
/// from the least-squares fit. Both are plain value objects.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    /// Slope (million kr per m²)
    pub k: f64,
    /// Intercept (million kr)
    pub m: f64,
}

impl Line {
    pub fn new(k: f64, m: f64) -> Self {
        Line { k, m }
    }

    /// Evaluates the line at `area`. Total over all reals, never fails.
    pub fn predict(&self, area: f64) -> f64 {
        self.k * area + self.m
    }

    /// Endpoints of the line drawn edge to edge across the padded bounds.
    ///
    /// The endpoints extrapolate past the raw data range on purpose, so the
    /// overlay always reaches the plot edges.
    pub fn endpoints(&self, bounds: &PlotBounds) -> [[f64; 2]; 2] {
        [
            [bounds.x_min, self.predict(bounds.x_min)],
            [bounds.x_max, self.predict(bounds.x_max)],
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predict_is_exact_for_integer_inputs() {
        let line = Line::new(2.0, 1.0);
        assert_eq!(line.predict(5.0), 11.0);
    }

    #[test]
    fn endpoints_span_the_padded_bounds() {
        let bounds = PlotBounds {
            x_min: 10.0,
            x_max: 20.0,
            y_min: 0.0,
            y_max: 1.0,
        };
        let line = Line::new(0.5, -1.0);
        let [start, end] = line.endpoints(&bounds);
        assert_eq!(start, [10.0, 4.0]);
        assert_eq!(end, [20.0, 9.0]);
    }
}
