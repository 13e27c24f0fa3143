//! Static SVG rendering of the chart, for exporting the current view.
//!
//! This is the canvas-style renderer: everything is laid out in pixel space
//! through [`PixelMap`], with the axis labels in the margins. The egui plot
//! view is the interactive twin of this output.

use std::fmt::Write as _;

use crate::chart::{ChartMargins, PixelMap, PlotBounds};
use crate::domain::{HousePoint, Line};

const BACKGROUND_COLOR: &str = "#ffffff";
const AXIS_COLOR: &str = "#333333";
const POINT_COLOR: &str = "#000000";
const CANDIDATE_COLOR: &str = "#0000ff";
const RESIDUAL_COLOR: &str = "#ff0000";
const OPTIMAL_COLOR: &str = "#008000";

const POINT_RADIUS: f64 = 4.0;

#[derive(Debug, Clone, Copy)]
pub struct SvgChartOptions {
    pub width: f64,
    pub height: f64,
    pub margins: ChartMargins,
}

impl Default for SvgChartOptions {
    fn default() -> Self {
        Self {
            width: 640.0,
            height: 420.0,
            margins: ChartMargins::default(),
        }
    }
}

/// What to draw besides the scatter itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct SvgOverlays {
    pub candidate: Option<Line>,
    pub show_residuals: bool,
    pub optimal: Option<Line>,
}

/// Renders the dataset and the requested overlays as a standalone SVG
/// document. Pure string building, no I/O.
pub fn render_chart_svg(
    points: &[HousePoint],
    bounds: PlotBounds,
    overlays: &SvgOverlays,
    x_label: &str,
    y_label: &str,
    opts: &SvgChartOptions,
) -> String {
    let map = PixelMap::new(bounds, opts.width, opts.height, opts.margins);
    let mut svg = String::new();

    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = opts.width,
        h = opts.height,
    );
    let _ = writeln!(
        svg,
        r#"<rect width="{w}" height="{h}" fill="{bg}"/>"#,
        w = opts.width,
        h = opts.height,
        bg = BACKGROUND_COLOR,
    );

    write_axes(&mut svg, x_label, y_label, opts);

    // Overlays go under the points so markers stay readable
    if let Some(candidate) = overlays.candidate {
        if overlays.show_residuals {
            write_residuals(&mut svg, points, &candidate, &map);
        }
        write_line(&mut svg, &candidate, &map, CANDIDATE_COLOR, 2.0, None);
    }
    if let Some(optimal) = overlays.optimal {
        write_line(&mut svg, &optimal, &map, OPTIMAL_COLOR, 2.0, Some("7,5"));
    }

    for point in points {
        let (cx, cy) = map.point_to_pixel(point);
        let _ = writeln!(
            svg,
            r#"<circle cx="{:.2}" cy="{:.2}" r="{}" fill="{}"/>"#,
            cx, cy, POINT_RADIUS, POINT_COLOR,
        );
    }

    svg.push_str("</svg>\n");
    svg
}

fn write_axes(svg: &mut String, x_label: &str, y_label: &str, opts: &SvgChartOptions) {
    let left = opts.margins.left;
    let right = opts.width - opts.margins.right;
    let top = opts.margins.top;
    let bottom = opts.height - opts.margins.bottom;

    let _ = writeln!(
        svg,
        r#"<line x1="{left}" y1="{bottom}" x2="{right}" y2="{bottom}" stroke="{axis}" stroke-width="1"/>"#,
        axis = AXIS_COLOR,
    );
    let _ = writeln!(
        svg,
        r#"<line x1="{left}" y1="{bottom}" x2="{left}" y2="{top}" stroke="{axis}" stroke-width="1"/>"#,
        axis = AXIS_COLOR,
    );

    let x_label_x = left + (right - left) / 2.0;
    let x_label_y = opts.height - 20.0;
    let _ = writeln!(
        svg,
        r#"<text x="{x_label_x:.1}" y="{x_label_y:.1}" font-family="sans-serif" font-size="14" fill="{axis}" text-anchor="middle">{x_label}</text>"#,
        axis = AXIS_COLOR,
    );

    let y_label_x = 20.0;
    let y_label_y = top + (bottom - top) / 2.0;
    let _ = writeln!(
        svg,
        r#"<text x="{y_label_x:.1}" y="{y_label_y:.1}" font-family="sans-serif" font-size="14" fill="{axis}" text-anchor="middle" transform="rotate(-90 {y_label_x:.1} {y_label_y:.1})">{y_label}</text>"#,
        axis = AXIS_COLOR,
    );
}

fn write_line(
    svg: &mut String,
    line: &Line,
    map: &PixelMap,
    color: &str,
    width: f64,
    dash: Option<&str>,
) {
    let bounds = *map.bounds();
    let [start, end] = line.endpoints(&bounds);
    let dash_attr = match dash {
        Some(pattern) => format!(r#" stroke-dasharray="{}""#, pattern),
        None => String::new(),
    };
    let _ = writeln!(
        svg,
        r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{}" stroke-width="{}"{}/>"#,
        map.x_to_pixel(start[0]),
        map.y_to_pixel(start[1]),
        map.x_to_pixel(end[0]),
        map.y_to_pixel(end[1]),
        color,
        width,
        dash_attr,
    );
}

fn write_residuals(svg: &mut String, points: &[HousePoint], line: &Line, map: &PixelMap) {
    for point in points {
        let pixel_x = map.x_to_pixel(point.area);
        let y_actual = map.y_to_pixel(point.price);
        let y_predicted = map.y_to_pixel(line.predict(point.area));
        let _ = writeln!(
            svg,
            r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{}" stroke-width="1" stroke-dasharray="5,5"/>"#,
            pixel_x, y_actual, pixel_x, y_predicted, RESIDUAL_COLOR,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scene() -> (Vec<HousePoint>, PlotBounds) {
        let points = vec![
            HousePoint::new(0, 20.0, 1.0),
            HousePoint::new(1, 120.0, 5.0),
        ];
        let bounds = PlotBounds::from_points(&points);
        (points, bounds)
    }

    #[test]
    fn points_land_at_mapped_pixels() {
        let (points, bounds) = scene();
        let opts = SvgChartOptions::default();
        let svg = render_chart_svg(
            &points,
            bounds,
            &SvgOverlays::default(),
            "Area (m²)",
            "Price (million kr)",
            &opts,
        );

        let map = PixelMap::new(bounds, opts.width, opts.height, opts.margins);
        let (cx, cy) = map.point_to_pixel(&points[0]);
        assert!(svg.contains(&format!(r#"<circle cx="{:.2}" cy="{:.2}""#, cx, cy)));
        assert!(svg.contains("Area (m²)"));
        assert!(svg.contains("</svg>"));
    }

    #[test]
    fn candidate_line_spans_the_full_plot_width() {
        let (points, bounds) = scene();
        let opts = SvgChartOptions::default();
        let overlays = SvgOverlays {
            candidate: Some(Line::new(0.04, 0.0)),
            show_residuals: true,
            optimal: None,
        };
        let svg = render_chart_svg(
            &points,
            bounds,
            &overlays,
            "x",
            "y",
            &opts,
        );

        // Endpoints sit on the left and right margin columns
        let left = format!(r#"x1="{:.2}""#, opts.margins.left);
        let right = format!(r#"x2="{:.2}""#, opts.width - opts.margins.right);
        assert!(svg.contains(&left));
        assert!(svg.contains(&right));
        // One dashed residual per point
        assert_eq!(svg.matches(r#"stroke-dasharray="5,5""#).count(), points.len());
    }
}
