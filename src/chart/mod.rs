// Chart geometry: data-space bounds, pixel mapping, SVG rendering
pub mod bounds;
pub mod pixel_map;
pub mod svg;

// Re-export key types for convenience
pub use bounds::PlotBounds;
pub use pixel_map::{ChartMargins, PixelMap};
