// Define the HousePoint struct with all its properties
/// One observed sale: living area in m² against the price paid in million kr.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HousePoint {
    /// Row number in the embedded table, kept for tabular display
    pub index: usize,
    pub area: f64,
    pub price: f64,
}

impl HousePoint {
    // A constructor for convenience
    pub fn new(index: usize, area: f64, price: f64) -> Self {
        HousePoint { index, area, price }
    }
}
