//! The embedded housing table and its loader.
//!
//! The dataset is a fixed 50-row table of (area, price) sales compiled into
//! the binary. It is parsed once at startup and never mutated; there is no
//! write path and no support for loading other datasets.

use std::fmt;

use crate::domain::HousePoint;
use crate::utils::maths_utils;

/// The raw table: index, living area in m², price in million kr.
const HOUSING_CSV: &str = include_str!("housing.csv");

/// Error types for dataset parsing
#[derive(Debug, Clone, PartialEq)]
pub enum DatasetError {
    /// A data row has fewer than the three expected columns
    MissingColumn { line: usize },
    /// A field failed to parse as a number
    BadNumber { line: usize, value: String },
}

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetError::MissingColumn { line } => {
                write!(f, "line {}: expected index,area,price columns", line)
            }
            DatasetError::BadNumber { line, value } => {
                write!(f, "line {}: '{}' is not a number", line, value)
            }
        }
    }
}

impl std::error::Error for DatasetError {}

/// The ordered sequence of observed sales, as loaded from the embedded table.
#[derive(Debug, Clone, Default)]
pub struct HousingDataset {
    points: Vec<HousePoint>,
}

impl HousingDataset {
    pub fn new(points: Vec<HousePoint>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[HousePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Min and max living area over all rows.
    pub fn area_min_max(&self) -> (f64, f64) {
        let areas: Vec<f64> = self.points.iter().map(|p| p.area).collect();
        maths_utils::get_min_max(&areas)
    }

    /// Min and max price over all rows.
    pub fn price_min_max(&self) -> (f64, f64) {
        let prices: Vec<f64> = self.points.iter().map(|p| p.price).collect();
        maths_utils::get_min_max(&prices)
    }
}

/// Parses the compiled-in table. A parse failure here is a build defect, so
/// the caller is expected to treat it as fatal.
pub fn embedded_dataset() -> Result<HousingDataset, DatasetError> {
    parse_csv(HOUSING_CSV)
}

fn parse_csv(csv: &str) -> Result<HousingDataset, DatasetError> {
    let mut points = Vec::new();
    for (line_no, line) in csv.lines().enumerate() {
        // Skip the header row and trailing blanks
        if line_no == 0 || line.trim().is_empty() {
            continue;
        }
        let cols: Vec<&str> = line.split(',').collect();
        if cols.len() < 3 {
            return Err(DatasetError::MissingColumn { line: line_no + 1 });
        }
        let bad_number = |value: &str| DatasetError::BadNumber {
            line: line_no + 1,
            value: value.to_string(),
        };
        let index = cols[0].parse::<usize>().map_err(|_| bad_number(cols[0]))?;
        let area = cols[1].parse::<f64>().map_err(|_| bad_number(cols[1]))?;
        let price = cols[2].parse::<f64>().map_err(|_| bad_number(cols[2]))?;
        points.push(HousePoint::new(index, area, price));
    }
    Ok(HousingDataset::new(points))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_table_has_fifty_rows() {
        let dataset = embedded_dataset().expect("embedded table parses");
        assert_eq!(dataset.len(), 50);

        let first = dataset.points()[0];
        assert_eq!(first.index, 0);
        assert_eq!(first.area, 111.0);
        assert_eq!(first.price, 3.57);

        let last = dataset.points()[49];
        assert_eq!(last.index, 49);
        assert_eq!(last.area, 81.0);
        assert_eq!(last.price, 2.71);
    }

    #[test]
    fn embedded_table_min_max() {
        let dataset = embedded_dataset().unwrap();
        assert_eq!(dataset.area_min_max(), (23.0, 143.0));
        assert_eq!(dataset.price_min_max(), (0.71, 4.69));
    }

    #[test]
    fn short_row_is_rejected() {
        let err = parse_csv("index,area,price\n0,111.0").unwrap_err();
        assert_eq!(err, DatasetError::MissingColumn { line: 2 });
    }

    #[test]
    fn non_numeric_field_is_rejected() {
        let err = parse_csv("index,area,price\n0,abc,3.57").unwrap_err();
        assert_eq!(
            err,
            DatasetError::BadNumber {
                line: 2,
                value: "abc".to_string()
            }
        );
    }
}
