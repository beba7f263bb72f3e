//! Area unit conversion helpers

/// One hectare in square meters.
pub const HECTARE_IN_SQUARE_METERS: f64 = 10_000.0;

/// Convert an area from square meters to hectares.
pub fn square_meters_to_hectares(area_m2: f64) -> f64 {
    area_m2 / HECTARE_IN_SQUARE_METERS
}

/// Format an area in hectares with two decimal places.
pub fn format_area(area_ha: f64) -> String {
    format!("{:.2}", area_ha)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_meters_to_hectares() {
        assert_eq!(square_meters_to_hectares(10_000.0), 1.0);
        assert_eq!(square_meters_to_hectares(0.0), 0.0);
        assert!((square_meters_to_hectares(1_234_567.0) - 123.4567).abs() < 1e-9);
    }

    #[test]
    fn test_format_area() {
        assert_eq!(format_area(12.345), "12.35");
        assert_eq!(format_area(0.0), "0.00");
    }
}
