/// Computes a dew point (°C) from a temperature (°C) and relative humidity (%).
pub type DewPointFn = fn(f64, f64) -> f64;

/// Magnus-Tetens approximation of the dew point.
///
/// Zero humidity has no dew point and yields NaN.
pub fn dew_point(temperature: f64, humidity: f64) -> f64 {
    const A: f64 = 17.27;
    const B: f64 = 237.7;
    let gamma = ((A * temperature) / (B + temperature)) + (humidity / 100.0).ln();
    (B * gamma) / (A - gamma)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_saturated_air_dew_point_equals_temperature() {
        assert!((dew_point(20.0, 100.0) - 20.0).abs() < 1e-9);
        assert!((dew_point(-4.0, 100.0) + 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_dew_point_known_values() {
        assert_eq!(format!("{:.2}", dew_point(18.5, 60.0)), "10.58");
        assert_eq!(format!("{:.2}", dew_point(-3.2, 85.0)), "-5.36");
    }
}
