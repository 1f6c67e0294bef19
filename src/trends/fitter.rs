use super::types::LinearFit;
use crate::error::{Error, Result};
use crate::series::TrendDataset;

/// Fits `exponent = slope * index + intercept` by ordinary least squares
/// over the full history. No weighting, no outlier handling.
pub fn fit_linear(dataset: &TrendDataset) -> Result<LinearFit> {
    let points = dataset.exponent_points();
    fit_points(&points)
}

fn fit_points(points: &[(f64, f64)]) -> Result<LinearFit> {
    let n = points.len();
    if n < 2 {
        return Err(Error::InsufficientData(n));
    }

    let n_f = n as f64;
    let mean_x: f64 = points.iter().map(|(x, _)| x).sum::<f64>() / n_f;
    let mean_y: f64 = points.iter().map(|(_, y)| y).sum::<f64>() / n_f;

    let mut numerator = 0.0;
    let mut denominator = 0.0;

    for &(x, y) in points {
        numerator += (x - mean_x) * (y - mean_y);
        denominator += (x - mean_x).powi(2);
    }

    // Cannot happen with distinct 1..N indices, but a flat x column must
    // not silently produce a degenerate slope.
    if denominator == 0.0 {
        return Err(Error::InsufficientData(n));
    }

    let slope = numerator / denominator;
    let intercept = mean_y - slope * mean_x;

    let mut ss_res = 0.0;
    let mut ss_tot = 0.0;

    for &(x, y) in points {
        let y_pred = slope * x + intercept;
        ss_res += (y - y_pred).powi(2);
        ss_tot += (y - mean_y).powi(2);
    }

    let r_squared = if ss_tot != 0.0 {
        (1.0 - ss_res / ss_tot).max(0.0)
    } else {
        1.0
    };

    Ok(LinearFit {
        slope,
        intercept,
        r_squared,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trends::Prediction;

    const TOL: f64 = 1e-9;

    #[test]
    fn test_fit_matches_normal_equations() {
        // Manually solved for x=[1,2,3,4], y=[2,3,5,7]:
        // slope = 1.7, intercept = 0.0
        let ds = TrendDataset::from_exponents(vec![2, 3, 5, 7]);
        let fit = fit_linear(&ds).unwrap();
        assert!((fit.slope - 1.7).abs() < TOL);
        assert!(fit.intercept.abs() < TOL);
        assert!((fit.predict(5.0) - 8.5).abs() < TOL);
    }

    #[test]
    fn test_perfect_line_has_full_confidence() {
        let ds = TrendDataset::from_exponents(vec![3, 5, 7, 9]);
        let fit = fit_linear(&ds).unwrap();
        assert!((fit.slope - 2.0).abs() < TOL);
        assert!((fit.r_squared - 1.0).abs() < TOL);
    }

    #[test]
    fn test_single_point_is_insufficient() {
        let ds = TrendDataset::from_exponents(vec![2]);
        assert!(matches!(
            fit_linear(&ds),
            Err(Error::InsufficientData(1))
        ));
    }

    #[test]
    fn test_empty_series_is_insufficient() {
        let ds = TrendDataset::from_exponents(Vec::new());
        assert!(matches!(
            fit_linear(&ds),
            Err(Error::InsufficientData(0))
        ));
    }

    #[test]
    fn test_prediction_truncates_toward_zero() {
        // Indices 1..8 vs 2,3,5,7,13,17,19,31: slope = 162.5/42,
        // intercept = 12.125 - slope * 4.5, value at 9 ~= 29.5357.
        let ds = TrendDataset::from_exponents(vec![2, 3, 5, 7, 13, 17, 19, 31]);
        let fit = fit_linear(&ds).unwrap();
        let prediction = Prediction::next(&fit, ds.next_index());
        assert_eq!(prediction.index, 9);
        assert!((prediction.raw - 29.535714285714285).abs() < 1e-9);
        assert_eq!(prediction.exponent, 29);
    }

    #[test]
    fn test_fit_is_deterministic() {
        let exps = vec![2, 3, 5, 7, 13, 17, 19, 31];
        let a = fit_linear(&TrendDataset::from_exponents(exps.clone())).unwrap();
        let b = fit_linear(&TrendDataset::from_exponents(exps)).unwrap();
        assert_eq!(a.slope.to_bits(), b.slope.to_bits());
        assert_eq!(a.intercept.to_bits(), b.intercept.to_bits());
    }
}
