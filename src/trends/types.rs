use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrendDirection {
    Increasing,   // Values going up
    Decreasing,   // Values going down
    Stable,       // No significant change
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrendDirection::Increasing => write!(f, "increasing"),
            TrendDirection::Decreasing => write!(f, "decreasing"),
            TrendDirection::Stable => write!(f, "stable"),
        }
    }
}

/// Ordinary-least-squares line over (index, exponent) pairs.
#[derive(Debug, Clone, Copy)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
    /// Coefficient of determination, 0.0-1.0. Reported for context only;
    /// it does not gate the prediction.
    pub r_squared: f64,
}

impl LinearFit {
    /// Evaluates the fitted line at an arbitrary index.
    pub fn predict(&self, index: f64) -> f64 {
        self.slope * index + self.intercept
    }

    pub fn direction(&self) -> TrendDirection {
        if self.slope.abs() < f64::EPSILON {
            TrendDirection::Stable
        } else if self.slope > 0.0 {
            TrendDirection::Increasing
        } else {
            TrendDirection::Decreasing
        }
    }
}

/// One-step extrapolation of a fitted trend.
#[derive(Debug, Clone, Copy)]
pub struct Prediction {
    /// The index one past the observed range.
    pub index: u32,
    /// Raw model output before integer conversion.
    pub raw: f64,
    /// Truncated toward zero, matching the reference behavior.
    pub exponent: u64,
}

impl Prediction {
    pub fn next(fit: &LinearFit, index: u32) -> Self {
        let raw = fit.predict(index as f64);
        Self {
            index,
            raw,
            exponent: raw.max(0.0).trunc() as u64,
        }
    }
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Predicted next Mersenne prime exponent: {}", self.exponent)
    }
}
