pub mod fitter;
pub mod types;

pub use fitter::fit_linear;
pub use types::{LinearFit, Prediction, TrendDirection};
