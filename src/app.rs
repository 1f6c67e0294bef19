use crate::config::Config;
use crate::error::Result;
use crate::loader;
use crate::series::TrendDataset;
use crate::trends::{fit_linear, LinearFit, Prediction};

/// Which chart takes the whole frame; `Both` stacks them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChartFocus {
    Both,
    Exponents,
    Differences,
}

impl ChartFocus {
    pub fn next(self) -> Self {
        match self {
            ChartFocus::Both => ChartFocus::Exponents,
            ChartFocus::Exponents => ChartFocus::Differences,
            ChartFocus::Differences => ChartFocus::Both,
        }
    }
}

pub struct App {
    pub config: Config,
    pub dataset: TrendDataset,
    pub fit: LinearFit,
    pub prediction: Prediction,
    pub running: bool,
    pub focus: ChartFocus,
}

impl App {
    /// Runs the numeric pipeline: load, difference, fit, predict.
    /// Charting is deliberately not part of this so the prediction
    /// works without a terminal backend.
    pub fn new(config: Config, input_path: &str) -> Result<Self> {
        let exponents = loader::load_exponents(input_path)?;
        log::info!("Loaded {} known exponents from {}", exponents.len(), input_path);

        let dataset = TrendDataset::from_exponents(exponents);
        let fit = fit_linear(&dataset)?;
        log::info!(
            "Linear fit: slope={:.4} intercept={:.4} r2={:.4} ({})",
            fit.slope,
            fit.intercept,
            fit.r_squared,
            fit.direction()
        );

        let prediction = Prediction::next(&fit, dataset.next_index());

        Ok(Self {
            config,
            dataset,
            fit,
            prediction,
            running: true,
            focus: ChartFocus::Both,
        })
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn cycle_focus(&mut self) {
        self.focus = self.focus.next();
    }
}
