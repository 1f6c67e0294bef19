/// The three aligned columns of the analysis: 1-based index, exponent,
/// and the gap to the previous exponent. Built once per run and passed
/// by reference to charting, fitting, and export.
#[derive(Debug, Clone)]
pub struct TrendDataset {
    pub indices: Vec<u32>,
    pub exponents: Vec<u64>,
    /// Aligned to `exponents`; the first position has no predecessor.
    pub differences: Vec<Option<u64>>,
}

impl TrendDataset {
    pub fn from_exponents(exponents: Vec<u64>) -> Self {
        let indices = (1..=exponents.len() as u32).collect();

        let mut differences = Vec::with_capacity(exponents.len());
        if !exponents.is_empty() {
            differences.push(None);
            for pair in exponents.windows(2) {
                differences.push(Some(pair[1].saturating_sub(pair[0])));
            }
        }

        Self {
            indices,
            exponents,
            differences,
        }
    }

    pub fn len(&self) -> usize {
        self.exponents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exponents.is_empty()
    }

    /// Index one past the observed range, the extrapolation target.
    pub fn next_index(&self) -> u32 {
        self.exponents.len() as u32 + 1
    }

    /// (index, exponent) pairs as chart/fit coordinates.
    pub fn exponent_points(&self) -> Vec<(f64, f64)> {
        self.indices
            .iter()
            .zip(&self.exponents)
            .map(|(&i, &e)| (i as f64, e as f64))
            .collect()
    }

    /// (index, difference) pairs, skipping the undefined first position.
    pub fn difference_points(&self) -> Vec<(f64, f64)> {
        self.indices
            .iter()
            .zip(&self.differences)
            .filter_map(|(&i, d)| d.map(|d| (i as f64, d as f64)))
            .collect()
    }
}
