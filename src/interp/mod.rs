//! Lookup-table interpolation
//!
//! Piecewise-linear interpolation over a sorted table of `(x, y)` samples.
//! Queries left of the first sample take the first `y`, queries right of
//! the last sample take the last `y`; NaN queries yield NaN.

/// Sorted `(x, y)` samples
#[derive(Clone, Debug, Default)]
pub struct LookupTable {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl LookupTable {
    /// Build from unsorted, equally long sample slices.
    ///
    /// Samples with a NaN `x` are dropped. Ties keep their input order.
    pub fn new(xs: &[f64], ys: &[f64]) -> Self {
        let mut pairs: Vec<(f64, f64)> = xs
            .iter()
            .copied()
            .zip(ys.iter().copied())
            .filter(|(x, _)| !x.is_nan())
            .collect();
        pairs.sort_by(|a, b| a.0.total_cmp(&b.0));
        let (xs, ys) = pairs.into_iter().unzip();
        Self { xs, ys }
    }

    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Interpolated value at `x`
    pub fn interpolate(&self, x: f64) -> f64 {
        let n = self.xs.len();
        if n == 0 || x.is_nan() {
            return f64::NAN;
        }
        if x < self.xs[0] {
            return self.ys[0];
        }
        if x >= self.xs[n - 1] {
            return self.ys[n - 1];
        }

        // xs[j] <= x < xs[j + 1]
        let j = self.xs.partition_point(|&v| v <= x) - 1;
        let (x0, x1) = (self.xs[j], self.xs[j + 1]);
        let (y0, y1) = (self.ys[j], self.ys[j + 1]);
        if x == x0 {
            return y0;
        }
        y0 + (y1 - y0) * (x - x0) / (x1 - x0)
    }

    /// Interpolated values at every point of `xs`
    pub fn interpolate_all(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.interpolate(x)).collect()
    }
}
