//! Membership Functions
//!
//! The three canonical shapes used to describe a modality, plus the
//! evenly spaced triangular partition used for auto-generated modalities.
//!
//! Shapes serialize the way modality configurations spell them:
//! - `{"trimf": [a, b, c]}` - triangle with feet `a`, `c` and peak `b`
//! - `{"trapmf": [a, b, c, d]}` - trapezoid with plateau `[b, c]`
//! - `{"gaussmf": [mean, sigma]}` - gaussian bell

use std::fmt;

use serde::{Deserialize, Serialize};

/// Membership function shape
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum MembershipFunction {
    /// Triangular: (a, b, c) where b is peak
    #[serde(rename = "trimf")]
    Triangular(f64, f64, f64),
    /// Trapezoidal: (a, b, c, d) where [b, c] is peak plateau
    #[serde(rename = "trapmf")]
    Trapezoidal(f64, f64, f64, f64),
    /// Gaussian: (mean, sigma)
    #[serde(rename = "gaussmf")]
    Gaussian(f64, f64),
}

impl MembershipFunction {
    /// Configuration tag of this shape
    pub fn kind(&self) -> &'static str {
        match self {
            MembershipFunction::Triangular(..) => "trimf",
            MembershipFunction::Trapezoidal(..) => "trapmf",
            MembershipFunction::Gaussian(..) => "gaussmf",
        }
    }

    /// Check parameter ordering and finiteness.
    ///
    /// Returns a human-readable reason on failure.
    pub fn validate(&self) -> Result<(), String> {
        let params: Vec<f64> = match *self {
            MembershipFunction::Triangular(a, b, c) => vec![a, b, c],
            MembershipFunction::Trapezoidal(a, b, c, d) => vec![a, b, c, d],
            MembershipFunction::Gaussian(mean, sigma) => vec![mean, sigma],
        };
        if params.iter().any(|p| !p.is_finite()) {
            return Err(format!("{} parameters must be finite: {:?}", self.kind(), params));
        }

        match *self {
            MembershipFunction::Gaussian(_, sigma) if sigma <= 0.0 => {
                Err(format!("gaussmf sigma must be positive, got {sigma}"))
            }
            MembershipFunction::Gaussian(..) => Ok(()),
            _ if params.windows(2).any(|w| w[0] > w[1]) => Err(format!(
                "{} breakpoints must be non-decreasing: {:?}",
                self.kind(),
                params
            )),
            _ => Ok(()),
        }
    }

    /// Membership degree of `x`
    pub fn evaluate(&self, x: f64) -> f64 {
        match *self {
            MembershipFunction::Triangular(a, b, c) => triangular(x, a, b, c),
            MembershipFunction::Trapezoidal(a, b, c, d) => trapezoidal(x, a, b, c, d),
            MembershipFunction::Gaussian(mean, sigma) => gaussian(x, mean, sigma),
        }
    }

    /// Membership degree of every point of `universe`, in order
    pub fn evaluate_all(&self, universe: &[f64]) -> Vec<f64> {
        universe.iter().map(|&x| self.evaluate(x)).collect()
    }
}

impl fmt::Display for MembershipFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MembershipFunction::Triangular(a, b, c) => write!(f, "trimf[{a}, {b}, {c}]"),
            MembershipFunction::Trapezoidal(a, b, c, d) => {
                write!(f, "trapmf[{a}, {b}, {c}, {d}]")
            }
            MembershipFunction::Gaussian(mean, sigma) => write!(f, "gaussmf[{mean}, {sigma}]"),
        }
    }
}

// ==================== Shape Evaluation ====================

/// Triangle with feet `a`, `c` and peak `b`.
///
/// Degenerate sides (`a == b` or `b == c`) are vertical edges.
pub fn triangular(x: f64, a: f64, b: f64, c: f64) -> f64 {
    if x == b {
        1.0
    } else if a != b && a < x && x < b {
        (x - a) / (b - a)
    } else if b != c && b < x && x < c {
        (c - x) / (c - b)
    } else {
        0.0
    }
}

/// Trapezoid with feet `a`, `d` and plateau `[b, c]`
pub fn trapezoidal(x: f64, a: f64, b: f64, c: f64, d: f64) -> f64 {
    if x < a || x > d {
        0.0
    } else if x >= c {
        triangular(x, c, c, d)
    } else if x <= b {
        triangular(x, a, b, b)
    } else {
        1.0
    }
}

/// Gaussian bell centred on `mean`
pub fn gaussian(x: f64, mean: f64, sigma: f64) -> f64 {
    (-(x - mean).powi(2) / (2.0 * sigma * sigma)).exp()
}

// ==================== Auto Partition ====================

/// Evenly spaced triangles covering `[min, max]`.
///
/// Peaks sit on `count` equidistant centers; each triangle's feet are the
/// neighbouring centers, so adjacent degrees sum to one inside the range.
/// A zero-width range yields `count` spikes at `min`.
pub fn auto_partition(min: f64, max: f64, count: usize) -> Vec<MembershipFunction> {
    if count == 0 {
        return Vec::new();
    }
    if count == 1 {
        return vec![MembershipFunction::Triangular(min, min, max)];
    }
    let step = (max - min) / (count - 1) as f64;
    (0..count)
        .map(|i| {
            let center = if i == count - 1 {
                max
            } else {
                min + step * i as f64
            };
            MembershipFunction::Triangular(center - step, center, center + step)
        })
        .collect()
}
