use serde::{Deserialize, Serialize};
use statrs::distribution::{ContinuousCDF, StudentsT};

use crate::StatsError;

/// Standard normal quantile at 97.5%, for the two-sided 95% interval.
const Z_95: f64 = 1.96;

/// Pearson correlation between two paired samples, with its significance and
/// a 95% confidence interval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Correlation {
    /// Correlation coefficient in [-1, 1], rounded to 3 decimal places.
    pub r: f64,
    /// Two-tailed p-value under the null hypothesis of no correlation,
    /// rounded to 4 decimal places.
    pub p_value: f64,
    /// Number of paired observations.
    pub n: usize,
    /// Lower bound of the 95% confidence interval, rounded to 3 decimal places.
    pub ci_95_lower: f64,
    /// Upper bound of the 95% confidence interval, rounded to 3 decimal places.
    pub ci_95_upper: f64,
}

/// Compute Pearson's r between two index-aligned samples.
///
/// The p-value comes from the exact t test with n−2 degrees of freedom. The
/// confidence interval is built in Fisher z-space (z = arctanh r, standard
/// error 1/sqrt(n−3), bounds z ± 1.96·se) and mapped back through tanh, so
/// both bounds land in [-1, 1].
///
/// At least 4 observations are required: the interval's standard error
/// divides by sqrt(n−3), which is undefined at n = 3.
pub fn pearson_correlation(xs: &[f64], ys: &[f64]) -> Result<Correlation, StatsError> {
    if xs.is_empty() || ys.is_empty() {
        return Err(StatsError::Empty);
    }
    if xs.len() != ys.len() {
        return Err(StatsError::LengthMismatch {
            left: xs.len(),
            right: ys.len(),
        });
    }
    if let Some(index) = xs.iter().chain(ys).position(|v| !v.is_finite()) {
        // Index within the offending sequence, not the chained pair.
        return Err(StatsError::NonFinite {
            index: index % xs.len(),
        });
    }

    let n = xs.len();
    if n < 4 {
        return Err(StatsError::InsufficientData { n });
    }

    let r = pearson_r(xs, ys)?;
    let p_value = two_tailed_p(r, n);

    let z = r.atanh();
    let se = 1.0 / ((n - 3) as f64).sqrt();
    let ci_95_lower = (z - Z_95 * se).tanh();
    let ci_95_upper = (z + Z_95 * se).tanh();

    tracing::debug!(r, p_value, n, "computed correlation");

    Ok(Correlation {
        r: round_to(r, 3),
        p_value: round_to(p_value, 4),
        n,
        ci_95_lower: round_to(ci_95_lower, 3),
        ci_95_upper: round_to(ci_95_upper, 3),
    })
}

fn pearson_r(xs: &[f64], ys: &[f64]) -> Result<f64, StatsError> {
    let n = xs.len() as f64;
    let mean_x = xs.iter().sum::<f64>() / n;
    let mean_y = ys.iter().sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (x, y) in xs.iter().zip(ys) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x == 0.0 || var_y == 0.0 {
        return Err(StatsError::ConstantInput);
    }

    // Clamp floating-point drift past the mathematical range.
    Ok((cov / (var_x * var_y).sqrt()).clamp(-1.0, 1.0))
}

fn two_tailed_p(r: f64, n: usize) -> f64 {
    let df = (n - 2) as f64;
    let denom = 1.0 - r * r;
    if denom <= f64::EPSILON {
        // |r| = 1: the t statistic is infinite, no tail mass remains.
        return 0.0;
    }

    let t = r * (df / denom).sqrt();
    let dist = StudentsT::new(0.0, 1.0, df).expect("degrees of freedom is positive for n >= 4");
    2.0 * (1.0 - dist.cdf(t.abs()))
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
