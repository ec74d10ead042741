//! Degree-1 polynomial fits.
//!
//! ## Purpose
//!
//! This module provides the straight-line fits used for bridging interior
//! dropouts (exact two-point fit) and for removing the linear trend of an
//! evaluation window before depth statistics (least-squares fit).
//!
//! ## Design notes
//!
//! * **Centered**: The least-squares fit works on mean-centered coordinates to
//!   limit cancellation on long distance axes.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * A two-point fit reproduces both anchor points.
//! * A least-squares fit through collinear points reproduces them.
//!
//! ## Non-goals
//!
//! * Higher-order polynomials and weighted fits.

// External dependencies
use num_traits::Float;

/// Straight line `y = intercept + slope * x`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineFit<T> {
    /// Slope of the line.
    pub slope: T,

    /// Value at `x = 0`.
    pub intercept: T,
}

impl<T: Float> LineFit<T> {
    /// Exact line through two points.
    ///
    /// Returns `None` when both points share the same `x`.
    pub fn through((x0, y0): (T, T), (x1, y1): (T, T)) -> Option<Self> {
        let dx = x1 - x0;
        if dx == T::zero() || !dx.is_finite() {
            return None;
        }

        let slope = (y1 - y0) / dx;
        Some(Self {
            slope,
            intercept: y0 - slope * x0,
        })
    }

    /// Ordinary least-squares line through `(x[i], y[i])`.
    ///
    /// A vertical point cloud (all `x` equal) yields the horizontal line
    /// through the mean of `y`. Returns `None` for empty input.
    pub fn least_squares(x: &[T], y: &[T]) -> Option<Self> {
        let n = x.len().min(y.len());
        if n == 0 {
            return None;
        }

        let count = T::from(n)?;
        let x_mean = x[..n].iter().fold(T::zero(), |acc, &v| acc + v) / count;
        let y_mean = y[..n].iter().fold(T::zero(), |acc, &v| acc + v) / count;

        let mut sxx = T::zero();
        let mut sxy = T::zero();
        for (&xi, &yi) in x[..n].iter().zip(&y[..n]) {
            let dx = xi - x_mean;
            sxx = sxx + dx * dx;
            sxy = sxy + dx * (yi - y_mean);
        }

        let slope = if sxx > T::zero() { sxy / sxx } else { T::zero() };
        Some(Self {
            slope,
            intercept: y_mean - slope * x_mean,
        })
    }

    /// Evaluate the line at `x`.
    #[inline]
    pub fn evaluate(&self, x: T) -> T {
        self.intercept + self.slope * x
    }

    /// Overwrite `out[i]` with the line evaluated at `x[i]`.
    pub fn evaluate_into(&self, x: &[T], out: &mut [T]) {
        for (o, &xi) in out.iter_mut().zip(x) {
            *o = self.evaluate(xi);
        }
    }

    /// Residuals `y[i] - line(x[i])`.
    pub fn residuals(&self, x: &[T], y: &[T]) -> Vec<T> {
        x.iter()
            .zip(y)
            .map(|(&xi, &yi)| yi - self.evaluate(xi))
            .collect()
    }
}

/// Fit the straight line through two points.
///
/// Returns `None` when the points coincide in `x`.
#[inline]
pub fn fit_line<T: Float>(points: [(T, T); 2]) -> Option<LineFit<T>> {
    LineFit::through(points[0], points[1])
}
