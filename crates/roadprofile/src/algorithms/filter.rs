//! Butterworth IIR filtering of profiles.
//!
//! ## Purpose
//!
//! Mean profile depth is specified on a high-pass filtered profile so that
//! long-wavelength unevenness does not count as texture. This module designs
//! Butterworth low- and high-pass filters and runs them over a signal.
//!
//! ## Design notes
//!
//! * **Bilinear transform**: The analog prototype is mapped with a prewarped
//!   cutoff, `K = tan(pi * cutoff / sample_rate)`.
//! * **Cascaded sections**: An order-`N` filter is a chain of second-order
//!   sections, one per conjugate pole pair, plus one first-order section when
//!   `N` is odd.
//! * **Causal**: The filter runs forward once with zero initial state, so the
//!   output is delayed like a single-pass `lfilter`.
//!
//! ## Key concepts
//!
//! * **Section quality**: `Q_k = 1 / (2 sin(pi (2k + 1) / (2N)))`.
//! * **Direct form II transposed**: Two state values per section.
//!
//! ## Invariants
//!
//! * Low-pass sections have unit gain at DC; high-pass sections have unit gain at Nyquist.
//!
//! ## Non-goals
//!
//! * Zero-phase (forward-backward) filtering.
//! * This module does not validate the cutoff (handled by `Validator`).

// External dependencies
use core::f64::consts::PI;
use num_traits::Float;

// Internal dependencies
use crate::math::constant;

// ============================================================================
// Filter Kind
// ============================================================================

/// Pass band of the filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterKind {
    /// Attenuate wavelengths longer than the cutoff.
    #[default]
    HighPass,

    /// Attenuate wavelengths shorter than the cutoff.
    LowPass,
}

/// Design parameters of a Butterworth filter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterSpec<T> {
    /// Filter order.
    pub order: usize,

    /// Cutoff frequency, in the unit of `sample_rate`.
    pub cutoff: T,

    /// Sampling frequency.
    pub sample_rate: T,

    /// Pass band.
    pub kind: FilterKind,
}

impl<T: Float> FilterSpec<T> {
    /// Parameters of the 2nd-order high-pass applied before mean profile depth.
    pub fn mpd_highpass() -> Self {
        // Sample rate 2 makes the cutoff a fraction of Nyquist.
        Self {
            order: 2,
            cutoff: constant(ButterworthFilter::<T>::MPD_HIGHPASS_CUTOFF),
            sample_rate: constant(2.0),
            kind: FilterKind::HighPass,
        }
    }

    /// Design the filter described by these parameters.
    pub fn design(&self) -> ButterworthFilter<T> {
        ButterworthFilter::design(self.order, self.cutoff, self.sample_rate, self.kind)
    }
}

// ============================================================================
// Sections
// ============================================================================

// Normalized biquad coefficients (a0 == 1).
#[derive(Debug, Clone, Copy, PartialEq)]
struct Section<T> {
    b: [T; 3],
    a: [T; 2],
}

impl<T: Float> Section<T> {
    // Second-order section with quality factor `q` at prewarped frequency `k`.
    fn second_order(k: T, q: T, kind: FilterKind) -> Self {
        let one = T::one();
        let two = one + one;
        let k2 = k * k;
        let norm = one / (one + k / q + k2);

        let b = match kind {
            FilterKind::LowPass => {
                let b0 = k2 * norm;
                [b0, two * b0, b0]
            }
            FilterKind::HighPass => [norm, -two * norm, norm],
        };

        Self {
            b,
            a: [two * (k2 - one) * norm, (one - k / q + k2) * norm],
        }
    }

    // First-order section for the real pole of odd-order filters.
    fn first_order(k: T, kind: FilterKind) -> Self {
        let one = T::one();
        let norm = one / (one + k);

        let b = match kind {
            FilterKind::LowPass => [k * norm, k * norm, T::zero()],
            FilterKind::HighPass => [norm, -norm, T::zero()],
        };

        Self {
            b,
            a: [(k - one) * norm, T::zero()],
        }
    }

    // Run the section over `signal` in place.
    fn process(&self, signal: &mut [T]) {
        let [b0, b1, b2] = self.b;
        let [a1, a2] = self.a;
        let mut s1 = T::zero();
        let mut s2 = T::zero();

        for v in signal.iter_mut() {
            let input = *v;
            let output = b0 * input + s1;
            s1 = b1 * input - a1 * output + s2;
            s2 = b2 * input - a2 * output;
            *v = output;
        }
    }
}

// ============================================================================
// Butterworth Filter
// ============================================================================

/// Butterworth filter realised as cascaded sections.
#[derive(Debug, Clone, PartialEq)]
pub struct ButterworthFilter<T> {
    sections: Vec<Section<T>>,
    order: usize,
    kind: FilterKind,
}

impl<T: Float> ButterworthFilter<T> {
    /// Cutoff of the MPD high-pass filter as a fraction of the Nyquist frequency.
    pub const MPD_HIGHPASS_CUTOFF: f64 = 1.0 / 140.0;

    /// Design an `order`-th Butterworth filter.
    ///
    /// `cutoff` and `sample_rate` share a unit (e.g. cycles per metre); the
    /// cutoff must lie strictly between 0 and `sample_rate / 2`.
    pub fn design(order: usize, cutoff: T, sample_rate: T, kind: FilterKind) -> Self {
        let k = (constant::<T>(PI) * cutoff / sample_rate).tan();
        let n = constant::<T>(order as f64);
        let two = T::one() + T::one();

        let mut sections: Vec<Section<T>> = (0..order / 2)
            .map(|i| {
                let angle = constant::<T>(PI) * constant::<T>((2 * i + 1) as f64) / (two * n);
                let q = T::one() / (two * angle.sin());
                Section::second_order(k, q, kind)
            })
            .collect();

        if order % 2 == 1 {
            sections.push(Section::first_order(k, kind));
        }

        Self {
            sections,
            order,
            kind,
        }
    }

    /// The 2nd-order high-pass used before mean profile depth.
    pub fn mpd_highpass() -> Self {
        FilterSpec::mpd_highpass().design()
    }

    /// Filter order.
    pub fn order(&self) -> usize {
        self.order
    }

    /// Pass band.
    pub fn kind(&self) -> FilterKind {
        self.kind
    }

    /// Filter a copy of `signal`.
    pub fn apply(&self, signal: &[T]) -> Vec<T> {
        let mut out = signal.to_vec();
        self.apply_in_place(&mut out);
        out
    }

    /// Filter `signal` in place.
    pub fn apply_in_place(&self, signal: &mut [T]) {
        for section in &self.sections {
            section.process(signal);
        }
    }
}
