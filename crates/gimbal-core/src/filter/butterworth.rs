//! Digital Butterworth low-pass design.
//!
//! Standard recipe: analog prototype poles on the left unit semicircle,
//! frequency pre-warp, bilinear transform, polynomial expansion from roots.

use std::f64::consts::PI;

use num_complex::Complex64;

use crate::error::{GimbalError, Result};

/// Transfer-function coefficients of a digital IIR filter.
/// Normalized so `a[0] == 1`.
#[derive(Clone, Debug)]
pub struct FilterCoeffs {
    pub b: Vec<f64>,
    pub a: Vec<f64>,
}

impl FilterCoeffs {
    /// Edge padding length required for zero-phase application.
    pub fn pad_len(&self) -> usize {
        3 * self.a.len().max(self.b.len())
    }
}

/// Design a low-pass Butterworth filter of the given order.
///
/// `cutoff` is normalized to the Nyquist frequency and must lie strictly
/// between 0 and 1.
pub fn butter_lowpass(order: usize, cutoff: f64) -> Result<FilterCoeffs> {
    if order == 0 {
        return Err(GimbalError::InvalidOrder(order));
    }
    if !(cutoff > 0.0 && cutoff < 1.0) {
        return Err(GimbalError::InvalidCutoff(cutoff));
    }

    // Pre-warp the digital cutoff onto the analog frequency axis (fs = 2).
    let warped = 4.0 * (PI * cutoff / 2.0).tan();

    // Analog prototype: poles evenly spaced on the left unit semicircle,
    // no zeros, unit gain. Scale to the warped cutoff.
    let poles: Vec<Complex64> = (0..order)
        .map(|k| {
            let m = 2.0 * k as f64 - (order as f64 - 1.0);
            -Complex64::from_polar(warped, PI * m / (2.0 * order as f64))
        })
        .collect();
    let gain = warped.powi(order as i32);

    // Bilinear transform into the z-domain; the analog zeros at infinity
    // land on z = -1.
    let fs2 = Complex64::new(4.0, 0.0);
    let denom: Complex64 = poles.iter().map(|p| fs2 - p).product();
    let digital_poles: Vec<Complex64> = poles.iter().map(|p| (fs2 + p) / (fs2 - p)).collect();
    let digital_zeros = vec![Complex64::new(-1.0, 0.0); order];
    let k = gain * (Complex64::new(1.0, 0.0) / denom).re;

    let b = polynomial(&digital_zeros).iter().map(|c| k * c.re).collect();
    let a = polynomial(&digital_poles).iter().map(|c| c.re).collect();

    Ok(FilterCoeffs { b, a })
}

/// Expand a monic polynomial from its roots into descending-power coefficients.
fn polynomial(roots: &[Complex64]) -> Vec<Complex64> {
    let mut coeffs = vec![Complex64::new(1.0, 0.0)];
    for root in roots {
        coeffs.push(Complex64::new(0.0, 0.0));
        for i in (1..coeffs.len()).rev() {
            let carry = coeffs[i - 1] * root;
            coeffs[i] -= carry;
        }
    }
    coeffs
}
