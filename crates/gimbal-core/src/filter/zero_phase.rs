//! Forward-backward (zero-phase) IIR filtering.

use super::butterworth::FilterCoeffs;

/// Apply `coeffs` forward and backward over `signal`, cancelling phase delay.
///
/// Follows the standard filtfilt recipe: odd reflection padding at both ends,
/// steady-state initial conditions scaled by the first padded sample, one
/// forward and one reversed pass, padding stripped.
///
/// # Panics
///
/// Panics if `signal.len() <= coeffs.pad_len()`; there are not enough
/// samples to reflect about the endpoints. [`spatial_lowpass`] rejects such
/// frames up front with [`FrameTooSmall`].
///
/// [`spatial_lowpass`]: crate::filter::spatial_lowpass
/// [`FrameTooSmall`]: crate::error::GimbalError::FrameTooSmall
pub fn filtfilt(coeffs: &FilterCoeffs, signal: &[f64]) -> Vec<f64> {
    let pad = coeffs.pad_len();
    let n = signal.len();
    assert!(n > pad, "signal too short for zero-phase padding");

    // Odd reflection about both endpoints suppresses edge transients.
    let mut extended = Vec::with_capacity(n + 2 * pad);
    for i in (1..=pad).rev() {
        extended.push(2.0 * signal[0] - signal[i]);
    }
    extended.extend_from_slice(signal);
    for i in 1..=pad {
        extended.push(2.0 * signal[n - 1] - signal[n - 1 - i]);
    }

    let zi = steady_state(coeffs);

    let scaled: Vec<f64> = zi.iter().map(|z| z * extended[0]).collect();
    let mut forward = lfilter(coeffs, &extended, &scaled);
    forward.reverse();
    let scaled: Vec<f64> = zi.iter().map(|z| z * forward[0]).collect();
    let mut backward = lfilter(coeffs, &forward, &scaled);
    backward.reverse();

    backward[pad..pad + n].to_vec()
}

/// Direct-form II transposed IIR filter with initial state `zi`.
fn lfilter(coeffs: &FilterCoeffs, input: &[f64], zi: &[f64]) -> Vec<f64> {
    let b = &coeffs.b;
    let a = &coeffs.a;
    let order = a.len() - 1;
    let mut state = zi.to_vec();
    let mut output = Vec::with_capacity(input.len());

    for &x in input {
        let y = b[0] * x + state.first().copied().unwrap_or(0.0);
        for i in 0..order {
            let next = if i + 1 < order { state[i + 1] } else { 0.0 };
            state[i] = b[i + 1] * x + next - a[i + 1] * y;
        }
        output.push(y);
    }

    output
}

/// Steady-state filter delays for a unit step input.
///
/// Solves `(I - C^T) zi = B` where `C` is the companion matrix of `a`, so
/// that a constant signal passes through `lfilter` without a transient.
fn steady_state(coeffs: &FilterCoeffs) -> Vec<f64> {
    let b = &coeffs.b;
    let a = &coeffs.a;
    let n = a.len().max(b.len()) - 1;

    let mut matrix = vec![vec![0.0; n]; n];
    let mut rhs = vec![0.0; n];
    for i in 0..n {
        let ai = a.get(i + 1).copied().unwrap_or(0.0);
        matrix[i][0] += ai;
        if i == 0 {
            matrix[0][0] += 1.0;
        } else {
            matrix[i][i] += 1.0;
        }
        if i + 1 < n {
            matrix[i][i + 1] -= 1.0;
        }
        rhs[i] = b.get(i + 1).copied().unwrap_or(0.0) - ai * b[0];
    }

    solve_dense(&mut matrix, &mut rhs);
    rhs
}

/// In-place Gaussian elimination with partial pivoting; solution lands in `rhs`.
fn solve_dense(matrix: &mut [Vec<f64>], rhs: &mut [f64]) {
    let n = rhs.len();

    for col in 0..n {
        let mut pivot = col;
        for row in col + 1..n {
            if matrix[row][col].abs() > matrix[pivot][col].abs() {
                pivot = row;
            }
        }
        matrix.swap(pivot, col);
        rhs.swap(pivot, col);

        for row in col + 1..n {
            let factor = matrix[row][col] / matrix[col][col];
            for k in col..n {
                matrix[row][k] -= factor * matrix[col][k];
            }
            rhs[row] -= factor * rhs[col];
        }
    }

    for col in (0..n).rev() {
        let mut acc = rhs[col];
        for k in col + 1..n {
            acc -= matrix[col][k] * rhs[k];
        }
        rhs[col] = acc / matrix[col][col];
    }
}
