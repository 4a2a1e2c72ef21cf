//! Spatial low-pass filtering of a video stack.
//!
//! Foreground objects are spatially concentrated and high-frequency compared
//! to the smooth background illumination. Suppressing them leaves a stable
//! background signature that frames can be registered against.

pub mod butterworth;
pub mod zero_phase;

use ndarray::{Array2, Array3, ArrayView2, Axis};
use rayon::prelude::*;
use tracing::debug;

use crate::consts::{EPSILON, PARALLEL_FRAME_THRESHOLD};
use crate::error::{GimbalError, Result};

use butterworth::{butter_lowpass, FilterCoeffs};
use zero_phase::filtfilt;

/// Suppress spatial structure sharper than `cutoff` in every frame, then
/// normalize the stack so its largest magnitude is 1.
///
/// Each frame is zero-phase filtered along the row axis and then the column
/// axis, so fine detail is removed in both dimensions without shifting the
/// remaining background.
pub fn spatial_lowpass(video: &Array3<f64>, order: usize, cutoff: f64) -> Result<Array3<f64>> {
    let coeffs = butter_lowpass(order, cutoff)?;
    let (frames, height, width) = video.dim();
    let pad = coeffs.pad_len();
    if height <= pad || width <= pad {
        return Err(GimbalError::FrameTooSmall {
            height,
            width,
            order,
            min: pad + 1,
        });
    }

    let smoothed: Vec<Array2<f64>> = if frames >= PARALLEL_FRAME_THRESHOLD {
        video
            .axis_iter(Axis(0))
            .into_par_iter()
            .map(|frame| smooth_frame(&frame, &coeffs))
            .collect()
    } else {
        video
            .axis_iter(Axis(0))
            .map(|frame| smooth_frame(&frame, &coeffs))
            .collect()
    };

    let mut filtered = Array3::<f64>::zeros((frames, height, width));
    for (index, frame) in smoothed.into_iter().enumerate() {
        filtered.index_axis_mut(Axis(0), index).assign(&frame);
    }

    let peak = filtered.iter().fold(0.0f64, |acc, v| acc.max(v.abs()));
    if peak < EPSILON {
        return Err(GimbalError::DegenerateInput);
    }
    debug!(peak, "Normalizing filtered stack");
    filtered.mapv_inplace(|v| v / peak);

    Ok(filtered)
}

/// Zero-phase filter one frame along both image axes.
fn smooth_frame(frame: &ArrayView2<'_, f64>, coeffs: &FilterCoeffs) -> Array2<f64> {
    let mut out = frame.to_owned();
    for mut lane in out.lanes_mut(Axis(0)) {
        let samples: Vec<f64> = lane.iter().copied().collect();
        for (dst, value) in lane.iter_mut().zip(filtfilt(coeffs, &samples)) {
            *dst = value;
        }
    }
    for mut lane in out.lanes_mut(Axis(1)) {
        let samples: Vec<f64> = lane.iter().copied().collect();
        for (dst, value) in lane.iter_mut().zip(filtfilt(coeffs, &samples)) {
            *dst = value;
        }
    }
    out
}
