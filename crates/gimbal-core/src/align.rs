//! Marginal-profile landmark alignment.
//!
//! Rather than full cross-correlation, the displacement between two filtered
//! frames is estimated from their 1-D marginal profiles. The filtered
//! background crosses a z-score threshold at roughly the same spot in every
//! frame, which makes the mean index of the exceeding samples a cheap and
//! stable alignment anchor.

use ndarray::{ArrayView2, Axis};

use crate::consts::EPSILON;
use crate::error::{GimbalError, ProfileAxis, Result};
use crate::video::Displacement;

/// Estimate the translation of `frame` relative to `target`.
///
/// Both images are collapsed to a column profile (mean over rows) and a row
/// profile (mean over columns); each profile is standardized to zero mean and
/// unit variance, and the mean index of the samples exceeding `threshold`
/// serves as a landmark. The displacement along each axis is the frame
/// landmark minus the target landmark, so a frame whose content sits two
/// columns to the right of the target reports `tx = 2`.
///
/// `threshold` is dataset-dependent: too high and nothing exceeds it
/// (`LandmarkNotFound`), too low and the landmark smears across most of the
/// image and stops discriminating.
pub fn align_frame(
    target: &ArrayView2<'_, f64>,
    frame: &ArrayView2<'_, f64>,
    threshold: f64,
) -> Result<Displacement> {
    let (target_height, target_width) = target.dim();
    let (frame_height, frame_width) = frame.dim();
    if (target_height, target_width) != (frame_height, frame_width) {
        return Err(GimbalError::DimensionMismatch {
            target_height,
            target_width,
            frame_height,
            frame_width,
        });
    }
    if target_height == 0 || target_width == 0 {
        return Err(GimbalError::EmptyFrame);
    }

    let tx = landmark(&profile(frame, Axis(0)), threshold, ProfileAxis::Column)?
        - landmark(&profile(target, Axis(0)), threshold, ProfileAxis::Column)?;
    let ty = landmark(&profile(frame, Axis(1)), threshold, ProfileAxis::Row)?
        - landmark(&profile(target, Axis(1)), threshold, ProfileAxis::Row)?;

    Ok(Displacement { tx, ty })
}

/// Collapse an image to its mean profile along `axis`.
fn profile(image: &ArrayView2<'_, f64>, axis: Axis) -> Vec<f64> {
    let n = image.len_of(axis) as f64;
    image.sum_axis(axis).iter().map(|v| v / n).collect()
}

/// Mean index of the standardized profile samples exceeding `threshold`.
fn landmark(profile: &[f64], threshold: f64, axis: ProfileAxis) -> Result<f64> {
    let n = profile.len() as f64;
    let mean = profile.iter().sum::<f64>() / n;
    let variance = profile.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    let std = variance.sqrt();
    if std < EPSILON {
        // Flat profile: standardization is undefined, nothing can exceed the cutoff.
        return Err(GimbalError::LandmarkNotFound { axis, threshold });
    }

    let mut index_sum = 0.0;
    let mut count = 0usize;
    for (index, value) in profile.iter().enumerate() {
        if (value - mean) / std > threshold {
            index_sum += index as f64;
            count += 1;
        }
    }

    if count == 0 {
        return Err(GimbalError::LandmarkNotFound { axis, threshold });
    }
    Ok(index_sum / count as f64)
}
