use ndarray::{Array2, ArrayView2};

/// Shift a frame's content by `(tx, ty)` using bilinear interpolation.
///
/// Positive `tx` moves content toward higher column indices, positive `ty`
/// toward higher row indices. Samples pulled from outside the frame are zero.
/// A zero shift reproduces the input exactly.
pub fn translate(frame: &ArrayView2<'_, f64>, tx: f64, ty: f64) -> Array2<f64> {
    let (height, width) = frame.dim();
    let mut result = Array2::<f64>::zeros((height, width));

    for row in 0..height {
        for col in 0..width {
            let src_y = row as f64 - ty;
            let src_x = col as f64 - tx;
            result[[row, col]] = bilinear_sample(frame, src_y, src_x);
        }
    }

    result
}

/// Sample `data` at fractional coordinates with bilinear weighting.
pub fn bilinear_sample(data: &ArrayView2<'_, f64>, y: f64, x: f64) -> f64 {
    let (height, width) = data.dim();

    let x0 = x.floor() as i64;
    let y0 = y.floor() as i64;
    let x1 = x0 + 1;
    let y1 = y0 + 1;

    let fx = x - x0 as f64;
    let fy = y - y0 as f64;

    let sample = |r: i64, c: i64| -> f64 {
        if r >= 0 && r < height as i64 && c >= 0 && c < width as i64 {
            data[[r as usize, c as usize]]
        } else {
            0.0
        }
    };

    let v00 = sample(y0, x0);
    let v10 = sample(y0, x1);
    let v01 = sample(y1, x0);
    let v11 = sample(y1, x1);

    v00 * (1.0 - fx) * (1.0 - fy)
        + v10 * fx * (1.0 - fy)
        + v01 * (1.0 - fx) * fy
        + v11 * fx * fy
}
