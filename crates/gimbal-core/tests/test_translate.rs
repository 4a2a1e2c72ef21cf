use ndarray::Array2;

use gimbal_core::translate::{bilinear_sample, translate};

#[test]
fn test_zero_shift_is_identity() {
    let data = Array2::from_shape_fn((16, 16), |(r, c)| (r * 16 + c) as f64);
    let shifted = translate(&data.view(), 0.0, 0.0);
    assert_eq!(shifted, data);
}

#[test]
fn test_integer_shift_moves_content() {
    let mut data = Array2::<f64>::zeros((8, 8));
    data[[3, 4]] = 1.0;

    let shifted = translate(&data.view(), 2.0, -1.0);
    assert_eq!(shifted[[2, 6]], 1.0);
    assert_eq!(shifted[[3, 4]], 0.0);
}

#[test]
fn test_out_of_bounds_samples_fill_zero() {
    let data = Array2::<f64>::ones((4, 4));
    let shifted = translate(&data.view(), 1.0, 0.0);
    for row in 0..4 {
        assert_eq!(shifted[[row, 0]], 0.0);
    }
}

#[test]
fn test_half_pixel_shift_averages_neighbors() {
    let mut data = Array2::<f64>::zeros((5, 5));
    data[[2, 2]] = 1.0;

    let shifted = translate(&data.view(), 0.5, 0.0);
    assert!((shifted[[2, 2]] - 0.5).abs() < 1e-12);
    assert!((shifted[[2, 3]] - 0.5).abs() < 1e-12);
}

#[test]
fn test_bilinear_interpolation() {
    let mut data = Array2::<f64>::zeros((4, 4));
    data[[1, 1]] = 1.0;

    // Exact grid point
    assert!((bilinear_sample(&data.view(), 1.0, 1.0) - 1.0).abs() < 1e-12);
    // Halfway between two samples
    assert!((bilinear_sample(&data.view(), 1.0, 1.5) - 0.5).abs() < 1e-12);
}

#[test]
fn test_shift_and_inverse_shift_restore_interior() {
    let data = Array2::from_shape_fn((16, 16), |(r, c)| {
        let dy = r as f64 - 8.0;
        let dx = c as f64 - 8.0;
        (-(dy * dy + dx * dx) / 18.0).exp()
    });

    let there = translate(&data.view(), 3.0, -2.0);
    let back = translate(&there.view(), -3.0, 2.0);

    // Interior pixels survive the round trip; only border pixels lose
    // content to the zero fill.
    for row in 4..12 {
        for col in 4..12 {
            assert!(
                (back[[row, col]] - data[[row, col]]).abs() < 1e-12,
                "pixel ({row}, {col}) not restored"
            );
        }
    }
}
