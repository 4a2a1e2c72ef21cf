use ndarray::{Array2, Array3};
use num_traits::{AsPrimitive, PrimInt};

/// Estimated translation of a frame relative to the target, in pixels.
/// `tx` runs along the column axis, `ty` along the row axis.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Displacement {
    pub tx: f64,
    pub ty: f64,
}

/// Bounded integer pixel sample that widens losslessly to `f64`.
pub trait Pixel: PrimInt + AsPrimitive<f64> + Send + Sync + 'static {
    /// Quantize a real intensity back to this pixel type.
    /// Rounds to nearest and saturates at the representable range instead of wrapping.
    fn from_intensity(value: f64) -> Self;
}

impl Pixel for u8 {
    fn from_intensity(value: f64) -> Self {
        value.round().clamp(0.0, u8::MAX as f64) as u8
    }
}

impl Pixel for u16 {
    fn from_intensity(value: f64) -> Self {
        value.round().clamp(0.0, u16::MAX as f64) as u16
    }
}

/// Widen an integer stack to `f64` for filtering and interpolation.
pub fn to_f64<T: Pixel>(video: &Array3<T>) -> Array3<f64> {
    video.mapv(|v| v.as_())
}

/// Quantize a real-valued frame back to the caller's pixel representation.
pub fn quantize<T: Pixel>(frame: &Array2<f64>) -> Array2<T> {
    frame.mapv(T::from_intensity)
}
