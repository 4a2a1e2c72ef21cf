/// Minimum frame count to use frame-level Rayon parallelism.
pub const PARALLEL_FRAME_THRESHOLD: usize = 4;

/// Small epsilon guarding divisions in normalization and standardization.
pub const EPSILON: f64 = 1e-12;

/// Default z-score cutoff for landmark selection on standardized profiles.
pub const DEFAULT_THRESHOLD: f64 = 1.8;

/// Default normalized spatial cutoff frequency of the background filter.
pub const DEFAULT_CUTOFF: f64 = 0.05;

/// Default Butterworth order for the spatial low-pass filter.
pub const DEFAULT_FILTER_ORDER: usize = 3;
