pub mod align;
pub mod consts;
pub mod error;
pub mod filter;
pub mod pipeline;
pub mod translate;
pub mod video;
