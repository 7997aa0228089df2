//! Depth-frame processing: structure mask extraction and depth range.
//!
//! Overview
//! - Denoise the raw depth grid with a 3×3 median (speckle and shot noise).
//! - Correlate the denoised grid with a horizontal-edge and a vertical-edge
//!   3×3 kernel; borders are mirrored (reflect-101) and no bias is added unless
//!   configured.
//! - Sum both responses into a cheap edge-strength proxy (no square root).
//! - Remove isolated spikes introduced by the kernels with a second median
//!   pass and saturate into `i16`.
//! - Independently scan the raw grid for the smallest and largest non-zero
//!   sample.
//!
//! Frames are independent: the processor keeps no state between calls.
//!
//! Modules
//! - [`params`] – processor configuration.
//! - `processor` – the [`DepthProcessor`] pipeline.
//! - [`range`] – valid-depth range reduction.

pub mod params;
mod processor;
pub mod range;

pub use params::ProcessorParams;
pub use processor::{DepthProcessor, DepthStructure};
pub use range::{depth_range, scan_depth, DepthRange, DepthScan};
