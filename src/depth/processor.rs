//! Depth pipeline driving one frame end-to-end.
//!
//! Typical usage:
//! ```no_run
//! use depth_structure::image::ImageU16;
//! use depth_structure::{DepthProcessor, ProcessorParams};
//!
//! # fn example(depth: ImageU16) {
//! let processor = DepthProcessor::new(ProcessorParams::default());
//! match processor.process(&depth) {
//!     Ok(out) if out.range.is_valid() => {
//!         println!("depth {}..{} mm", out.range.min_depth, out.range.max_depth)
//!     }
//!     Ok(_) => println!("no valid depth samples"),
//!     Err(err) => eprintln!("{err}"),
//! }
//! # }
//! ```
use super::params::ProcessorParams;
use super::range::{scan_depth, DepthRange};
use crate::diagnostics::timing::elapsed_ms;
use crate::diagnostics::{InputDescriptor, MaskStats, ProcessReport, ProcessTrace, TimingBreakdown};
use crate::error::{DecodeError, FrameError};
use crate::filters::{correlate3x3, median3x3, HORIZONTAL_EDGE, VERTICAL_EDGE};
use crate::image::{ImageView, ResponseImage, StructureMask};
use log::{debug, trace};
use serde::Serialize;
use std::time::Instant;

/// Output handed to the publishing side for one depth frame.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepthStructure {
    pub mask: StructureMask,
    pub range: DepthRange,
}

/// Stateless depth-frame processor.
#[derive(Clone, Debug, Default)]
pub struct DepthProcessor {
    params: ProcessorParams,
}

impl DepthProcessor {
    pub fn new(params: ProcessorParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &ProcessorParams {
        &self.params
    }

    /// Compute the structure mask and valid-depth range of one frame.
    pub fn process<I>(&self, depth: &I) -> Result<DepthStructure, FrameError>
    where
        I: ImageView<Pixel = u16>,
    {
        self.process_with_diagnostics(depth)
            .map(|report| report.structure)
    }

    /// Same as [`process`](Self::process), with per-stage timings and
    /// summary statistics.
    pub fn process_with_diagnostics<I>(&self, depth: &I) -> Result<ProcessReport, FrameError>
    where
        I: ImageView<Pixel = u16>,
    {
        let (width, height) = (depth.width(), depth.height());
        if depth.is_empty() {
            return Err(FrameError::EmptyFrame { width, height });
        }
        check_layout(depth)?;
        debug!(
            "DepthProcessor::process start w={} h={} border={:?} bias={}",
            width, height, self.params.gradient_border, self.params.gradient_bias
        );
        let total_start = Instant::now();
        let mut timing = TimingBreakdown::default();

        let denoised = timing.measure("denoise", || median3x3(depth));

        let border = self.params.gradient_border;
        let bias = self.params.gradient_bias;
        let (horizontal, vertical) = timing.measure("gradients", || {
            (
                correlate3x3(&denoised, &HORIZONTAL_EDGE, border, bias),
                correlate3x3(&denoised, &VERTICAL_EDGE, border, bias),
            )
        });
        drop(denoised);

        let fused = timing.measure("fuse", || fuse(&horizontal, &vertical));
        let mask = timing.measure("smooth", || median3x3(&fused).map(saturate_i16));
        let scan = timing.measure("range", || scan_depth(depth));
        timing.total_ms = elapsed_ms(total_start);

        let stats = MaskStats::from_mask(&mask);
        trace!(
            "DepthProcessor::process mask min={} max={} nonzero={}",
            stats.min,
            stats.max,
            stats.nonzero_cells
        );
        debug!(
            "DepthProcessor::process done range=({}, {}) valid={} total_ms={:.3}",
            scan.range.min_depth, scan.range.max_depth, scan.valid_samples, timing.total_ms
        );

        Ok(ProcessReport {
            structure: DepthStructure {
                mask,
                range: scan.range,
            },
            range: scan.range,
            trace: ProcessTrace {
                input: InputDescriptor {
                    width,
                    height,
                    valid_samples: scan.valid_samples,
                },
                mask: stats,
                timing,
            },
        })
    }
}

/// Reject views whose buffer cannot hold `height` rows of `width` samples.
fn check_layout<I: ImageView>(depth: &I) -> Result<(), FrameError> {
    let (width, height, stride) = (depth.width(), depth.height(), depth.stride());
    if stride < width {
        return Err(DecodeError::RowStepTooSmall {
            step: stride,
            min_step: width,
        }
        .into());
    }
    let len = depth.buffer_len();
    let required = stride
        .checked_mul(height - 1)
        .and_then(|n| n.checked_add(width))
        .unwrap_or(usize::MAX);
    if len < required {
        return Err(DecodeError::BufferTooShort { len, required }.into());
    }
    Ok(())
}

/// Element-wise sum of two equally sized responses.
fn fuse(a: &ResponseImage, b: &ResponseImage) -> ResponseImage {
    debug_assert_eq!(a.dims(), b.dims());
    a.zip_map(b, |x, y| x.saturating_add(y))
}

#[inline]
fn saturate_i16(v: i32) -> i16 {
    v.clamp(i16::MIN as i32, i16::MAX as i32) as i16
}
