//! Diagnostics data model returned alongside processing results.
//!
//! `ProcessReport` is the main entry point returned by
//! [`DepthProcessor::process_with_diagnostics`](crate::DepthProcessor::process_with_diagnostics),
//! bundling the published `DepthStructure` with a `ProcessTrace` that
//! describes the input, the resulting mask and the time spent per stage.

pub mod report;
pub mod timing;

pub use report::{InputDescriptor, MaskStats, ProcessReport, ProcessTrace};
pub use timing::{StageTiming, TimingBreakdown};
