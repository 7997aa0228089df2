#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod decode;
pub mod depth;
pub mod diagnostics;
pub mod error;
pub mod image;
pub mod latch;
pub mod observer;
pub mod session;

// Building blocks, public for tooling and tests.
pub mod config;
pub mod filters;

// --- High-level re-exports -------------------------------------------------

pub use crate::decode::{decode_color, decode_depth, RawImage};
pub use crate::depth::{DepthProcessor, DepthRange, DepthStructure, ProcessorParams};
pub use crate::diagnostics::{ProcessReport, ProcessTrace};
pub use crate::error::{DecodeError, FrameError};
pub use crate::latch::FrameLatch;
pub use crate::observer::{FrameEvent, FrameObserver};
pub use crate::session::VisionSession;

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use depth_structure::prelude::*;
///
/// # fn main() {
/// let (w, h) = (640usize, 480usize);
/// let depth = vec![1200u16; w * h];
/// let view = ImageU16::packed(w, h, &depth);
///
/// let processor = DepthProcessor::new(ProcessorParams::default());
/// let out = processor.process(&view).expect("non-empty frame");
/// println!("range=({}, {})", out.range.min_depth, out.range.max_depth);
/// # }
/// ```
pub mod prelude {
    pub use crate::image::{DepthImage, ImageU16, ImageView, StructureMask};
    pub use crate::{DepthProcessor, DepthRange, DepthStructure, ProcessorParams, VisionSession};
}
