//! Neighbourhood filters used by the depth pipeline.
//!
//! - [`median`]: 3×3 median with replicated borders, generic over any
//!   totally ordered pixel type (raw `u16` depth and wide `i32` responses).
//! - [`kernel`]: 3×3 integer kernel correlation into a wide signed buffer,
//!   with a selectable border policy and a constant bias.
//!
//! Both filters walk the source row by row and never mutate their input,
//! so every call allocates exactly one output plane.

pub mod kernel;
pub mod median;

pub use kernel::{correlate3x3, BorderMode, Kernel3, HORIZONTAL_EDGE, VERTICAL_EDGE};
pub use median::median3x3;
