//! JSON configuration of the command-line tools.

pub mod depth_mask;
