//! Parameters of the depth pipeline.
//!
//! Defaults mirror the reference filter call: the directional kernels read
//! mirrored samples past the border (reflect-101) and add no constant to the
//! response, so a flat depth field yields an all-zero mask. Zero padding and a
//! non-zero bias remain available for experiments.
use crate::filters::BorderMode;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProcessorParams {
    /// Border policy of the two directional kernels.
    pub gradient_border: BorderMode,
    /// Constant added to each directional response after correlation.
    pub gradient_bias: i32,
}

impl Default for ProcessorParams {
    fn default() -> Self {
        Self {
            gradient_border: BorderMode::Reflect101,
            gradient_bias: 0,
        }
    }
}

impl ProcessorParams {
    pub fn with_gradient_border(mut self, border: BorderMode) -> Self {
        self.gradient_border = border;
        self
    }

    pub fn with_gradient_bias(mut self, bias: i32) -> Self {
        self.gradient_bias = bias;
        self
    }
}
