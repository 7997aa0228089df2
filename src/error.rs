//! Per-frame failures.
//!
//! Neither error is fatal: the session logs it, notifies observers and waits
//! for the next frame.

/// A raw camera message could not be interpreted in the expected pixel format.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DecodeError {
    UnsupportedEncoding {
        encoding: String,
        expected: &'static str,
    },
    RowStepTooSmall {
        step: usize,
        min_step: usize,
    },
    BufferTooShort {
        len: usize,
        required: usize,
    },
}

impl std::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DecodeError::UnsupportedEncoding { encoding, expected } => {
                write!(f, "unsupported encoding '{encoding}' (expected {expected})")
            }
            DecodeError::RowStepTooSmall { step, min_step } => {
                write!(f, "row step {step} is shorter than one row ({min_step})")
            }
            DecodeError::BufferTooShort { len, required } => {
                write!(f, "buffer length {len} is below the required {required}")
            }
        }
    }
}

impl std::error::Error for DecodeError {}

/// Reasons a frame produced no output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FrameError {
    Decode(DecodeError),
    EmptyFrame { width: usize, height: usize },
}

impl std::fmt::Display for FrameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FrameError::Decode(err) => write!(f, "failed to convert image: {err}"),
            FrameError::EmptyFrame { width, height } => {
                write!(f, "could not read image: empty frame ({width}x{height})")
            }
        }
    }
}

impl std::error::Error for FrameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FrameError::Decode(err) => Some(err),
            FrameError::EmptyFrame { .. } => None,
        }
    }
}

impl From<DecodeError> for FrameError {
    fn from(err: DecodeError) -> Self {
        FrameError::Decode(err)
    }
}
