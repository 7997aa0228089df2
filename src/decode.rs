//! Conversion of raw camera messages into typed grids.
//!
//! A [`RawImage`] mirrors the layout of a ROS `sensor_msgs/Image`: packed
//! rows of `step` bytes, an encoding string and an endianness flag. Depth
//! messages decode to `u16` millimetres, color messages always decode to RGB
//! order regardless of the channel order on the wire.
use crate::error::DecodeError;
use crate::image::{ColorImage, DepthImage, ImageView, Plane};
use serde::{Deserialize, Serialize};

pub mod encodings {
    pub const RGB8: &str = "rgb8";
    pub const BGR8: &str = "bgr8";
    pub const RGBA8: &str = "rgba8";
    pub const BGRA8: &str = "bgra8";
    pub const MONO8: &str = "mono8";
    pub const MONO16: &str = "mono16";
    pub const TYPE_16UC1: &str = "16UC1";
}

const DEPTH_ENCODINGS: &str = "16UC1 or mono16";
const COLOR_ENCODINGS: &str = "rgb8, bgr8, rgba8, bgra8 or mono8";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawImage {
    pub width: u32,
    pub height: u32,
    /// Bytes between the starts of consecutive rows.
    pub step: u32,
    pub encoding: String,
    pub is_bigendian: bool,
    pub data: Vec<u8>,
}

impl RawImage {
    /// Pack a depth plane as a little-endian `16UC1` message.
    pub fn from_depth(depth: &DepthImage) -> Self {
        let mut data = Vec::with_capacity(depth.cell_count() * 2);
        for row in depth.rows() {
            for &v in row {
                data.extend_from_slice(&v.to_le_bytes());
            }
        }
        Self {
            width: depth.w as u32,
            height: depth.h as u32,
            step: (depth.w * 2) as u32,
            encoding: encodings::TYPE_16UC1.to_string(),
            is_bigendian: false,
            data,
        }
    }

    /// Pack a color plane as an `rgb8` message.
    pub fn from_color(color: &ColorImage) -> Self {
        let mut data = Vec::with_capacity(color.cell_count() * 3);
        for row in color.rows() {
            for px in row {
                data.extend_from_slice(px);
            }
        }
        Self {
            width: color.w as u32,
            height: color.h as u32,
            step: (color.w * 3) as u32,
            encoding: encodings::RGB8.to_string(),
            is_bigendian: false,
            data,
        }
    }
}

/// Decode a `16UC1` / `mono16` message into a depth plane.
pub fn decode_depth(msg: &RawImage) -> Result<DepthImage, DecodeError> {
    match msg.encoding.as_str() {
        encodings::TYPE_16UC1 | encodings::MONO16 => {}
        other => {
            return Err(DecodeError::UnsupportedEncoding {
                encoding: other.to_string(),
                expected: DEPTH_ENCODINGS,
            })
        }
    }

    let layout = RowLayout::validate(msg, 2)?;
    let mut data = Vec::with_capacity(layout.width * layout.height);
    for row in layout.rows(&msg.data) {
        data.extend(row.chunks_exact(2).map(|px| {
            let bytes = [px[0], px[1]];
            if msg.is_bigendian {
                u16::from_be_bytes(bytes)
            } else {
                u16::from_le_bytes(bytes)
            }
        }));
    }
    Ok(layout.into_plane(data))
}

/// Decode an 8-bit color message into RGB order.
pub fn decode_color(msg: &RawImage) -> Result<ColorImage, DecodeError> {
    let (bytes_per_pixel, to_rgb): (usize, fn(&[u8]) -> [u8; 3]) = match msg.encoding.as_str() {
        encodings::RGB8 => (3, rgb_order),
        encodings::RGBA8 => (4, rgb_order),
        encodings::BGR8 => (3, bgr_order),
        encodings::BGRA8 => (4, bgr_order),
        encodings::MONO8 => (1, gray_to_rgb),
        other => {
            return Err(DecodeError::UnsupportedEncoding {
                encoding: other.to_string(),
                expected: COLOR_ENCODINGS,
            })
        }
    };

    let layout = RowLayout::validate(msg, bytes_per_pixel)?;
    let mut data = Vec::with_capacity(layout.width * layout.height);
    for row in layout.rows(&msg.data) {
        data.extend(row.chunks_exact(bytes_per_pixel).map(to_rgb));
    }
    Ok(layout.into_plane(data))
}

fn rgb_order(px: &[u8]) -> [u8; 3] {
    [px[0], px[1], px[2]]
}

fn bgr_order(px: &[u8]) -> [u8; 3] {
    [px[2], px[1], px[0]]
}

fn gray_to_rgb(px: &[u8]) -> [u8; 3] {
    [px[0], px[0], px[0]]
}

struct RowLayout {
    width: usize,
    height: usize,
    step: usize,
    row_bytes: usize,
}

impl RowLayout {
    fn validate(msg: &RawImage, bytes_per_pixel: usize) -> Result<Self, DecodeError> {
        let width = msg.width as usize;
        let height = msg.height as usize;
        let step = msg.step as usize;
        let too_short = DecodeError::BufferTooShort {
            len: msg.data.len(),
            required: usize::MAX,
        };

        let row_bytes = width.checked_mul(bytes_per_pixel).ok_or(too_short.clone())?;
        if step < row_bytes {
            return Err(DecodeError::RowStepTooSmall {
                step,
                min_step: row_bytes,
            });
        }
        let required = step.checked_mul(height).ok_or(too_short)?;
        if msg.data.len() < required {
            return Err(DecodeError::BufferTooShort {
                len: msg.data.len(),
                required,
            });
        }
        Ok(Self {
            width,
            height,
            step,
            row_bytes,
        })
    }

    fn rows<'a>(&'a self, data: &'a [u8]) -> impl Iterator<Item = &'a [u8]> + 'a {
        (0..self.height).map(move |y| {
            let start = y * self.step;
            &data[start..start + self.row_bytes]
        })
    }

    fn into_plane<T>(self, data: Vec<T>) -> Plane<T> {
        Plane {
            w: self.width,
            h: self.height,
            stride: self.width,
            data,
        }
    }
}
