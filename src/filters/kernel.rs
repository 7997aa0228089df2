//! 3×3 integer kernel correlation with a selectable border policy.
//!
//! - The kernel is anchored at its centre and applied without flipping
//!   (correlation), so row 0 of the kernel weighs the row above the anchor.
//! - Sums are accumulated in `i32`: a 16-bit input times the largest kernel
//!   footprint used here stays far below `i32::MAX`, and negative responses
//!   are represented exactly.
//! - A constant `bias` is added to every output cell after the weighted sum.
//!
//! Integer kernels keep the output bit-identical across platforms.
use crate::image::{ImageView, ImageViewMut, ResponseImage};
use serde::{Deserialize, Serialize};

pub type Kernel3 = [[i32; 3]; 3];

/// Responds to depth changes along the vertical axis (horizontal edges).
pub const HORIZONTAL_EDGE: Kernel3 = [[2, 2, 2], [0, 0, 0], [-2, -2, -2]];
/// Responds to depth changes along the horizontal axis (vertical edges).
pub const VERTICAL_EDGE: Kernel3 = [[2, 0, -2], [2, 0, -2], [2, 0, -2]];

/// How samples outside the image are synthesised.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderMode {
    /// Outside samples are zero.
    Zero,
    /// Outside samples repeat the nearest edge sample (`aaa|abcd|ddd`).
    Replicate,
    /// Mirror without repeating the edge sample (`cb|abcd|cb`).
    #[default]
    Reflect101,
}

impl BorderMode {
    /// Map a possibly out-of-range coordinate into `[0, len)`; `None` means
    /// the sample reads as zero. `len` must be non-zero.
    #[inline]
    pub fn resolve(self, i: isize, len: usize) -> Option<usize> {
        let n = len as isize;
        if (0..n).contains(&i) {
            return Some(i as usize);
        }
        match self {
            BorderMode::Zero => None,
            BorderMode::Replicate => Some(i.clamp(0, n - 1) as usize),
            BorderMode::Reflect101 => {
                if n == 1 {
                    return Some(0);
                }
                let mirrored = if i < 0 { -i } else { 2 * (n - 1) - i };
                Some(mirrored.clamp(0, n - 1) as usize)
            }
        }
    }
}

/// Correlate `src` with `kernel` and add `bias` to every output cell.
pub fn correlate3x3<I>(src: &I, kernel: &Kernel3, border: BorderMode, bias: i32) -> ResponseImage
where
    I: ImageView,
    I::Pixel: Into<i32>,
{
    let (w, h) = (src.width(), src.height());
    let mut out = ResponseImage::new(w, h);
    if w == 0 || h == 0 {
        return out;
    }

    const OFFSETS: [isize; 3] = [-1, 0, 1];
    for y in 0..h {
        let rows = OFFSETS.map(|dy| border.resolve(y as isize + dy, h).map(|yy| src.row(yy)));
        let dst = out.row_mut(y);
        for (x, dst_px) in dst.iter_mut().enumerate() {
            let cols = OFFSETS.map(|dx| border.resolve(x as isize + dx, w));
            let mut acc = 0i32;
            for (kernel_row, row) in kernel.iter().zip(rows.iter()) {
                let Some(row) = row else { continue };
                for (&weight, col) in kernel_row.iter().zip(cols.iter()) {
                    if weight == 0 {
                        continue;
                    }
                    if let Some(xx) = *col {
                        let sample: i32 = row[xx].into();
                        acc += weight * sample;
                    }
                }
            }
            *dst_px = acc.saturating_add(bias);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::Plane;

    #[test]
    fn resolve_handles_each_border_policy() {
        assert_eq!(BorderMode::Zero.resolve(-1, 4), None);
        assert_eq!(BorderMode::Zero.resolve(4, 4), None);
        assert_eq!(BorderMode::Replicate.resolve(-1, 4), Some(0));
        assert_eq!(BorderMode::Replicate.resolve(4, 4), Some(3));
        assert_eq!(BorderMode::Reflect101.resolve(-1, 4), Some(1));
        assert_eq!(BorderMode::Reflect101.resolve(4, 4), Some(2));
        assert_eq!(BorderMode::Reflect101.resolve(-1, 1), Some(0));
        assert_eq!(BorderMode::Zero.resolve(2, 4), Some(2));
    }

    #[test]
    fn horizontal_kernel_sees_vertical_depth_change() {
        // Rows 0..2 at 100 mm, rows 2..4 at 300 mm.
        let mut img = Plane::filled(4, 4, 100u16);
        for y in 2..4 {
            for x in 0..4 {
                img.set(x, y, 300);
            }
        }
        let out = correlate3x3(&img, &HORIZONTAL_EDGE, BorderMode::Replicate, 0);
        // At (1, 1): 2 * (3 * 100) - 2 * (3 * 300) = -1200
        assert_eq!(out.get(1, 1), -1200);
        assert_eq!(out.get(1, 2), -1200);
        assert_eq!(out.get(1, 0), 0);
        let vertical = correlate3x3(&img, &VERTICAL_EDGE, BorderMode::Replicate, 0);
        assert!(vertical.data.iter().all(|&v| v == 0));
    }

    #[test]
    fn zero_border_produces_edge_response_on_flat_field() {
        let img = Plane::filled(3, 3, 10u16);
        let out = correlate3x3(&img, &HORIZONTAL_EDGE, BorderMode::Zero, 4);
        // Centre: rows cancel, only the bias remains.
        assert_eq!(out.get(1, 1), 4);
        // Top row misses the row above: -2 * 30 + 4.
        assert_eq!(out.get(1, 0), -56);
        // Top-left corner misses one column as well: -2 * 20 + 4.
        assert_eq!(out.get(0, 0), -36);
        // Bottom row misses the row below: 2 * 30 + 4.
        assert_eq!(out.get(1, 2), 64);
    }

    #[test]
    fn bias_is_added_after_the_sum() {
        let img = Plane::filled(5, 5, 1000u16);
        let out = correlate3x3(&img, &VERTICAL_EDGE, BorderMode::Reflect101, 4);
        assert!(out.data.iter().all(|&v| v == 4));
    }
}
