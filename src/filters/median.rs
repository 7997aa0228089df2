//! 3×3 median filter.
//!
//! Border samples clamp to the image extents (replicate), so a constant
//! image is a fixed point of the filter, including at its edges and corners.
use crate::image::{ImageView, ImageViewMut, Plane};

/// Replace every cell with the median of its 3×3 neighbourhood.
pub fn median3x3<I>(src: &I) -> Plane<I::Pixel>
where
    I: ImageView,
    I::Pixel: Ord + Default,
{
    let (w, h) = (src.width(), src.height());
    let mut out = Plane::new(w, h);
    if w == 0 || h == 0 {
        return out;
    }

    for y in 0..h {
        let y_idx = [y.saturating_sub(1), y, (y + 1).min(h - 1)];
        let rows = [src.row(y_idx[0]), src.row(y_idx[1]), src.row(y_idx[2])];
        let dst = out.row_mut(y);
        for (x, dst_px) in dst.iter_mut().enumerate() {
            let x_idx = [x.saturating_sub(1), x, (x + 1).min(w - 1)];
            let mut window = [rows[1][x]; 9];
            for (ky, row) in rows.iter().enumerate() {
                for (kx, &xx) in x_idx.iter().enumerate() {
                    window[ky * 3 + kx] = row[xx];
                }
            }
            let (_, median, _) = window.select_nth_unstable(4);
            *dst_px = *median;
        }
    }
    out
}
