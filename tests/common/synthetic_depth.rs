use depth_structure::image::{DepthImage, Plane};

/// Every cell at `depth_mm`.
pub fn flat_field(width: usize, height: usize, depth_mm: u16) -> DepthImage {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    Plane::filled(width, height, depth_mm)
}

/// Background at `background_mm` with an axis-aligned box at `box_mm`
/// covering `[x0, x1) × [y0, y1)`.
pub fn raised_box(
    width: usize,
    height: usize,
    background_mm: u16,
    box_mm: u16,
    (x0, y0, x1, y1): (usize, usize, usize, usize),
) -> DepthImage {
    let mut img = flat_field(width, height, background_mm);
    for y in y0..y1.min(height) {
        for x in x0..x1.min(width) {
            img.set(x, y, box_mm);
        }
    }
    img
}

/// Deterministic pseudo-random depth in `[lo, hi]` with roughly one dropout
/// (zero) every `dropout_every` cells.
pub fn noisy_scene(width: usize, height: usize, lo: u16, hi: u16, dropout_every: usize) -> DepthImage {
    let mut state = 0x2545_f491_u32;
    let span = (hi - lo) as u32 + 1;
    let mut img = Plane::new(width, height);
    for (i, px) in img.data.iter_mut().enumerate() {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        *px = if dropout_every > 0 && i % dropout_every == 0 {
            0
        } else {
            lo + (state % span) as u16
        };
    }
    img
}
