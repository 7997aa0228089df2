//! Owned single-plane image in row-major layout (stride == width).
//!
//! Used for every grid the pipeline produces: decoded depth frames, color
//! frames, wide intermediate filter responses and the final structure mask.
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Plane<T> {
    /// Image width in pixels
    pub w: usize,
    /// Image height in pixels
    pub h: usize,
    /// Number of elements between consecutive rows (equals `w`)
    pub stride: usize,
    /// Backing storage in row-major order
    pub data: Vec<T>,
}

/// Decoded depth frame, millimetres, `0` marks an invalid sample.
pub type DepthImage = Plane<u16>;
/// Decoded color frame, one RGB triple per cell.
pub type ColorImage = Plane<[u8; 3]>;
/// Final per-pixel structure intensity.
pub type StructureMask = Plane<i16>;
/// Wide signed buffer holding intermediate filter responses.
pub type ResponseImage = Plane<i32>;

impl<T: Copy + Default> Plane<T> {
    /// Construct a default-initialized buffer of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self::filled(w, h, T::default())
    }

    /// Construct a buffer of size `w × h` with every cell set to `value`.
    pub fn filled(w: usize, h: usize, value: T) -> Self {
        Self {
            w,
            h,
            stride: w,
            data: vec![value; w * h],
        }
    }
}

impl<T> Plane<T> {
    /// Wrap an existing row-major buffer. Returns `None` when `data.len()`
    /// does not equal `w * h`.
    pub fn from_vec(w: usize, h: usize, data: Vec<T>) -> Option<Self> {
        (data.len() == w * h).then_some(Self {
            w,
            h,
            stride: w,
            data,
        })
    }

    #[inline]
    /// Convert (x, y) to a linear index into `data`.
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.stride + x
    }

    #[inline]
    pub fn dims(&self) -> (usize, usize) {
        (self.w, self.h)
    }
}

impl<T: Copy> Plane<T> {
    #[inline]
    /// Set the pixel value at (x, y).
    pub fn set(&mut self, x: usize, y: usize, v: T) {
        let i = self.idx(x, y);
        self.data[i] = v;
    }

    /// Apply `f` to every cell, producing a plane of the same size.
    pub fn map<U, F: FnMut(T) -> U>(&self, f: F) -> Plane<U> {
        Plane {
            w: self.w,
            h: self.h,
            stride: self.w,
            data: self.data.iter().copied().map(f).collect(),
        }
    }

    /// Combine two planes of identical size cell by cell.
    pub fn zip_map<U: Copy, V, F: FnMut(T, U) -> V>(&self, other: &Plane<U>, mut f: F) -> Plane<V> {
        assert_eq!(self.dims(), other.dims(), "plane dimensions must match");
        Plane {
            w: self.w,
            h: self.h,
            stride: self.w,
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(&a, &b)| f(a, b))
                .collect(),
        }
    }
}

impl<T: Copy> crate::image::traits::ImageView for Plane<T> {
    type Pixel = T;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn stride(&self) -> usize {
        self.stride
    }
    #[inline]
    fn row(&self, y: usize) -> &[T] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
    #[inline]
    fn buffer_len(&self) -> usize {
        self.data.len()
    }
    #[inline]
    fn as_slice(&self) -> Option<&[T]> {
        if self.stride == self.w {
            self.data.get(..self.w * self.h)
        } else {
            None
        }
    }
}

impl<T: Copy> crate::image::traits::ImageViewMut for Plane<T> {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [T] {
        let start = y * self.stride;
        let end = start + self.w;
        &mut self.data[start..end]
    }
}
