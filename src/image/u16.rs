/// Borrowed 16-bit single-channel view, typically a depth frame in millimetres
/// owned by the acquisition layer.
#[derive(Clone, Debug)]
pub struct ImageU16<'a> {
    pub w: usize,
    pub h: usize,
    pub stride: usize, // elements between rows
    pub data: &'a [u16],
}

impl<'a> ImageU16<'a> {
    /// Tightly packed view over `data` (`stride == w`).
    pub fn packed(w: usize, h: usize, data: &'a [u16]) -> Self {
        Self {
            w,
            h,
            stride: w,
            data,
        }
    }
}

impl<'a> crate::image::traits::ImageView for ImageU16<'a> {
    type Pixel = u16;

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
    fn row(&self, y: usize) -> &[u16] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
    #[inline]
    fn buffer_len(&self) -> usize {
        self.data.len()
    }
    #[inline]
    fn as_slice(&self) -> Option<&[u16]> {
        if self.stride == self.w {
            self.data.get(..self.w * self.h)
        } else {
            None
        }
    }
}
