//! Valid-depth range reduction over a raw depth grid.
//!
//! Zero samples are sensor dropouts and never influence either bound. When a
//! frame has no valid sample at all the bounds keep their seeds
//! (`min = i16::MAX`, `max = i16::MIN`), which [`DepthRange::is_valid`]
//! reports as "no valid depth data".
use crate::image::ImageView;
use serde::Serialize;

/// Smallest and largest valid depth in millimetres. Samples beyond
/// `i16::MAX` (about 32.7 m) saturate to `i16::MAX` rather than wrapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepthRange {
    pub min_depth: i16,
    pub max_depth: i16,
}

impl DepthRange {
    /// Seed values, also the result for a frame without valid samples.
    pub const NO_DATA: DepthRange = DepthRange {
        min_depth: i16::MAX,
        max_depth: i16::MIN,
    };

    pub fn is_valid(&self) -> bool {
        self.min_depth <= self.max_depth
    }

    /// `max - min` in millimetres, `None` without valid data.
    pub fn span(&self) -> Option<i32> {
        self.is_valid()
            .then(|| self.max_depth as i32 - self.min_depth as i32)
    }
}

impl Default for DepthRange {
    fn default() -> Self {
        Self::NO_DATA
    }
}

/// Range together with the number of samples that contributed to it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DepthScan {
    pub range: DepthRange,
    pub valid_samples: usize,
}

/// Scan every cell of `depth`, skipping zeros.
///
/// Samples above `i16::MAX` (beyond ~32.7 m) saturate to `i16::MAX`.
pub fn scan_depth<I>(depth: &I) -> DepthScan
where
    I: ImageView<Pixel = u16>,
{
    let mut min_raw = u16::MAX;
    let mut max_raw = 0u16;
    let mut valid_samples = 0usize;
    let mut visit = |samples: &[u16]| {
        for &v in samples {
            if v == 0 {
                continue;
            }
            valid_samples += 1;
            min_raw = min_raw.min(v);
            max_raw = max_raw.max(v);
        }
    };
    if let Some(slice) = depth.as_slice() {
        visit(slice);
    } else {
        depth.rows().for_each(&mut visit);
    }

    if valid_samples == 0 {
        return DepthScan {
            range: DepthRange::NO_DATA,
            valid_samples,
        };
    }
    DepthScan {
        range: DepthRange {
            min_depth: saturate(min_raw),
            max_depth: saturate(max_raw),
        },
        valid_samples,
    }
}

pub fn depth_range<I>(depth: &I) -> DepthRange
where
    I: ImageView<Pixel = u16>,
{
    scan_depth(depth).range
}

#[inline]
fn saturate(v: u16) -> i16 {
    i16::try_from(v).unwrap_or(i16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::{ImageU16, Plane};

    #[test]
    fn zeros_are_ignored() {
        let data = [0u16, 850, 0, 1200, 430, 0];
        let scan = scan_depth(&ImageU16::packed(3, 2, &data));
        assert_eq!(scan.valid_samples, 3);
        assert_eq!(
            scan.range,
            DepthRange {
                min_depth: 430,
                max_depth: 1200
            }
        );
        assert_eq!(scan.range.span(), Some(770));
    }

    #[test]
    fn all_zero_frame_keeps_sentinels() {
        let range = depth_range(&Plane::<u16>::new(4, 3));
        assert_eq!(range, DepthRange::NO_DATA);
        assert!(!range.is_valid());
        assert_eq!(range.span(), None);
    }

    #[test]
    fn far_samples_saturate() {
        let data = [40_000u16, 1000];
        let range = depth_range(&ImageU16::packed(2, 1, &data));
        assert_eq!(range.min_depth, 1000);
        assert_eq!(range.max_depth, i16::MAX);
    }

    #[test]
    fn packed_and_padded_layouts_agree() {
        let packed = [0u16, 900, 300, 0, 1200, 650];
        let padded = [0u16, 900, 300, 7, 0, 1200, 650, 9];
        let view = ImageU16 {
            w: 3,
            h: 2,
            stride: 4,
            data: &padded,
        };
        let contiguous = ImageU16::packed(3, 2, &packed);
        assert!(contiguous.as_slice().is_some());
        assert!(view.as_slice().is_none());
        assert_eq!(scan_depth(&contiguous), scan_depth(&view));
        assert_eq!(scan_depth(&view).valid_samples, 4);
    }

    #[test]
    fn padded_rows_are_not_scanned() {
        // stride 3, width 2: the third element of each row is padding.
        let data = [500u16, 600, 1, 700, 800, 1];
        let view = ImageU16 {
            w: 2,
            h: 2,
            stride: 3,
            data: &data,
        };
        assert_eq!(
            depth_range(&view),
            DepthRange {
                min_depth: 500,
                max_depth: 800
            }
        );
    }
}
