use super::timing::TimingBreakdown;
use crate::depth::DepthStructure;
use crate::image::{ImageView, StructureMask};
use serde::Serialize;

/// Dimensions and validity of the processed depth frame.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
    /// Non-zero depth samples.
    pub valid_samples: usize,
}

/// Summary statistics of a structure mask.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaskStats {
    pub min: i16,
    pub max: i16,
    pub mean: f64,
    pub nonzero_cells: usize,
}

impl MaskStats {
    pub fn from_mask(mask: &StructureMask) -> Self {
        let mut min = i16::MAX;
        let mut max = i16::MIN;
        let mut sum = 0i64;
        let mut nonzero_cells = 0usize;
        for row in mask.rows() {
            for &v in row {
                min = min.min(v);
                max = max.max(v);
                sum += v as i64;
                nonzero_cells += (v != 0) as usize;
            }
        }
        let cells = mask.cell_count();
        if cells == 0 {
            return Self {
                min: 0,
                max: 0,
                mean: 0.0,
                nonzero_cells: 0,
            };
        }
        Self {
            min,
            max,
            mean: sum as f64 / cells as f64,
            nonzero_cells,
        }
    }
}

/// Everything the pipeline recorded while processing one frame.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessTrace {
    pub input: InputDescriptor,
    pub mask: MaskStats,
    pub timing: TimingBreakdown,
}

/// Processing result plus its trace.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessReport {
    #[serde(skip)]
    pub structure: DepthStructure,
    pub range: crate::depth::DepthRange,
    pub trace: ProcessTrace,
}
