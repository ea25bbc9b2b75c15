use crate::diagnostics::TimingBreakdown;
use crate::image::RgbImageU8;
use crate::types::StripLayout;
use serde::Serialize;

/// Result produced by [`Unshredder::process_with_diagnostics`](crate::Unshredder).
#[derive(Clone, Debug)]
pub struct UnshredOutcome {
    pub image: RgbImageU8,
    pub report: UnshredReport,
}

/// Everything the pipeline decided on the way to the output image.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnshredReport {
    pub input: InputDescriptor,
    pub start_strip: usize,
    /// Source strip placed at each output slot.
    pub order: Vec<usize>,
    pub best_left: Vec<Option<usize>>,
    pub best_right: Vec<Option<usize>>,
    pub total_affinity: Vec<i64>,
    /// Affinity across each seam of the output, left to right.
    pub seam_scores: Vec<i64>,
    pub fallback_steps: usize,
    pub timings: TimingBreakdown,
}

impl UnshredReport {
    /// Mean seam affinity as a fraction of the image height, in `[0, 1]`.
    pub fn mean_seam_fraction(&self) -> f64 {
        if self.seam_scores.is_empty() || self.input.height == 0 {
            return 1.0;
        }
        let sum: i64 = self.seam_scores.iter().sum();
        sum as f64 / (self.seam_scores.len() * self.input.height) as f64
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
    pub chunk_size: usize,
    pub strips: usize,
}

impl From<&StripLayout> for InputDescriptor {
    fn from(layout: &StripLayout) -> Self {
        Self {
            width: layout.width,
            height: layout.height,
            chunk_size: layout.chunk_size,
            strips: layout.strips,
        }
    }
}
