use crate::error::UnshredError;
use std::ops::Range;

/// Strip width used when none is configured.
pub const DEFAULT_CHUNK_SIZE: usize = 32;

/// Partition of an image into equal-width, full-height vertical strips.
///
/// Strips are column ranges of the caller's image, never separate buffers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StripLayout {
    pub width: usize,
    pub height: usize,
    pub chunk_size: usize,
    pub strips: usize,
}

impl StripLayout {
    /// Validate the image dimensions against the strip width.
    pub fn new(width: usize, height: usize, chunk_size: usize) -> Result<Self, UnshredError> {
        if width == 0 || height == 0 || chunk_size == 0 || width % chunk_size != 0 {
            return Err(UnshredError::InvalidDimensions {
                width,
                height,
                chunk_size,
            });
        }
        Ok(Self {
            width,
            height,
            chunk_size,
            strips: width / chunk_size,
        })
    }

    /// Columns covered by `strip`.
    #[inline]
    pub fn columns(&self, strip: usize) -> Range<usize> {
        let start = strip * self.chunk_size;
        start..start + self.chunk_size
    }

    #[inline]
    pub fn left_edge(&self, strip: usize) -> usize {
        strip * self.chunk_size
    }

    #[inline]
    pub fn right_edge(&self, strip: usize) -> usize {
        strip * self.chunk_size + self.chunk_size - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_counts_strips_and_edges() {
        let layout = StripLayout::new(96, 10, 32).expect("valid layout");
        assert_eq!(layout.strips, 3);
        assert_eq!(layout.columns(1), 32..64);
        assert_eq!(layout.left_edge(2), 64);
        assert_eq!(layout.right_edge(0), 31);
    }

    #[test]
    fn layout_rejects_partial_strips_and_empty_images() {
        for (w, h, c) in [(100, 10, 32), (0, 10, 32), (96, 0, 32), (96, 10, 0)] {
            assert_eq!(
                StripLayout::new(w, h, c),
                Err(UnshredError::InvalidDimensions {
                    width: w,
                    height: h,
                    chunk_size: c,
                }),
                "expected {w}x{h} with chunk {c} to be rejected"
            );
        }
    }
}
