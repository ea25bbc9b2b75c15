//! Three-channel 8-bit images: a borrowed view and an owned buffer.
//!
//! Pixels are stored as `[r, g, b]` triples in row-major order. The view is
//! `Copy`-cheap and `Sync`, so it can be handed to every scoring worker
//! without synchronisation.

use super::traits::{ImageView, ImageViewMut};

/// One RGB sample.
pub type Rgb8 = [u8; 3];

/// Sum of the three channel intensities of a pixel (0..=765).
#[inline]
pub fn intensity(px: Rgb8) -> i32 {
    px[0] as i32 + px[1] as i32 + px[2] as i32
}

/// Borrowed, read-only RGB image.
#[derive(Clone, Copy, Debug)]
pub struct ImageRgb8<'a> {
    pub w: usize,
    pub h: usize,
    pub stride: usize, // pixels between rows
    pub data: &'a [Rgb8],
}

impl<'a> ImageRgb8<'a> {
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Rgb8 {
        self.data[y * self.stride + x]
    }
}

impl<'a> ImageView for ImageRgb8<'a> {
    type Pixel = Rgb8;

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
    fn row(&self, y: usize) -> &[Rgb8] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
}

/// Owned RGB buffer in row-major layout (stride == width).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RgbImageU8 {
    width: usize,
    height: usize,
    data: Vec<Rgb8>,
}

impl RgbImageU8 {
    /// Black image of size `width × height`.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![[0, 0, 0]; width * height],
        }
    }

    /// Wrap row-major pixels. Returns `None` when the length does not match.
    pub fn from_pixels(width: usize, height: usize, data: Vec<Rgb8>) -> Option<Self> {
        (data.len() == width * height).then_some(Self {
            width,
            height,
            data,
        })
    }

    /// Build from interleaved `r, g, b` bytes, as produced by most decoders.
    pub fn from_raw_bytes(width: usize, height: usize, bytes: &[u8]) -> Option<Self> {
        if bytes.len() != width * height * 3 {
            return None;
        }
        let data = bytes
            .chunks_exact(3)
            .map(|c| [c[0], c[1], c[2]])
            .collect();
        Some(Self {
            width,
            height,
            data,
        })
    }

    /// Interleaved `r, g, b` bytes for handing to an encoder.
    pub fn to_raw_bytes(&self) -> Vec<u8> {
        self.data.iter().flat_map(|px| px.iter().copied()).collect()
    }

    /// Image width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Rgb8 {
        self.data[y * self.width + x]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, px: Rgb8) {
        let i = y * self.width + x;
        self.data[i] = px;
    }

    /// Borrow as a read-only `ImageRgb8` view
    pub fn as_view(&self) -> ImageRgb8<'_> {
        ImageRgb8 {
            w: self.width,
            h: self.height,
            stride: self.width,
            data: &self.data,
        }
    }
}

impl ImageView for RgbImageU8 {
    type Pixel = Rgb8;

    #[inline]
    fn width(&self) -> usize {
        self.width
    }
    #[inline]
    fn height(&self) -> usize {
        self.height
    }
    #[inline]
    fn stride(&self) -> usize {
        self.width
    }
    #[inline]
    fn row(&self, y: usize) -> &[Rgb8] {
        let start = y * self.width;
        &self.data[start..start + self.width]
    }
}

impl ImageViewMut for RgbImageU8 {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [Rgb8] {
        let start = y * self.width;
        &mut self.data[start..start + self.width]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_bytes_are_interleaved_rgb() {
        let bytes = [1u8, 2, 3, 4, 5, 6];
        let img = RgbImageU8::from_raw_bytes(2, 1, &bytes).expect("length matches");
        assert_eq!(img.get(0, 0), [1, 2, 3]);
        assert_eq!(img.get(1, 0), [4, 5, 6]);
        assert_eq!(img.to_raw_bytes(), bytes.to_vec());
        assert!(RgbImageU8::from_raw_bytes(2, 2, &bytes).is_none());

        let same = RgbImageU8::from_pixels(2, 1, vec![[1, 2, 3], [4, 5, 6]]).unwrap();
        assert_eq!(same, img);
        assert!(RgbImageU8::from_pixels(3, 1, vec![[0, 0, 0]]).is_none());
    }

    #[test]
    fn padded_view_trims_rows_to_width() {
        let data = vec![[1, 1, 1], [2, 2, 2], [9, 9, 9], [3, 3, 3], [4, 4, 4], [9, 9, 9]];
        let view = ImageRgb8 {
            w: 2,
            h: 2,
            stride: 3,
            data: &data,
        };
        assert_eq!(view.row(1), &[[3, 3, 3], [4, 4, 4]]);
        assert_eq!(view.get(1, 1), [4, 4, 4]);
        assert_eq!(view.rows().count(), 2);
    }

    #[test]
    fn intensity_sums_channels() {
        assert_eq!(intensity([255, 255, 255]), 765);
        assert_eq!(intensity([10, 20, 30]), 60);
    }
}
