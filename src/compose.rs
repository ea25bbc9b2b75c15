//! Strip compositor: copies source strips into destination slots.
//!
//! Slot `p` of the destination receives strip `order[p]` of the source,
//! row by row. No pixel is modified, so composing with the inverse order
//! restores the input exactly.

use crate::error::UnshredError;
use crate::image::{ImageView, ImageViewMut, Rgb8, RgbImageU8};
use crate::types::StripLayout;

/// Compose a new image with the strips of `source` placed in `order`.
pub fn compose<I>(source: &I, layout: &StripLayout, order: &[usize]) -> Result<RgbImageU8, UnshredError>
where
    I: ImageView<Pixel = Rgb8>,
{
    let mut dest = RgbImageU8::new(layout.width, layout.height);
    compose_into(source, &mut dest, layout, order)?;
    Ok(dest)
}

/// Like [`compose`], writing into an existing buffer of the same size.
pub fn compose_into<I, O>(
    source: &I,
    dest: &mut O,
    layout: &StripLayout,
    order: &[usize],
) -> Result<(), UnshredError>
where
    I: ImageView<Pixel = Rgb8>,
    O: ImageViewMut<Pixel = Rgb8>,
{
    for (w, h) in [(source.width(), source.height()), (dest.width(), dest.height())] {
        if w != layout.width || h != layout.height {
            return Err(UnshredError::InvalidDimensions {
                width: w,
                height: h,
                chunk_size: layout.chunk_size,
            });
        }
    }
    check_permutation(order, layout.strips)?;

    for (y, src_row) in source.rows().enumerate() {
        let dst_row = dest.row_mut(y);
        for (slot, &strip) in order.iter().enumerate() {
            dst_row[layout.columns(slot)].copy_from_slice(&src_row[layout.columns(strip)]);
        }
    }
    Ok(())
}

/// Fails unless `order` holds every index in `0..strips` exactly once.
pub fn check_permutation(order: &[usize], strips: usize) -> Result<(), UnshredError> {
    let invalid = UnshredError::InvalidOrder {
        len: order.len(),
        strips,
    };
    if order.len() != strips {
        return Err(invalid);
    }
    let mut seen = vec![false; strips];
    for &strip in order {
        match seen.get_mut(strip) {
            Some(flag) if !*flag => *flag = true,
            _ => return Err(invalid),
        }
    }
    Ok(())
}
