pub mod io;
pub mod rgb;
pub mod traits;

pub use self::rgb::{intensity, ImageRgb8, Rgb8, RgbImageU8};
pub use self::traits::{ImageView, ImageViewMut, Rows};
