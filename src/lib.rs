#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod chain;
pub mod compose;
pub mod diagnostics;
pub mod error;
pub mod image;
pub mod params;
pub mod score;
pub mod types;
pub mod unshredder;

// Configuration files for the bundled tools.
pub mod config;

// --- High-level re-exports -------------------------------------------------

pub use crate::chain::{RevisitPolicy, StripChain};
pub use crate::diagnostics::{UnshredOutcome, UnshredReport};
pub use crate::error::UnshredError;
pub use crate::params::UnshredParams;
pub use crate::score::AffinityMatrix;
pub use crate::types::{StripLayout, DEFAULT_CHUNK_SIZE};
pub use crate::unshredder::Unshredder;

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use strip_unshredder::prelude::*;
///
/// # fn main() -> Result<(), UnshredError> {
/// let (w, h) = (128usize, 64usize);
/// let img = RgbImageU8::new(w, h);
///
/// let unshredder = Unshredder::new(UnshredParams::default());
/// let chain = unshredder.resolve_order(&img.as_view())?;
/// println!("start={} order={:?}", chain.start, chain.order);
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::image::{ImageRgb8, ImageView, RgbImageU8};
    pub use crate::{UnshredError, UnshredParams, Unshredder};
}
