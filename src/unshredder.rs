//! Unshredding pipeline driving the stages end-to-end.
//!
//! The [`Unshredder`] validates the strip layout, scores every ordered pair
//! of strips, reduces the affinity matrix to a chain and finally copies the
//! strips into place. Each stage sees the complete output of the previous
//! one; only the scoring stage runs in parallel.
//!
//! Typical usage:
//! ```no_run
//! use strip_unshredder::{Unshredder, UnshredParams};
//! use strip_unshredder::image::io::load_rgb_image;
//! use std::path::Path;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let img = load_rgb_image(Path::new("shredded.png"))?;
//! let unshredder = Unshredder::new(UnshredParams::default());
//! let outcome = unshredder.process_with_diagnostics(&img.as_view())?;
//! println!("order: {:?}", outcome.report.order);
//! # Ok(())
//! # }
//! ```
use crate::chain::{build_chain, StripChain};
use crate::compose::compose;
use crate::diagnostics::{InputDescriptor, TimingBreakdown, UnshredOutcome, UnshredReport};
use crate::error::UnshredError;
use crate::image::{ImageView, Rgb8, RgbImageU8};
use crate::params::UnshredParams;
use crate::score::AffinityMatrix;
use crate::types::StripLayout;
use log::debug;
use std::time::Instant;

/// Reorders scrambled vertical strips of an image.
#[derive(Clone, Debug, Default)]
pub struct Unshredder {
    params: UnshredParams,
}

/// Layout, scores and chain of one run, before composition.
struct Resolved {
    layout: StripLayout,
    matrix: AffinityMatrix,
    chain: StripChain,
    timings: TimingBreakdown,
}

impl Unshredder {
    /// Create an unshredder with the supplied parameters.
    pub fn new(params: UnshredParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &UnshredParams {
        &self.params
    }

    /// Validate `image` against the configured strip width.
    pub fn layout_for<I: ImageView>(&self, image: &I) -> Result<StripLayout, UnshredError> {
        StripLayout::new(image.width(), image.height(), self.params.chunk_size)
    }

    /// Infer the left-to-right strip order without composing an image.
    pub fn resolve_order<I>(&self, image: &I) -> Result<StripChain, UnshredError>
    where
        I: ImageView<Pixel = Rgb8> + Sync,
    {
        self.resolve(image).map(|r| r.chain)
    }

    /// Reconstruct the image, returning only the output buffer.
    pub fn process<I>(&self, image: &I) -> Result<RgbImageU8, UnshredError>
    where
        I: ImageView<Pixel = Rgb8> + Sync,
    {
        self.process_with_diagnostics(image).map(|o| o.image)
    }

    /// Reconstruct the image and return a report of every stage.
    pub fn process_with_diagnostics<I>(&self, image: &I) -> Result<UnshredOutcome, UnshredError>
    where
        I: ImageView<Pixel = Rgb8> + Sync,
    {
        let total_start = Instant::now();
        let Resolved {
            layout,
            matrix,
            chain,
            mut timings,
        } = self.resolve(image)?;

        let compose_start = Instant::now();
        let output = compose(image, &layout, &chain.order)?;
        timings.push("compose", elapsed_ms(compose_start));
        timings.total_ms = elapsed_ms(total_start);

        let seam_scores = matrix.seam_scores(&chain.order);
        debug!(
            "Unshredder::process done order={:?} total_ms={:.3}",
            chain.order, timings.total_ms
        );

        let report = UnshredReport {
            input: InputDescriptor::from(&layout),
            start_strip: chain.start,
            order: chain.order,
            best_left: chain.best_left,
            best_right: chain.best_right,
            total_affinity: chain.total_affinity,
            seam_scores,
            fallback_steps: chain.fallback_steps,
            timings,
        };
        Ok(UnshredOutcome {
            image: output,
            report,
        })
    }

    fn resolve<I>(&self, image: &I) -> Result<Resolved, UnshredError>
    where
        I: ImageView<Pixel = Rgb8> + Sync,
    {
        let layout = self.layout_for(image)?;
        debug!(
            "Unshredder::process start w={} h={} chunk={} strips={}",
            layout.width, layout.height, layout.chunk_size, layout.strips
        );
        let mut timings = TimingBreakdown::default();

        let score_start = Instant::now();
        let matrix = AffinityMatrix::build(image, &layout);
        timings.push("score", elapsed_ms(score_start));

        let chain_start = Instant::now();
        let chain = build_chain(&matrix, self.params.revisit_policy)?;
        timings.push("chain", elapsed_ms(chain_start));
        debug!(
            "Unshredder::process chain start={} fallbacks={}",
            chain.start, chain.fallback_steps
        );

        Ok(Resolved {
            layout,
            matrix,
            chain,
            timings,
        })
    }
}

fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}
