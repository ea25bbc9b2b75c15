//! Edge-continuity scoring between strips.
//!
//! The affinity of an ordered pair `(a, b)` is the number of rows where the
//! right-most column of strip `a` and the left-most column of strip `b` have
//! nearly equal brightness: `|sum(a) - sum(b)| / 3 < HIT_TOLERANCE`, with the
//! channel sums compared in integer arithmetic. The matrix is directed;
//! `score(a, b)` and `score(b, a)` compare different column pairs.
//!
//! Building the matrix costs `O(N² · H)` pixel reads and dominates a run.
//! With the `parallel` feature each row is scored on the rayon pool; workers
//! only share the read-only image view.

use crate::image::{intensity, ImageView, Rgb8};
use crate::types::StripLayout;
use log::debug;

/// Mean channel difference below which a row counts as a hit.
pub const HIT_TOLERANCE: i32 = 5;

/// Diagonal entry; a strip is never scored against itself.
pub const AFFINITY_SENTINEL: i64 = -1;

/// Count the rows where the right edge of strip `a` matches the left edge of strip `b`.
pub fn edge_affinity<I>(image: &I, layout: &StripLayout, a: usize, b: usize) -> u32
where
    I: ImageView<Pixel = Rgb8>,
{
    let right = layout.right_edge(a);
    let left = layout.left_edge(b);
    image
        .rows()
        .filter(|row| (intensity(row[right]) - intensity(row[left])).abs() / 3 < HIT_TOLERANCE)
        .count() as u32
}

/// Dense directed N×N affinity matrix, row-major.
///
/// `get(i, j)` is how plausible it is that strip `j` sits directly right of
/// strip `i`. Diagonal entries hold [`AFFINITY_SENTINEL`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AffinityMatrix {
    strips: usize,
    scores: Vec<i64>,
}

impl AffinityMatrix {
    /// Score every ordered pair of distinct strips.
    pub fn build<I>(image: &I, layout: &StripLayout) -> Self
    where
        I: ImageView<Pixel = Rgb8> + Sync,
    {
        let n = layout.strips;
        debug!(
            "AffinityMatrix::build strips={} height={} pairs={}",
            n,
            layout.height,
            n * n.saturating_sub(1)
        );

        #[cfg(feature = "parallel")]
        let rows: Vec<Vec<i64>> = {
            use rayon::prelude::*;
            (0..n)
                .into_par_iter()
                .map(|i| score_row(image, layout, i))
                .collect()
        };
        #[cfg(not(feature = "parallel"))]
        let rows: Vec<Vec<i64>> = (0..n).map(|i| score_row(image, layout, i)).collect();

        Self {
            strips: n,
            scores: rows.into_iter().flatten().collect(),
        }
    }

    /// Build from explicit rows. Returns `None` unless the rows form a square matrix.
    ///
    /// Diagonal values are replaced by [`AFFINITY_SENTINEL`].
    pub fn from_rows(rows: &[Vec<i64>]) -> Option<Self> {
        let n = rows.len();
        if rows.iter().any(|r| r.len() != n) {
            return None;
        }
        let mut scores: Vec<i64> = rows.iter().flatten().copied().collect();
        for i in 0..n {
            scores[i * n + i] = AFFINITY_SENTINEL;
        }
        Some(Self { strips: n, scores })
    }

    /// Number of strips (matrix side length).
    pub fn strips(&self) -> usize {
        self.strips
    }

    #[inline]
    pub fn get(&self, left: usize, right: usize) -> i64 {
        self.scores[left * self.strips + right]
    }

    /// Scores of every candidate right neighbour of `left`.
    pub fn row(&self, left: usize) -> &[i64] {
        let start = left * self.strips;
        &self.scores[start..start + self.strips]
    }

    /// Sum of each column, diagonal sentinel included: how strongly every
    /// other strip continues into the left edge of each strip.
    pub fn column_sums(&self) -> Vec<i64> {
        let mut sums = vec![0i64; self.strips];
        for row in self.scores.chunks_exact(self.strips.max(1)) {
            for (sum, &score) in sums.iter_mut().zip(row) {
                *sum += score;
            }
        }
        sums
    }

    /// Affinity of each adjacent pair in `order`.
    pub fn seam_scores(&self, order: &[usize]) -> Vec<i64> {
        order.windows(2).map(|w| self.get(w[0], w[1])).collect()
    }
}

fn score_row<I>(image: &I, layout: &StripLayout, i: usize) -> Vec<i64>
where
    I: ImageView<Pixel = Rgb8>,
{
    (0..layout.strips)
        .map(|j| {
            if i == j {
                AFFINITY_SENTINEL
            } else {
                edge_affinity(image, layout, i, j) as i64
            }
        })
        .collect()
}
