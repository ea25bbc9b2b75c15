//! Greedy chain reconstruction from the affinity matrix.
//!
//! `matrix.get(i, j)` scores strip `j` sitting directly right of strip `i`,
//! so column `k` lists how well each strip continues into the left edge of
//! `k`.
//!
//! 1. Every strip gets its best left neighbour: the highest-scoring `j != k`
//!    in column `k`, keeping the first strict improvement while scanning `j`
//!    upwards.
//! 2. The start is the strip with the smallest incoming (column) sum, first
//!    one on ties. The left-most strip has nothing continuing into it.
//! 3. The start's own best-left pointer is cut. The best-right pointer of a
//!    strip is the first strip whose best left neighbour it is. The walk
//!    follows best-right pointers from the start, marking strips in a
//!    visited bitmap, until every strip is placed.
//!
//! The walk never backtracks. When no unplaced successor exists,
//! [`RevisitPolicy`] decides whether that aborts or falls back to the best
//! unvisited right candidate.

use crate::error::UnshredError;
use crate::score::AffinityMatrix;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// What the chain walk does when the current strip has no unplaced successor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevisitPolicy {
    /// Fail with [`UnshredError::DegenerateOrder`].
    #[default]
    Abort,
    /// Continue with the unvisited strip scoring highest to the right (same tie-break).
    NextBestUnvisited,
}

/// Outcome of the chain walk together with the tables it was derived from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StripChain {
    /// Left-to-right strip indices; `order[0] == start`.
    pub order: Vec<usize>,
    pub start: usize,
    /// Best left neighbour of each strip, with the start's pointer cut.
    pub best_left: Vec<Option<usize>>,
    /// Successor of each strip derived from `best_left`.
    pub best_right: Vec<Option<usize>>,
    /// Incoming affinity of each strip (column sums).
    pub total_affinity: Vec<i64>,
    /// Steps taken through the fallback instead of the best-right pointer.
    pub fallback_steps: usize,
}

/// Best left neighbour of every strip, `None` only when there is no other strip.
pub fn best_left_neighbors(matrix: &AffinityMatrix) -> Vec<Option<usize>> {
    let n = matrix.strips();
    (0..n)
        .map(|k| best_candidate((0..n).map(|j| matrix.get(j, k)), |j| j != k))
        .collect()
}

/// For each strip, the first strip (ascending index) whose best left neighbour it is.
pub fn best_right_from_left(best_left: &[Option<usize>]) -> Vec<Option<usize>> {
    let mut best_right = vec![None; best_left.len()];
    for (k, left) in best_left.iter().enumerate() {
        if let Some(i) = *left {
            best_right[i].get_or_insert(k);
        }
    }
    best_right
}

/// Incoming affinity of each strip: column sums, diagonal sentinel included.
pub fn total_affinity(matrix: &AffinityMatrix) -> Vec<i64> {
    matrix.column_sums()
}

/// Index of the first minimum, `None` for an empty slice.
pub fn select_start(totals: &[i64]) -> Option<usize> {
    let mut best: Option<(usize, i64)> = None;
    for (i, &t) in totals.iter().enumerate() {
        if best.map_or(true, |(_, b)| t < b) {
            best = Some((i, t));
        }
    }
    best.map(|(i, _)| i)
}

/// Reduce the affinity matrix to a left-to-right order of all strips.
pub fn build_chain(
    matrix: &AffinityMatrix,
    policy: RevisitPolicy,
) -> Result<StripChain, UnshredError> {
    let n = matrix.strips();
    let totals = total_affinity(matrix);
    let Some(start) = select_start(&totals) else {
        return Ok(StripChain {
            order: Vec::new(),
            start: 0,
            best_left: Vec::new(),
            best_right: Vec::new(),
            total_affinity: totals,
            fallback_steps: 0,
        });
    };

    let mut best_left = best_left_neighbors(matrix);
    best_left[start] = None;
    let best_right = best_right_from_left(&best_left);
    debug!("build_chain strips={} start={} policy={:?}", n, start, policy);

    let mut visited = vec![false; n];
    let mut order = Vec::with_capacity(n);
    let mut fallback_steps = 0usize;
    let mut current = start;
    visited[start] = true;
    order.push(start);

    while order.len() < n {
        let next = match best_right[current] {
            Some(candidate) if !visited[candidate] => candidate,
            _ => {
                let degenerate = UnshredError::DegenerateOrder {
                    after: current,
                    placed: order.len(),
                    total: n,
                };
                match policy {
                    RevisitPolicy::Abort => return Err(degenerate),
                    RevisitPolicy::NextBestUnvisited => {
                        let fallback = best_candidate(matrix.row(current).iter().copied(), |j| {
                            !visited[j]
                        })
                        .ok_or(degenerate)?;
                        warn!(
                            "chain walk: no unplaced successor of strip {}, falling back to {}",
                            current, fallback
                        );
                        fallback_steps += 1;
                        fallback
                    }
                }
            }
        };
        visited[next] = true;
        order.push(next);
        current = next;
    }

    Ok(StripChain {
        order,
        start,
        best_left,
        best_right,
        total_affinity: totals,
        fallback_steps,
    })
}

/// Argmax over the admissible scores, first strict improvement wins.
fn best_candidate(
    scores: impl IntoIterator<Item = i64>,
    admissible: impl Fn(usize) -> bool,
) -> Option<usize> {
    let mut best: Option<(usize, i64)> = None;
    for (j, score) in scores.into_iter().enumerate() {
        if !admissible(j) {
            continue;
        }
        if best.map_or(true, |(_, b)| score > b) {
            best = Some((j, score));
        }
    }
    best.map(|(j, _)| j)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(rows: &[Vec<i64>]) -> AffinityMatrix {
        AffinityMatrix::from_rows(rows).expect("square matrix")
    }

    #[test]
    fn ties_resolve_to_lowest_index() {
        let m = matrix(&[
            vec![0, 7, 7, 3],
            vec![4, 0, 4, 4],
            vec![1, 1, 0, 1],
            vec![2, 9, 9, 0],
        ]);
        let left = best_left_neighbors(&m);
        assert_eq!(left, vec![Some(1), Some(3), Some(3), Some(1)]);
        // Strips 1 and 2 both have 3 on their left; the lower index wins.
        assert_eq!(
            best_right_from_left(&left),
            vec![None, Some(0), None, Some(1)]
        );
        assert_eq!(select_start(&[5, 2, 2, 9]), Some(1));
        assert_eq!(select_start(&[]), None);
    }

    #[test]
    fn walk_starts_from_weakest_incoming_affinity() {
        // True order 2 -> 0 -> 3 -> 1.
        let m = matrix(&[
            vec![0, 1, 2, 50],
            vec![1, 0, 1, 0],
            vec![60, 2, 0, 1],
            vec![2, 40, 0, 0],
        ]);
        let chain = build_chain(&m, RevisitPolicy::Abort).expect("chain");
        assert_eq!(chain.total_affinity, vec![62, 42, 2, 50]);
        assert_eq!(chain.start, 2);
        assert_eq!(chain.order, vec![2, 0, 3, 1]);
        assert_eq!(chain.best_left, vec![Some(2), Some(3), None, Some(0)]);
        assert_eq!(chain.best_right, vec![Some(3), None, Some(0), Some(1)]);
        assert_eq!(chain.fallback_steps, 0);
    }

    #[test]
    fn single_strip_is_its_own_order() {
        let m = matrix(&[vec![0]]);
        let chain = build_chain(&m, RevisitPolicy::Abort).expect("chain");
        assert_eq!(chain.order, vec![0]);
        assert_eq!(chain.best_left, vec![None]);
        assert_eq!(chain.best_right, vec![None]);
    }

    #[test]
    fn dead_end_aborts_with_degenerate_order() {
        // 0 <-> 1 and 2 <-> 3 are mutual best matches.
        let m = matrix(&[
            vec![0, 9, 1, 1],
            vec![9, 0, 1, 1],
            vec![1, 1, 0, 9],
            vec![1, 1, 9, 0],
        ]);
        // Column sums all equal 10 -> start 0; nothing has 1 on its left.
        let err = build_chain(&m, RevisitPolicy::Abort).unwrap_err();
        assert_eq!(
            err,
            UnshredError::DegenerateOrder {
                after: 1,
                placed: 2,
                total: 4
            }
        );
    }

    #[test]
    fn fallback_policy_still_yields_a_permutation() {
        let m = matrix(&[
            vec![0, 9, 1, 1],
            vec![9, 0, 1, 1],
            vec![1, 1, 0, 9],
            vec![1, 1, 9, 0],
        ]);
        let chain = build_chain(&m, RevisitPolicy::NextBestUnvisited).expect("chain");
        assert_eq!(chain.order, vec![0, 1, 2, 3]);
        assert_eq!(chain.fallback_steps, 1);
    }

    #[test]
    fn fallback_skips_successors_that_are_already_placed() {
        // Best-left: 1 <- 3, 2 <- 1, 3 <- 2, 4 <- 3. Nothing follows the
        // start 0, so the walk jumps to 2, runs 2 -> 3 -> 1 and then finds
        // 1's successor 2 already placed.
        let m = matrix(&[
            vec![0, 0, 5, 0, 0],
            vec![0, 0, 9, 0, 0],
            vec![0, 0, 0, 9, 0],
            vec![0, 9, 0, 0, 8],
            vec![0, 0, 0, 0, 0],
        ]);
        let chain = build_chain(&m, RevisitPolicy::NextBestUnvisited).expect("chain");
        assert_eq!(chain.start, 0);
        assert_eq!(chain.order, vec![0, 2, 3, 1, 4]);
        assert_eq!(chain.fallback_steps, 2);

        let err = build_chain(&m, RevisitPolicy::Abort).unwrap_err();
        assert_eq!(
            err,
            UnshredError::DegenerateOrder {
                after: 0,
                placed: 1,
                total: 5
            }
        );
    }
}
