//! Parameters configuring an unshredding run.

use crate::chain::RevisitPolicy;
use crate::types::DEFAULT_CHUNK_SIZE;
use serde::{Deserialize, Serialize};

/// Knobs for [`Unshredder`](crate::Unshredder).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnshredParams {
    /// Strip width in pixels. The image width must be a multiple of it.
    pub chunk_size: usize,
    /// Behaviour when the chain walk runs into a strip it already placed.
    pub revisit_policy: RevisitPolicy,
}

impl Default for UnshredParams {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            revisit_policy: RevisitPolicy::Abort,
        }
    }
}

impl UnshredParams {
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    pub fn with_revisit_policy(mut self, policy: RevisitPolicy) -> Self {
        self.revisit_policy = policy;
        self
    }
}
