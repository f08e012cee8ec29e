use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Evaluation and scoring tunables.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchParams {
    /// The king switches to its endgame table once the fullmove number
    /// exceeds this.
    pub endgame_fullmove: u32,
    /// Score of delivering mate at the root; mates `n` plies deep score
    /// `mate_score - n`.
    pub mate_score: i32,
}

impl Default for SearchParams {
    fn default() -> Self {
        SearchParams {
            endgame_fullmove: 40,
            mate_score: 100_000,
        }
    }
}

/// When to stop searching.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchLimits {
    /// Plies to search below the root; 0 is treated as 1.
    pub depth: u32,
    pub max_nodes: Option<u64>,
    pub max_time: Option<Duration>,
}

impl SearchLimits {
    /// Fixed-depth search with no node or time cap.
    #[must_use]
    pub const fn depth(depth: u32) -> Self {
        SearchLimits {
            depth,
            max_nodes: None,
            max_time: None,
        }
    }

    #[must_use]
    pub const fn with_max_nodes(mut self, nodes: u64) -> Self {
        self.max_nodes = Some(nodes);
        self
    }

    #[must_use]
    pub const fn with_max_time(mut self, time: Duration) -> Self {
        self.max_time = Some(time);
        self
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        SearchLimits::depth(4)
    }
}
