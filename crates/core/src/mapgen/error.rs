//! Why candidates are rejected and how the fallback self-check can fail.
//! Neither type crosses the `generate` boundary: rejections drive retries and a
//! failed fallback check is logged.

use super::model::LayoutVariant;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CandidateRejection {
    #[error("no room proposal fit without overlapping")]
    NoRooms,
    #[error("start component has {found} tiles, need {required}")]
    TooFewReachable { found: usize, required: usize },
    #[error("no goal tile distinct from the start is reachable")]
    NoGoalPlacement,
    #[error("no start/goal pair met the separation within the sampling budget")]
    NoStartGoalPair,
    #[error("expected exactly one goal tile, found {found}")]
    GoalCount { found: usize },
    #[error("goal is outside the start's walking component")]
    GoalUnreachable,
    #[error("goal cannot be reached under the movement model")]
    Unsolvable,
    #[error("solution takes {found} moves, need at least {required}")]
    SolutionTooShort { found: u32, required: u32 },
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{variant:?} fallback layout failed its own validation")]
pub struct FallbackViolation {
    pub variant: LayoutVariant,
    #[source]
    pub rejection: CandidateRejection,
}
