use crate::Edge;

/// Configuration errors, surfaced synchronously at attach/configure time.
///
/// Everything else in the interaction path is either a deliberate no-op
/// (triggering an unset slot, finishing while idle) or resolved
/// deterministically (a gesture superseding a settling animation), so this
/// enum is the crate's entire error surface.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum ElasticError {
    #[error("{0:?} slot already has an adapter attached")]
    SlotOccupied(Edge),
    #[error("damping base must be in (0, 1], got {0}")]
    InvalidDamping(f32),
    #[error("decay window must be positive, got {0}")]
    InvalidDecayWindow(i32),
    #[error("adapter required offset must be positive, got {0}")]
    InvalidRequiredOffset(i32),
}
