use alloc::sync::Arc;

/// Visible state of an edge indicator.
///
/// `Idle` is the initial state and the state after a cancelled release.
/// `Done` holds the completion message until the next pull reopens the
/// cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EdgeState {
    #[default]
    Idle,
    Pulling,
    Releasable,
    Busy,
    Done,
}

/// Observer for indicator changes: `(state, distance, status_text)`.
///
/// Invoked on every state transition and on every pulled-distance change, so
/// a UI can redraw the indicator without polling.
pub type OnEdgeChange = Arc<dyn Fn(EdgeState, i32, &str) + Send + Sync>;
