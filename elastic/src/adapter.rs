/// Capability contract for a header or footer edge widget.
///
/// Implementors own their visible sub-state machine
/// (idle → pulling → releasable → busy → idle); the coordinator never
/// inspects anything beyond [`required_offset`](Self::required_offset) and
/// [`is_busy`](Self::is_busy).
///
/// Callbacks arrive on the single interaction thread. Implementors must not
/// call back into the coordinator's scroll entry points synchronously.
pub trait EdgeAdapter: Send {
    /// Pull distance (in pixels, always positive) that arms the trigger.
    fn required_offset(&self) -> i32;

    /// Whether a refresh/load cycle is currently running.
    fn is_busy(&self) -> bool;

    /// Pull progress, reported as a positive distance on every applied
    /// offset change while this edge is active. Keeps firing past
    /// `required_offset` until the finger lifts.
    fn progress(&mut self, distance: i32) {
        let _ = distance;
    }

    /// The pull is still short of `required_offset`.
    fn pulling(&mut self) {}

    /// The pull has reached `required_offset`; releasing now triggers.
    fn releasable(&mut self) {}

    /// Busy transition. Fires exactly once per triggered cycle.
    fn start(&mut self);

    /// The release was aborted by a pending cancel flag; no busy transition
    /// happened and none will.
    fn cancelled(&mut self) {}

    /// Busy → idle with a completion message. Called while idle, this must
    /// be a no-op.
    fn finished(&mut self, message: &str);
}
