use alloc::string::String;

use crate::{EdgeState, OnEdgeChange};

/// Status texts for one edge. Header and footer differ only in these.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Labels {
    pub pull: &'static str,
    pub release: &'static str,
    pub busy: &'static str,
}

/// Shared indicator state machine behind [`HeaderAdapter`](crate::HeaderAdapter)
/// and [`FooterAdapter`](crate::FooterAdapter).
///
/// Distances arrive as positive magnitudes regardless of edge; the
/// coordinator owns the sign convention.
pub(crate) struct Indicator {
    required_offset: i32,
    labels: Labels,
    state: EdgeState,
    distance: i32,
    status: String,
    on_change: Option<OnEdgeChange>,
}

impl Indicator {
    pub fn new(required_offset: i32, labels: Labels) -> Self {
        Self {
            required_offset,
            labels,
            state: EdgeState::Idle,
            distance: 0,
            status: String::from(labels.pull),
            on_change: None,
        }
    }

    pub fn set_on_change(&mut self, on_change: OnEdgeChange) {
        self.on_change = Some(on_change);
    }

    pub fn required_offset(&self) -> i32 {
        self.required_offset
    }

    pub fn state(&self) -> EdgeState {
        self.state
    }

    pub fn distance(&self) -> i32 {
        self.distance
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    /// Pulled distance as a fraction of the trigger threshold, clamped to
    /// `[0, 1]`. Suited for driving progress arcs and arrow rotation.
    pub fn fraction(&self) -> f32 {
        (self.distance as f32 / self.required_offset as f32).clamp(0.0, 1.0)
    }

    /// Whether the direction arrow should point away from its rest pose:
    /// flips on the pulling/releasable boundary, back when the cycle starts.
    pub fn arrow_flipped(&self) -> bool {
        self.state == EdgeState::Releasable
    }

    pub fn is_busy(&self) -> bool {
        self.state == EdgeState::Busy
    }

    pub fn progress(&mut self, distance: i32) {
        if distance != self.distance {
            self.distance = distance;
            self.notify();
        }
    }

    pub fn pulling(&mut self) {
        self.transition(EdgeState::Pulling, self.labels.pull);
    }

    pub fn releasable(&mut self) {
        self.transition(EdgeState::Releasable, self.labels.release);
    }

    pub fn start(&mut self) {
        self.transition(EdgeState::Busy, self.labels.busy);
    }

    pub fn cancelled(&mut self) {
        self.transition(EdgeState::Idle, self.labels.pull);
    }

    /// Shows `message` until the next pull reopens the cycle. No-op unless
    /// the indicator is busy.
    pub fn finished(&mut self, message: &str) {
        if self.state != EdgeState::Busy {
            return;
        }
        self.state = EdgeState::Done;
        self.status.clear();
        self.status.push_str(message);
        self.notify();
    }

    fn transition(&mut self, state: EdgeState, status: &'static str) {
        if self.state == state {
            return;
        }
        self.state = state;
        self.status.clear();
        self.status.push_str(status);
        self.notify();
    }

    fn notify(&self) {
        if let Some(cb) = &self.on_change {
            cb(self.state, self.distance, &self.status);
        }
    }
}

impl core::fmt::Debug for Indicator {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Indicator")
            .field("state", &self.state)
            .field("distance", &self.distance)
            .field("status", &self.status)
            .field("required_offset", &self.required_offset)
            .finish_non_exhaustive()
    }
}
