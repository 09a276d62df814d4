use alloc::sync::Arc;

use elastic::EdgeAdapter;

use crate::indicator::{Indicator, Labels};
use crate::{EdgeState, OnEdgeChange};

/// A text-based pull-to-refresh header.
///
/// Tracks the [`EdgeState`] machine and a status text suited for direct
/// rendering; a UI subscribes with [`with_on_change`](Self::with_on_change)
/// and redraws on each notification. Attach it with
/// `ElasticCoordinator::set_header_adapter`.
#[derive(Debug)]
pub struct HeaderAdapter {
    inner: Indicator,
}

impl HeaderAdapter {
    pub const DEFAULT_REQUIRED_OFFSET: i32 = 80;

    const LABELS: Labels = Labels {
        pull: "Pull down to refresh",
        release: "Release to refresh",
        busy: "Refreshing",
    };

    pub fn new(required_offset: i32) -> Self {
        Self {
            inner: Indicator::new(required_offset, Self::LABELS),
        }
    }

    pub fn with_on_change(
        mut self,
        on_change: impl Fn(EdgeState, i32, &str) + Send + Sync + 'static,
    ) -> Self {
        self.inner.set_on_change(Arc::new(on_change) as OnEdgeChange);
        self
    }

    pub fn state(&self) -> EdgeState {
        self.inner.state()
    }

    /// The current status text, e.g. "Pull down to refresh".
    pub fn status(&self) -> &str {
        self.inner.status()
    }

    /// Pulled distance in pixels, as a positive magnitude.
    pub fn distance(&self) -> i32 {
        self.inner.distance()
    }

    /// Pulled distance over the trigger threshold, clamped to `[0, 1]`.
    pub fn fraction(&self) -> f32 {
        self.inner.fraction()
    }

    /// Whether the direction arrow should point up instead of down.
    pub fn arrow_flipped(&self) -> bool {
        self.inner.arrow_flipped()
    }
}

impl Default for HeaderAdapter {
    fn default() -> Self {
        Self::new(Self::DEFAULT_REQUIRED_OFFSET)
    }
}

impl EdgeAdapter for HeaderAdapter {
    fn required_offset(&self) -> i32 {
        self.inner.required_offset()
    }

    fn is_busy(&self) -> bool {
        self.inner.is_busy()
    }

    fn progress(&mut self, distance: i32) {
        self.inner.progress(distance);
    }

    fn pulling(&mut self) {
        self.inner.pulling();
    }

    fn releasable(&mut self) {
        self.inner.releasable();
    }

    fn start(&mut self) {
        self.inner.start();
    }

    fn cancelled(&mut self) {
        self.inner.cancelled();
    }

    fn finished(&mut self, message: &str) {
        self.inner.finished(message);
    }
}
