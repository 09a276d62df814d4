use alloc::sync::Arc;

use elastic::EdgeAdapter;

use crate::indicator::{Indicator, Labels};
use crate::{EdgeState, OnEdgeChange};

/// A text-based pull-to-load-more footer.
///
/// Mirror of [`HeaderAdapter`](crate::HeaderAdapter) for the trailing edge;
/// attach it with `ElasticCoordinator::set_footer_adapter`. Distances arrive
/// as positive magnitudes here too.
#[derive(Debug)]
pub struct FooterAdapter {
    inner: Indicator,
}

impl FooterAdapter {
    pub const DEFAULT_REQUIRED_OFFSET: i32 = 60;

    const LABELS: Labels = Labels {
        pull: "Pull up to load more",
        release: "Release to load",
        busy: "Loading",
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

    pub fn status(&self) -> &str {
        self.inner.status()
    }

    pub fn distance(&self) -> i32 {
        self.inner.distance()
    }

    pub fn fraction(&self) -> f32 {
        self.inner.fraction()
    }

    /// Whether the direction arrow should point down instead of up.
    pub fn arrow_flipped(&self) -> bool {
        self.inner.arrow_flipped()
    }
}

impl Default for FooterAdapter {
    fn default() -> Self {
        Self::new(Self::DEFAULT_REQUIRED_OFFSET)
    }
}

impl EdgeAdapter for FooterAdapter {
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
