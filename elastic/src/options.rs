use alloc::sync::Arc;

use crate::{Damping, Easing, ElasticEvent, Orientation};

/// Fired once per triggered cycle when an adapter enters its busy state.
pub type OnEventCallback = Arc<dyn Fn(ElasticEvent) + Send + Sync>;

/// Fired on every applied offset delta, gesture- and animation-driven alike.
///
/// Arguments are the applied `(dx, dy)`, restricted to the active axis.
pub type OnScrollCallback = Arc<dyn Fn(i32, i32) + Send + Sync>;

/// Optional veto hook consulted before a delta enters the coordinator.
///
/// Arguments are `(cur_x, cur_y, dx, dy)`. Returning `true` fully absorbs
/// the delta: the coordinator reports it consumed and applies nothing.
pub type PreScrollVeto = Arc<dyn Fn(i32, i32, i32, i32) -> bool + Send + Sync>;

/// Boundary-reachability capability of the opaque inner scrollable.
///
/// `(dx, dy)` is the incoming delta; return `true` while the inner
/// scrollable still has room to consume it in that direction.
pub type CanScrollChild = Arc<dyn Fn(i32, i32) -> bool + Send + Sync>;

/// Content-offsetting primitive: directly moves the scroll position of the
/// content by the applied `(dx, dy)`.
///
/// Optional; hosts that re-render from [`crate::ElasticCoordinator::offset`]
/// each frame do not need it.
pub type ScrollContent = Arc<dyn Fn(i32, i32) + Send + Sync>;

/// Configuration for [`crate::ElasticCoordinator`].
///
/// Cheap to clone: callbacks are stored in `Arc`s. Validation (damping range,
/// decay window) happens in `ElasticCoordinator::new`.
#[derive(Clone)]
pub struct ElasticOptions {
    /// The elastic axis. Gestures on the other axis are rejected at
    /// `on_scroll_start`.
    pub orientation: Orientation,

    pub can_scroll_child: CanScrollChild,
    pub scroll_content: Option<ScrollContent>,
    pub on_event: Option<OnEventCallback>,
    pub on_scroll: Option<OnScrollCallback>,

    /// Presence of this hook opts into the feature-complete pre-intercept
    /// behavior; absent, the coordinator behaves as the simpler variant.
    pub pre_scroll_veto: Option<PreScrollVeto>,

    /// Base damping coefficient in `(0, 1]`.
    pub damping_base: f32,
    /// Whether the coefficient decays as the pull grows.
    pub damping_decays: bool,
    /// Pixel band width for coefficient decay; must be positive.
    pub decay_window: i32,

    /// Duration of the full spring-back to rest.
    pub anim_time_long_ms: u64,
    /// Duration of the settle-to-trigger and fling-reject spring-backs.
    pub anim_time_short_ms: u64,

    pub easing: Easing,
}

impl ElasticOptions {
    pub fn new(
        orientation: Orientation,
        can_scroll_child: impl Fn(i32, i32) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            orientation,
            can_scroll_child: Arc::new(can_scroll_child),
            scroll_content: None,
            on_event: None,
            on_scroll: None,
            pre_scroll_veto: None,
            damping_base: Damping::DEFAULT_BASE,
            damping_decays: true,
            decay_window: Damping::DEFAULT_DECAY_WINDOW,
            anim_time_long_ms: 200,
            anim_time_short_ms: 100,
            easing: Easing::default(),
        }
    }

    pub fn with_scroll_content(
        mut self,
        scroll_content: impl Fn(i32, i32) + Send + Sync + 'static,
    ) -> Self {
        self.scroll_content = Some(Arc::new(scroll_content));
        self
    }

    pub fn with_on_event(mut self, on_event: impl Fn(ElasticEvent) + Send + Sync + 'static) -> Self {
        self.on_event = Some(Arc::new(on_event));
        self
    }

    pub fn with_on_scroll(mut self, on_scroll: impl Fn(i32, i32) + Send + Sync + 'static) -> Self {
        self.on_scroll = Some(Arc::new(on_scroll));
        self
    }

    pub fn with_pre_scroll_veto(
        mut self,
        veto: impl Fn(i32, i32, i32, i32) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.pre_scroll_veto = Some(Arc::new(veto));
        self
    }

    pub fn with_damping(mut self, base: f32, decays: bool) -> Self {
        self.damping_base = base;
        self.damping_decays = decays;
        self
    }

    pub fn with_decay_window(mut self, decay_window: i32) -> Self {
        self.decay_window = decay_window;
        self
    }

    /// Sets the spring-back durations. `short_ms` defaults to `long_ms / 2`.
    pub fn with_animation_duration(mut self, long_ms: u64, short_ms: Option<u64>) -> Self {
        self.anim_time_long_ms = long_ms;
        self.anim_time_short_ms = short_ms.unwrap_or(long_ms / 2);
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
}

impl core::fmt::Debug for ElasticOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ElasticOptions")
            .field("orientation", &self.orientation)
            .field("damping_base", &self.damping_base)
            .field("damping_decays", &self.damping_decays)
            .field("decay_window", &self.decay_window)
            .field("anim_time_long_ms", &self.anim_time_long_ms)
            .field("anim_time_short_ms", &self.anim_time_short_ms)
            .field("easing", &self.easing)
            .finish_non_exhaustive()
    }
}
