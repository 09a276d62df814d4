use alloc::boxed::Box;
use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::{
    Consumed, Damping, Easing, Edge, EdgeAdapter, ElasticError, ElasticEvent, ElasticOptions,
    Orientation, Phase, Spring,
};

/// A fling landing on an offset at or past this magnitude is rejected.
const FLING_OFFSET_LIMIT: i32 = 100;
/// Minimum damped velocity proxy (`|dx + dy| * current`) for fling admission.
const FLING_MIN_VELOCITY: f32 = 10.0;
/// Duration of the pull-to-threshold animation for programmatic triggers.
const TRIGGER_ANIM_MS: u64 = 150;
/// Delay before springing back to rest after a completed cycle, so the
/// completion state stays visible briefly.
const SETTLE_DELAY_MS: u64 = 300;
const DEFAULT_DONE_MESSAGE: &str = "Done";

#[derive(Clone, Copy, Debug)]
struct Gesture {
    is_moving: bool,
    is_flinging: bool,
    fling_allowed: bool,
}

impl Default for Gesture {
    fn default() -> Self {
        Self {
            is_moving: false,
            is_flinging: false,
            fling_allowed: true,
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Deferred {
    SpringToRest { duration_ms: u64 },
}

#[derive(Clone, Copy, Debug)]
struct DeferredTask {
    due_ms: u64,
    action: Deferred,
}

/// The elastic nested-scroll coordinator.
///
/// A single-child container that intercepts scroll deltas delegated by an
/// inner scrollable, applies a damped rubber-band displacement past content
/// boundaries, and drives pull-to-refresh / pull-to-load-more through the two
/// [`EdgeAdapter`] slots.
///
/// It is headless and single-threaded: the host forwards gesture callbacks
/// (`on_scroll_start` / `on_pre_scroll` / `on_scroll_stopped`) and drives
/// animation by calling [`tick`](Self::tick) once per frame with a
/// monotonic `now_ms`. The coordinator owns the content offset along its
/// configured axis; negative means the header is pulled into view, positive
/// the footer, zero is rest.
pub struct ElasticCoordinator {
    options: ElasticOptions,
    damping: Damping,
    offset: i32,
    header: Option<Box<dyn EdgeAdapter>>,
    footer: Option<Box<dyn EdgeAdapter>>,
    gesture: Gesture,
    spring: Option<Spring>,
    /// Edge in a busy cycle. Set at the busy transition, cleared only when
    /// the post-finish spring-back completes naturally.
    busy_edge: Option<Edge>,
    /// The busy cycle has been finished and is settling back to rest.
    settling: bool,
    /// Pending cancel flag with its spring-back duration.
    cancel: Option<u64>,
    deferred: Vec<DeferredTask>,
}

impl ElasticCoordinator {
    pub fn new(options: ElasticOptions) -> Result<Self, ElasticError> {
        let damping = Damping::new(
            options.damping_base,
            options.damping_decays,
            options.decay_window,
        )?;
        edebug!(
            orientation = ?options.orientation,
            damping_base = options.damping_base,
            decay_window = options.decay_window,
            "ElasticCoordinator::new"
        );
        Ok(Self {
            options,
            damping,
            offset: 0,
            header: None,
            footer: None,
            gesture: Gesture::default(),
            spring: None,
            busy_edge: None,
            settling: false,
            cancel: None,
            deferred: Vec::new(),
        })
    }

    pub fn options(&self) -> &ElasticOptions {
        &self.options
    }

    pub fn orientation(&self) -> Orientation {
        self.options.orientation
    }

    /// The coordinator's own content offset along the active axis.
    pub fn offset(&self) -> i32 {
        self.offset
    }

    pub fn is_animating(&self) -> bool {
        self.spring.is_some()
    }

    pub fn is_refreshing(&self) -> bool {
        matches!(self.busy_edge, Some(Edge::Header)) && !self.settling
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.busy_edge, Some(Edge::Footer)) && !self.settling
    }

    /// Attaches the header adapter. Each slot accepts one adapter for the
    /// coordinator's lifetime; a second attach is a configuration error.
    pub fn set_header_adapter(
        &mut self,
        adapter: Box<dyn EdgeAdapter>,
    ) -> Result<(), ElasticError> {
        Self::attach(&mut self.header, adapter, Edge::Header)
    }

    /// Attaches the footer adapter. See [`set_header_adapter`](Self::set_header_adapter).
    pub fn set_footer_adapter(
        &mut self,
        adapter: Box<dyn EdgeAdapter>,
    ) -> Result<(), ElasticError> {
        Self::attach(&mut self.footer, adapter, Edge::Footer)
    }

    fn attach(
        slot: &mut Option<Box<dyn EdgeAdapter>>,
        adapter: Box<dyn EdgeAdapter>,
        edge: Edge,
    ) -> Result<(), ElasticError> {
        if slot.is_some() {
            return Err(ElasticError::SlotOccupied(edge));
        }
        let required = adapter.required_offset();
        if required <= 0 {
            return Err(ElasticError::InvalidRequiredOffset(required));
        }
        edebug!(edge = ?edge, required, "adapter attached");
        *slot = Some(adapter);
        Ok(())
    }

    pub fn set_damping(&mut self, base: f32, decays: bool) -> Result<(), ElasticError> {
        self.damping.set_base(base, decays)?;
        self.options.damping_base = base;
        self.options.damping_decays = decays;
        Ok(())
    }

    pub fn set_decay_window(&mut self, decay_window: i32) -> Result<(), ElasticError> {
        self.damping.set_decay_window(decay_window)?;
        self.options.decay_window = decay_window;
        Ok(())
    }

    /// Sets the spring-back durations. `short_ms` defaults to `long_ms / 2`.
    pub fn set_animation_duration(&mut self, long_ms: u64, short_ms: Option<u64>) {
        self.options.anim_time_long_ms = long_ms;
        self.options.anim_time_short_ms = short_ms.unwrap_or(long_ms / 2);
    }

    pub fn set_spring_easing(&mut self, easing: Easing) {
        self.options.easing = easing;
    }

    pub fn set_on_event(&mut self, on_event: Option<impl Fn(ElasticEvent) + Send + Sync + 'static>) {
        self.options.on_event = on_event.map(|f| Arc::new(f) as _);
    }

    pub fn set_on_scroll(&mut self, on_scroll: Option<impl Fn(i32, i32) + Send + Sync + 'static>) {
        self.options.on_scroll = on_scroll.map(|f| Arc::new(f) as _);
    }

    /// Accepts or rejects a starting nested-scroll gesture.
    ///
    /// Only gestures on the configured axis are accepted. Accepting cancels
    /// any in-flight spring so the new gesture does not fight a settling
    /// animation.
    pub fn on_scroll_start(&mut self, axes: Orientation) -> bool {
        if axes != self.options.orientation {
            return false;
        }
        self.spring = None;
        true
    }

    /// Pre-scroll interception: decides how much of `(dx, dy)` the
    /// coordinator consumes before the inner scrollable sees it.
    pub fn on_pre_scroll(&mut self, dx: i32, dy: i32, phase: Phase, now_ms: u64) -> Consumed {
        if let Some(veto) = self.options.pre_scroll_veto.clone() {
            let (cur_x, cur_y) = self.options.orientation.restrict(self.offset);
            if veto(cur_x, cur_y, dx, dy) {
                return Consumed::all(dx, dy);
            }
        }

        let at_edge = !(self.options.can_scroll_child)(dx, dy);
        if at_edge {
            self.pre_scroll_at_edge(dx, dy, phase, now_ms)
        } else {
            self.pre_scroll_reversing(dx, dy)
        }
    }

    /// The inner scrollable is at its boundary: the coordinator claims the
    /// whole delta and turns it into a damped pull.
    fn pre_scroll_at_edge(&mut self, dx: i32, dy: i32, phase: Phase, now_ms: u64) -> Consumed {
        if self.slot_busy() {
            // Consumed but inert: the offset stays frozen until done.
            return Consumed::all(dx, dy);
        }

        match phase {
            Phase::Touch => {
                self.gesture.is_moving = true;
                self.gesture.fling_allowed = false;
            }
            Phase::NonTouch => {
                if !self.gesture.fling_allowed {
                    // Follow-up deltas of a rejected fling: keep snapping back.
                    if self.spring.is_none() && self.offset != 0 {
                        self.start_spring(0, self.options.anim_time_short_ms, now_ms);
                    }
                    return Consumed::NONE;
                }
                self.gesture.is_flinging = true;
                let velocity = (dx + dy).unsigned_abs() as f32 * self.damping.current();
                if self.offset.abs() >= FLING_OFFSET_LIMIT || velocity < FLING_MIN_VELOCITY {
                    edebug!(offset = self.offset, velocity, "fling rejected");
                    self.gesture.fling_allowed = false;
                    self.start_spring(0, self.options.anim_time_short_ms, now_ms);
                    return Consumed::NONE;
                }
            }
        }

        let raw = self.options.orientation.axis_delta(dx, dy);
        let applied = self.damping.apply(raw);
        etrace!(raw, applied, offset = self.offset, "damped pull");
        self.apply_offset(applied);
        self.damping.recompute(self.offset);
        Consumed::all(dx, dy)
    }

    /// The inner scrollable still has room: the coordinator only acts when it
    /// holds a non-zero offset, claiming just enough of the delta to walk the
    /// offset back toward zero without overshooting past it.
    fn pre_scroll_reversing(&mut self, dx: i32, dy: i32) -> Consumed {
        if self.offset == 0 || self.slot_busy() {
            return Consumed::NONE;
        }

        let raw = self.options.orientation.axis_delta(dx, dy);
        let step = self.damping.apply_base(raw);
        let (applied, claimed) = if (self.offset < 0 && step > -self.offset)
            || (self.offset > 0 && step < -self.offset)
        {
            // Snapping past rest: clamp at zero and only claim the raw
            // portion that was needed to get there.
            let applied = -self.offset;
            (applied, self.damping.raw_for_applied_base(applied))
        } else {
            (step, raw)
        };

        self.apply_offset(applied);
        self.damping.recompute(self.offset);
        let (cx, cy) = self.options.orientation.restrict(claimed);
        Consumed::all(cx, cy)
    }

    /// Gesture-end notification.
    ///
    /// The `NonTouch` form signals fling settle and only resets the fling
    /// admission flags. The `Touch` form (finger lift) evaluates the trigger
    /// thresholds and starts the spring-back.
    pub fn on_scroll_stopped(&mut self, phase: Phase, now_ms: u64) {
        if phase == Phase::NonTouch {
            self.gesture.fling_allowed = true;
            self.gesture.is_flinging = false;
            return;
        }

        if !self.gesture.is_moving {
            self.resume_settle(now_ms);
            return;
        }
        self.gesture.is_moving = false;

        if let Some(duration_ms) = self.cancel.take() {
            edebug!(offset = self.offset, "release cancelled");
            if self.offset < 0 {
                if let Some(h) = self.header.as_mut() {
                    h.cancelled();
                }
            } else if self.offset > 0 {
                if let Some(f) = self.footer.as_mut() {
                    f.cancelled();
                }
            }
            self.start_spring(0, duration_ms, now_ms);
            return;
        }

        let header_required = self.header.as_ref().map(|h| h.required_offset());
        if let Some(required) = header_required {
            if self.offset < 0 && -self.offset >= required {
                self.release_past_threshold(Edge::Header, -required, now_ms);
                return;
            }
        }

        let footer_required = self.footer.as_ref().map(|f| f.required_offset());
        if let Some(required) = footer_required {
            if self.offset > 0 && self.offset >= required {
                self.release_past_threshold(Edge::Footer, required, now_ms);
                return;
            }
        }

        self.start_spring(0, self.options.anim_time_long_ms, now_ms);
    }

    fn release_past_threshold(&mut self, edge: Edge, target: i32, now_ms: u64) {
        self.start_spring(target, self.options.anim_time_short_ms, now_ms);
        if self.slot_busy() {
            return;
        }
        edebug!(edge = ?edge, target, "threshold trigger");
        self.busy_edge = Some(edge);
        let (slot, event) = match edge {
            Edge::Header => (&mut self.header, ElasticEvent::Refresh),
            Edge::Footer => (&mut self.footer, ElasticEvent::Load),
        };
        if let Some(adapter) = slot.as_mut() {
            adapter.start();
        }
        if let Some(cb) = &self.options.on_event {
            cb(event);
        }
    }

    /// A touch accepted at `on_scroll_start` cancels the in-flight spring; if
    /// the finger lifts again without dragging the container, resume the
    /// interrupted settle from wherever the offset stopped.
    fn resume_settle(&mut self, now_ms: u64) {
        if self.spring.is_some() || self.offset == 0 {
            return;
        }
        let (target, duration_ms) = match self.busy_edge {
            Some(Edge::Header) if !self.settling => (
                self.header.as_ref().map_or(0, |h| -h.required_offset()),
                self.options.anim_time_short_ms,
            ),
            Some(Edge::Footer) if !self.settling => (
                self.footer.as_ref().map_or(0, |f| f.required_offset()),
                self.options.anim_time_short_ms,
            ),
            _ => (0, self.options.anim_time_long_ms),
        };
        if self.offset != target {
            self.start_spring(target, duration_ms, now_ms);
        }
    }

    /// Advances deferred tasks and the spring animation.
    ///
    /// Call once per frame with a monotonic timestamp. Returns the current
    /// offset while a spring is animating, `None` otherwise.
    pub fn tick(&mut self, now_ms: u64) -> Option<i32> {
        self.run_deferred(now_ms);

        let spring = self.spring?;
        let sampled = spring.sample(now_ms, &self.options.easing);
        self.apply_offset(sampled - self.offset);

        if spring.is_done(now_ms) {
            self.spring = None;
            // Natural completion is the only point that closes a finished
            // busy cycle.
            if self.settling {
                self.settling = false;
                self.busy_edge = None;
            }
        }
        Some(self.offset)
    }

    /// Synthesizes a refresh cycle (`active = true`) or completes one with
    /// the default message (`active = false`). No-op when the header slot is
    /// empty or the state does not match.
    pub fn set_refreshing(&mut self, active: bool, now_ms: u64) {
        if active {
            self.trigger(Edge::Header, now_ms);
        } else {
            self.finish_refresh(DEFAULT_DONE_MESSAGE, now_ms);
        }
    }

    /// Symmetric to [`set_refreshing`](Self::set_refreshing) for the footer.
    pub fn set_loading(&mut self, active: bool, now_ms: u64) {
        if active {
            self.trigger(Edge::Footer, now_ms);
        } else {
            self.finish_load(DEFAULT_DONE_MESSAGE, now_ms);
        }
    }

    fn trigger(&mut self, edge: Edge, now_ms: u64) {
        if self.slot_busy() {
            ewarn!(edge = ?edge, "programmatic trigger ignored: a cycle is already running");
            return;
        }
        let target = match edge {
            Edge::Header => match self.header.as_ref() {
                Some(h) => -h.required_offset(),
                None => return,
            },
            Edge::Footer => match self.footer.as_ref() {
                Some(f) => f.required_offset(),
                None => return,
            },
        };
        edebug!(edge = ?edge, target, "programmatic trigger");
        self.start_spring(target, TRIGGER_ANIM_MS, now_ms);
        self.busy_edge = Some(edge);
        let (slot, event) = match edge {
            Edge::Header => (&mut self.header, ElasticEvent::Refresh),
            Edge::Footer => (&mut self.footer, ElasticEvent::Load),
        };
        if let Some(adapter) = slot.as_mut() {
            adapter.start();
        }
        if let Some(cb) = &self.options.on_event {
            cb(event);
        }
    }

    /// Completes a running refresh cycle with a message. The adapter shows
    /// the message for a fixed settle delay, then the offset springs back to
    /// rest. No-op unless a refresh is running.
    pub fn finish_refresh(&mut self, message: &str, now_ms: u64) {
        if !self.is_refreshing() {
            return;
        }
        if let Some(h) = self.header.as_mut() {
            h.finished(message);
        }
        self.settle_after_done(now_ms);
    }

    /// Symmetric to [`finish_refresh`](Self::finish_refresh) for the footer.
    pub fn finish_load(&mut self, message: &str, now_ms: u64) {
        if !self.is_loading() {
            return;
        }
        if let Some(f) = self.footer.as_mut() {
            f.finished(message);
        }
        self.settle_after_done(now_ms);
    }

    fn settle_after_done(&mut self, now_ms: u64) {
        self.settling = true;
        // One-shot deferred task on the interaction thread; not cancellable
        // once scheduled.
        self.deferred.push(DeferredTask {
            due_ms: now_ms.saturating_add(SETTLE_DELAY_MS),
            action: Deferred::SpringToRest {
                duration_ms: self.options.anim_time_long_ms,
            },
        });
    }

    /// Forces the next release to abort without triggering: the adapter gets
    /// a cancellation notice and the offset springs fully back over
    /// `duration_ms`.
    pub fn cancel_loading(&mut self, duration_ms: u64) {
        self.cancel = Some(duration_ms);
    }

    fn slot_busy(&self) -> bool {
        self.busy_edge.is_some()
            || self.header.as_ref().is_some_and(|h| h.is_busy())
            || self.footer.as_ref().is_some_and(|f| f.is_busy())
    }

    /// Starts (or supersedes) the spring. The replaced run delivers no
    /// further updates; the new run starts from the current offset, so there
    /// is no visual jump.
    fn start_spring(&mut self, to: i32, duration_ms: u64, now_ms: u64) {
        etrace!(from = self.offset, to, duration_ms, "start_spring");
        self.spring = Some(Spring::new(self.offset, to, now_ms, duration_ms));
    }

    fn run_deferred(&mut self, now_ms: u64) {
        let mut i = 0;
        while i < self.deferred.len() {
            if self.deferred[i].due_ms <= now_ms {
                let task = self.deferred.remove(i);
                match task.action {
                    Deferred::SpringToRest { duration_ms } => {
                        self.start_spring(0, duration_ms, now_ms);
                    }
                }
            } else {
                i += 1;
            }
        }
    }

    /// The single point of truth for offset mutation. Forwards the applied
    /// delta to the content-offsetting primitive and the scroll listener,
    /// then updates the active adapter's visible state (unless busy).
    ///
    /// Both gesture deltas and spring samples land here; the damping path is
    /// never re-entered.
    fn apply_offset(&mut self, delta: i32) {
        if delta == 0 {
            return;
        }
        self.offset += delta;

        let (dx, dy) = self.options.orientation.restrict(delta);
        if let Some(scroll) = &self.options.scroll_content {
            scroll(dx, dy);
        }
        if let Some(on_scroll) = &self.options.on_scroll {
            on_scroll(dx, dy);
        }

        if self.slot_busy() {
            return;
        }
        if self.offset < 0 {
            let distance = -self.offset;
            if let Some(h) = self.header.as_mut() {
                h.progress(distance);
                if distance >= h.required_offset() {
                    h.releasable();
                } else {
                    h.pulling();
                }
            }
        } else if self.offset > 0 {
            let distance = self.offset;
            if let Some(f) = self.footer.as_mut() {
                f.progress(distance);
                if distance >= f.required_offset() {
                    f.releasable();
                } else {
                    f.pulling();
                }
            }
        }
    }
}

impl core::fmt::Debug for ElasticCoordinator {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ElasticCoordinator")
            .field("offset", &self.offset)
            .field("orientation", &self.options.orientation)
            .field("busy_edge", &self.busy_edge)
            .field("settling", &self.settling)
            .field("spring", &self.spring)
            .finish_non_exhaustive()
    }
}
