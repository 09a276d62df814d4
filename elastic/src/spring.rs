use alloc::sync::Arc;

/// The spring-back animation, sampled on the host's frame clock.
///
/// A spring never schedules anything itself: the coordinator samples it from
/// `tick(now_ms)` and applies the intermediate offsets. Replacing it mid-run
/// (supersede) or dropping it (cancel) guarantees no further updates from the
/// old run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Spring {
    pub from: i32,
    pub to: i32,
    pub start_ms: u64,
    pub duration_ms: u64,
}

impl Spring {
    pub fn new(from: i32, to: i32, start_ms: u64, duration_ms: u64) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms: duration_ms.max(1),
        }
    }

    /// Natural completion, distinct from cancellation.
    pub fn is_done(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.start_ms) >= self.duration_ms
    }

    pub fn sample(&self, now_ms: u64, easing: &Easing) -> i32 {
        let elapsed = now_ms.saturating_sub(self.start_ms);
        let t = (elapsed as f32 / self.duration_ms as f32).clamp(0.0, 1.0);
        let eased = easing.sample(t);

        let from = self.from as f32;
        let to = self.to as f32;
        (from + (to - from) * eased) as i32
    }

    /// Restarts toward a new target from the current sampled value, so the
    /// superseding run begins exactly where the old one left off.
    pub fn retarget(&mut self, now_ms: u64, new_to: i32, duration_ms: u64, easing: &Easing) {
        let cur = self.sample(now_ms, easing);
        *self = Self::new(cur, new_to, now_ms, duration_ms);
    }
}

/// Easing curve for spring-back interpolation.
///
/// The default is the ease-out quadratic `f(t) = -(t-1)^2 + 1`: the spring
/// decelerates as it approaches the target.
#[derive(Clone)]
pub enum Easing {
    EaseOutQuad,
    Linear,
    SmoothStep,
    Custom(Arc<dyn Fn(f32) -> f32 + Send + Sync>),
}

impl Easing {
    pub fn sample(&self, t: f32) -> f32 {
        match self {
            Self::EaseOutQuad => {
                let u = 1.0 - t;
                1.0 - u * u
            }
            Self::Linear => t,
            Self::SmoothStep => t * t * (3.0 - 2.0 * t),
            Self::Custom(f) => f(t),
        }
    }
}

impl Default for Easing {
    fn default() -> Self {
        Self::EaseOutQuad
    }
}

impl core::fmt::Debug for Easing {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::EaseOutQuad => f.write_str("EaseOutQuad"),
            Self::Linear => f.write_str("Linear"),
            Self::SmoothStep => f.write_str("SmoothStep"),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}
