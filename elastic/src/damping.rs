use crate::ElasticError;

/// Converts raw gesture deltas into damped offset deltas.
///
/// The coefficient decays in discrete bands of `decay_window` pixels rather
/// than along a smooth curve: it is recomputed on every applied delta in the
/// gesture-tracking hot path, and an integer division avoids transcendental
/// calls there.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Damping {
    base: f32,
    current: f32,
    decays: bool,
    decay_window: i32,
}

impl Damping {
    pub const DEFAULT_BASE: f32 = 0.5;
    pub const DEFAULT_DECAY_WINDOW: i32 = 100;

    pub fn new(base: f32, decays: bool, decay_window: i32) -> Result<Self, ElasticError> {
        if !(base > 0.0 && base <= 1.0) {
            return Err(ElasticError::InvalidDamping(base));
        }
        if decay_window <= 0 {
            return Err(ElasticError::InvalidDecayWindow(decay_window));
        }
        Ok(Self {
            base,
            current: base,
            decays,
            decay_window,
        })
    }

    pub fn base(&self) -> f32 {
        self.base
    }

    pub fn current(&self) -> f32 {
        self.current
    }

    pub fn decays(&self) -> bool {
        self.decays
    }

    pub fn decay_window(&self) -> i32 {
        self.decay_window
    }

    /// Replaces the base coefficient. Resets the working coefficient too.
    pub fn set_base(&mut self, base: f32, decays: bool) -> Result<(), ElasticError> {
        if !(base > 0.0 && base <= 1.0) {
            return Err(ElasticError::InvalidDamping(base));
        }
        self.base = base;
        self.current = base;
        self.decays = decays;
        Ok(())
    }

    pub fn set_decay_window(&mut self, decay_window: i32) -> Result<(), ElasticError> {
        if decay_window <= 0 {
            return Err(ElasticError::InvalidDecayWindow(decay_window));
        }
        self.decay_window = decay_window;
        Ok(())
    }

    /// Damps a raw delta with the current (possibly decayed) coefficient,
    /// truncated toward zero to an integer pixel delta.
    pub fn apply(&self, raw: i32) -> i32 {
        (raw as f32 * self.current) as i32
    }

    /// Damps a raw delta with the invariant base coefficient.
    ///
    /// Used when walking the offset back toward rest: the reverse direction
    /// keeps a constant feel regardless of how far the pull decayed.
    pub fn apply_base(&self, raw: i32) -> i32 {
        (raw as f32 * self.base) as i32
    }

    /// Raw pixels needed to produce `applied` at the base coefficient.
    ///
    /// The reverse branch reports only this portion as consumed when the
    /// walk-back clamps at zero.
    pub fn raw_for_applied_base(&self, applied: i32) -> i32 {
        (applied as f32 / self.base) as i32
    }

    /// Recomputes the working coefficient from the accumulated offset.
    ///
    /// `steps = max(1, |offset| / decay_window)`, `current = base / steps`.
    pub fn recompute(&mut self, offset: i32) {
        if !self.decays {
            return;
        }
        let steps = (offset.abs() / self.decay_window).max(1);
        self.current = self.base / steps as f32;
    }
}

impl Default for Damping {
    fn default() -> Self {
        Self {
            base: Self::DEFAULT_BASE,
            current: Self::DEFAULT_BASE,
            decays: true,
            decay_window: Self::DEFAULT_DECAY_WINDOW,
        }
    }
}
