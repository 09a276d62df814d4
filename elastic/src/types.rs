/// The scroll axis a coordinator is elastic on, fixed per instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Vertical,
    Horizontal,
}

impl Orientation {
    /// Picks the component of a `(dx, dy)` pair that lies on this axis.
    pub fn axis_delta(self, dx: i32, dy: i32) -> i32 {
        match self {
            Self::Vertical => dy,
            Self::Horizontal => dx,
        }
    }

    /// Expands an axis delta back into a `(dx, dy)` pair with the cross axis zeroed.
    pub fn restrict(self, delta: i32) -> (i32, i32) {
        match self {
            Self::Vertical => (0, delta),
            Self::Horizontal => (delta, 0),
        }
    }
}

/// How a scroll delta was produced.
///
/// `Touch` deltas track a finger; `NonTouch` deltas are the inertial fling
/// continuation delivered after the finger lifts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    Touch,
    NonTouch,
}

/// One of the two edge-adapter slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Edge {
    Header,
    Footer,
}

/// Fired through [`crate::OnEventCallback`] exactly once per triggered cycle,
/// at the moment the corresponding adapter enters its busy state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ElasticEvent {
    Refresh,
    Load,
}

/// The portion of an incoming scroll delta claimed by the coordinator.
///
/// Whatever is not consumed stays available to the inner scrollable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Consumed {
    pub x: i32,
    pub y: i32,
}

impl Consumed {
    pub const NONE: Self = Self { x: 0, y: 0 };

    pub fn all(dx: i32, dy: i32) -> Self {
        Self { x: dx, y: dy }
    }

    pub fn is_none(&self) -> bool {
        self.x == 0 && self.y == 0
    }
}
