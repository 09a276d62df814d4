//! A headless elastic nested-scroll coordinator.
//!
//! For ready-made header/footer adapters (status text, progress), see the
//! `elastic-adapter` crate.
//!
//! This crate focuses on the interaction state machine behind rubber-band
//! overscroll and pull-to-refresh / load-more: deciding frame by frame how
//! much of a scroll delta the container consumes versus passes through,
//! decaying the damping coefficient with pull distance, admitting or
//! suppressing flings, and springing back to rest with an interruptible
//! eased animation.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - gesture deltas with their phase (touch vs. fling)
//! - boundary reachability of the inner scrollable
//! - a per-frame `tick(now_ms)` call on its animation clock
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod adapter;
mod coordinator;
mod damping;
mod error;
mod options;
mod spring;
mod types;


pub use adapter::EdgeAdapter;
pub use coordinator::ElasticCoordinator;
pub use damping::Damping;
pub use error::ElasticError;
pub use options::{
    CanScrollChild, ElasticOptions, OnEventCallback, OnScrollCallback, PreScrollVeto,
    ScrollContent,
};
pub use spring::{Easing, Spring};
pub use types::{Consumed, Edge, ElasticEvent, Orientation, Phase};
