//! Edge adapters for the `elastic` crate.
//!
//! The `elastic` crate is UI-agnostic and focuses on the core math and state. This crate
//! provides ready-made `EdgeAdapter` implementations commonly needed by hosts:
//!
//! - [`HeaderAdapter`]: a text-based pull-to-refresh indicator
//! - [`FooterAdapter`]: a text-based pull-to-load-more indicator
//!
//! Both track the [`EdgeState`] machine and a status text, and notify an
//! optional observer so a UI can redraw without polling. This crate is
//! intentionally framework-agnostic (no ratatui/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod footer;
mod header;
mod indicator;
mod state;

#[cfg(test)]
mod tests;

pub use footer::FooterAdapter;
pub use header::HeaderAdapter;
pub use state::{EdgeState, OnEdgeChange};
