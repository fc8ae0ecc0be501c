//! Window controller for the `windower` crate.
//!
//! The `windower` crate is stateless math: one call, one window. This crate owns the state
//! around it, framework-neutral:
//!
//! - A startup loop that repeats passes after a list is (re)populated until the window settles
//! - Frame-coalesced refresh (any number of scroll/resize/input triggers, one pass per frame)
//! - Change detection and `update`/`start`/`end`/`change` notifications
//! - Programmatic `scroll_into_view`
//! - Scoped subscriptions to the host scroll container
//!
//! This crate is intentionally framework-agnostic (no DOM/egui/ratatui bindings).
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod controller;
mod event;
mod host;
mod inputs;


pub use controller::Controller;
pub use event::{WindowEvent, WindowListener};
pub use host::{FrameScheduler, ScrollSource, SubscriptionId};
pub use inputs::InputChanges;
