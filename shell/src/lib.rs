//! Platform-agnostic core of the Swift Assist errand app.
//!
//! This crate models the order domain and the four tab screens as explicit
//! state machines with one-directional data flow (state renders a view,
//! events update state). The architecture enforces a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (status taxonomy, partitioning,
//!   lifecycle rules, semantic invariants). No I/O, fully testable in
//!   isolation.
//! - **[`screens`]**: Per-screen local state and the declarative view trees
//!   rendered from it. No screen state is shared or global.
//! - Boundary modules ([`config`], [`source`]) own the only side effects:
//!   loading human-edited configuration and deserializing order payloads.
//!
//! A native front-end embeds the crate, feeds user events in, and draws the
//! view structs out; the crate itself renders nothing and talks to no
//! server.

pub mod catalog;
pub mod config;
pub mod core;
pub mod fixtures;
pub mod logging;
pub mod order;
pub mod screens;
pub mod source;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
