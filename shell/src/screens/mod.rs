//! The four tab screens as explicit state machines.
//!
//! Each screen owns narrowly-scoped local state and follows one-directional
//! data flow: events mutate state through `apply`, and `view` renders a
//! declarative tree from the current state. Screens never share state, hold
//! no globals, and perform no I/O.

pub mod home;
pub mod orders;
pub mod profile;
pub mod services;
