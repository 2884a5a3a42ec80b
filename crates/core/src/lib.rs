//! Domain logic for the menugen platform.
//!
//! Pure types, validation, prompt construction, and the variant session
//! state machine. No HTTP or provider I/O lives here; the `provider` and
//! `api` crates build on top of these types.

pub mod error;
pub mod menu;
pub mod session;
pub mod types;
