//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers validate inputs via `menugen_core`, call the provider or the
//! engine, and map errors via [`crate::error::AppError`].

pub mod edit;
pub mod generation;
pub mod surprise;
pub mod variants;
