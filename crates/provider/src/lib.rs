//! AI provider client library.
//!
//! Defines the provider-agnostic [`capability::MenuProvider`] trait the
//! rest of the platform depends on, plus the concrete fal.ai REST client,
//! response parsing, and configuration.

pub mod api;
pub mod capability;
pub mod config;
pub mod parse;

pub use capability::{MenuProvider, ProviderError};
