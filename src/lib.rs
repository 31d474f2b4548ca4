//! Kitchen core — onboarding state and media upload for the restaurant app.

pub mod config;
pub mod error;
pub mod media;
pub mod onboarding;

pub use error::{Error, Result};
