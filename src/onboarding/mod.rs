//! Onboarding flow state — the record a restaurant owner fills in on first
//! launch.
//!
//! The store is created when the onboarding flow mounts and dropped when it
//! unmounts; nothing here is persisted across application restarts. Screens
//! read and merge-update the record through [`OnboardingStore`], and anything
//! that wants change notifications subscribes.

pub mod model;
pub mod store;

pub use model::{OnboardingRecord, OnboardingUpdate};
pub use store::OnboardingStore;
