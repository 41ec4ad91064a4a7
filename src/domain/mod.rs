//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (dates, months, errors)
//! - `cycle` - Period log, prediction, reminders and calendar classification
//! - `profile` - Opaque user profile data

pub mod cycle;
pub mod foundation;
pub mod profile;
