//! Common/Shared UI Components
//!
//! Reusable components used throughout the application.

mod icons;

pub use icons::*;
