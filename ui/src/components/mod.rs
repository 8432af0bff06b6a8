//! UI Components
//!
//! This module contains all UI components organized by feature:
//! - `update`: Company ID form, error banner and results card
//! - `common`: Shared/reusable components

pub mod common;
pub mod update;

pub use update::{ErrorAlert, ResultsCard, UpdateForm};
