//! Customer Address Updater UI Library
//!
//! This crate provides the address update form - a single page where an
//! operator enters a company ID, pushes the address update to every backing
//! database and reviews the per-database outcome.
//!
//! # Modules
//!
//! - [`app`]: Root application component
//! - [`client`]: Update service client and configuration loading
//! - [`components`]: UI components (form, error banner, results card)
//! - [`state`]: Reactive form state

pub mod app;
pub mod client;
pub mod components;
pub mod state;

pub use app::App;
