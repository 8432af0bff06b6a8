//! Shared types for the customer address updater
//!
//! This crate contains everything the form needs that does not touch the
//! browser:
//! - Company ID validation
//! - Update service request/response types
//! - Response interpretation and the error taxonomy
//! - The form view-state model and results table rows
//! - Client configuration

pub mod client;
pub mod company_id;
pub mod config;
pub mod error;
pub mod form;
pub mod messages;
pub mod reply;
pub mod table;

pub use client::*;
pub use company_id::*;
pub use config::*;
pub use error::*;
pub use form::*;
pub use messages::*;
pub use reply::*;
pub use table::*;
