//! Update Service Client Layer
//!
//! This module connects the form to the remote update service:
//!
//! - **HttpUpdateClient**: POSTs update requests with `gloo-net`
//! - **load_config**: resolves the service endpoint at start-up
//!
//! The request/response interpretation itself lives in the shared crate
//! behind the `UpdateClient` trait.

mod config;
mod http;

pub use config::{load_config, ConfigLoadError};
pub use http::HttpUpdateClient;
