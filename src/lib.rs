//! # delcom-starter
//!
//! Plain-text HTTP endpoints for NIM lookup, weighted grades, path reversal
//! distance and `ter`-word frequency.
//!
//! - [`common`]: codecs, errors, configuration and logging
//! - [`processing`]: the pure request-processing functions
//! - [`server`]: axum router, handlers and metrics

pub mod common;
pub mod processing;
pub mod server;

pub use common::error::InputError;
pub use server::Server;
