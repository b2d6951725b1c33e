//! # Common Components
//!
//! Shared utilities used by the processing functions and the HTTP server.
//!
//! ## Modules
//!
//! - [`codec`]: Base64 decoding and two-decimal formatting
//! - [`error`]: Input error type
//! - [`config`]: Configuration parsing utilities
//! - [`logging`]: Logger setup

pub mod codec;
pub mod config;
pub mod error;
pub mod logging;
