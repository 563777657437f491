//! Static Forbid Server - minimal static-content HTTP server
//!
//! Core library: listener, request parsing, status decision and response
//! transmission.

pub mod config;
pub mod http;
pub mod server;
