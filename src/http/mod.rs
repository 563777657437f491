//! HTTP request pipeline.
//!
//! One connection carries exactly one request. Nothing is kept alive.
//!
//! # Architecture
//!
//! - **`connection`**: per-connection state machine driving the pipeline
//! - **`parser`**: turns the first 1024 bytes into a [`request::Request`]
//! - **`request`**: request representation
//! - **`site`**: document root, User-Agent guard, status decision, body selection
//! - **`response`**: status codes and the fixed response header set
//! - **`writer`**: serializes and writes the header block and body
//! - **`error`**: errors that end a connection early
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌─────────────┐
//!        │  Accepted   │ ← Read one chunk (≤ 1024 bytes)
//!        └──────┬──────┘
//!               │ Parsed ok           (0 bytes or bad request line → Closed)
//!               ▼
//!        ┌──────────────────┐
//!        │     Parsed       │ ← User-Agent guard, then file check
//!        └──────┬───────────┘
//!               ▼
//!        ┌──────────────────┐
//!        │  StatusDecided   │ ← Write status line + headers
//!        └──────┬───────────┘
//!               ▼
//!        ┌──────────────────┐
//!        │   HeadersSent    │ ← Write file / 404 page / "ForForForbid"
//!        └──────┬───────────┘
//!               ▼
//!          BodySent → Closed
//! ```

pub mod connection;
pub mod error;
pub mod parser;
pub mod request;
pub mod response;
pub mod site;
pub mod writer;
