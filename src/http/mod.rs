//! HTTP protocol implementation.
//!
//! This module implements the HTTP/1.1 front end: wire-format parsing into
//! structured requests and serialization of structured responses back into
//! exact wire bytes.
//!
//! # Architecture
//!
//! - **`connection`**: The per-connection driver implementing the
//!   request-response state machine
//! - **`parser`**: Parses incoming HTTP requests from byte buffers
//! - **`target`**: The request-target (path + query string) model
//! - **`headers`**: Ordered, case-sensitive header map
//! - **`request`**: HTTP request representation with cookie/query accessors
//! - **`response`**: HTTP response representation with builder pattern
//! - **`writer`**: Serializes and writes HTTP responses to the client
//! - **`mime`**: Content-type inference from file extensions
//!
//! # Connection State Machine
//!
//! Each client connection goes through a state machine:
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Wait for incoming request data
//!        └──────┬──────┘
//!               │ Request received (or malformed → 400)
//!               ▼
//!        ┌──────────────────┐
//!        │   Processing     │ ← Route and generate response
//!        └──────┬───────────┘
//!               │ Response ready
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Send response to client
//!        └──────┬───────────┘
//!               │ Response sent
//!               └─ Close (one request per connection)
//! ```

pub mod connection;
pub mod headers;
pub mod mime;
pub mod parser;
pub mod request;
pub mod response;
pub mod target;
pub mod writer;
