//! Porter - Minimal HTTP/1.1 Server Front End
//!
//! Core library for HTTP parsing/serialization, request routing, and
//! cookie-addressed session state.

pub mod config;
pub mod handler;
pub mod http;
pub mod server;
pub mod session;
