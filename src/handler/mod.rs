//! Request handling
//!
//! This module decides what each parsed request gets back: a static
//! resource, the login form, or a login redirect with session creation.
//! The two external capabilities it depends on (resource lookup and
//! credential verification) sit behind traits so tests can substitute
//! in-memory stubs.

pub mod auth;
pub mod resolver;
pub mod router;

pub use auth::{CredentialChecker, InMemoryUserStore};
pub use resolver::{Resource, ResolveError, ResourceResolver, StaticFileResolver};
pub use router::RequestHandler;
