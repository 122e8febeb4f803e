use std::path::PathBuf;

use crate::http::mime;

/// Static content resolved for a request path.
#[derive(Debug, Clone)]
pub struct Resource {
    pub bytes: Vec<u8>,
    pub content_type: String,
}

#[derive(Debug, PartialEq, Eq)]
pub enum ResolveError {
    NotFound,
}

/// External capability mapping a request path to content bytes and a
/// content type.
///
/// Resolution is synchronous: the handler core performs no I/O suspension,
/// and implementations are expected to answer from memory or local disk.
pub trait ResourceResolver {
    fn resolve(&self, path: &str) -> Result<Resource, ResolveError>;
}

/// Serves files from a static root directory.
///
/// `/` maps to `/index.html`; paths containing `..` are treated as absent
/// rather than resolved. Any read failure reports the resource as absent.
#[derive(Debug, Clone)]
pub struct StaticFileResolver {
    root: PathBuf,
}

impl StaticFileResolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ResourceResolver for StaticFileResolver {
    fn resolve(&self, path: &str) -> Result<Resource, ResolveError> {
        if path.contains("..") {
            return Err(ResolveError::NotFound);
        }

        let path = if path == "/" { "/index.html" } else { path };
        let full_path = self.root.join(path.trim_start_matches('/'));

        let bytes = std::fs::read(&full_path).map_err(|_| ResolveError::NotFound)?;

        Ok(Resource {
            bytes,
            content_type: mime::content_type_for(path).to_string(),
        })
    }
}
