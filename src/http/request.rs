use indexmap::IndexMap;

use crate::http::headers::HttpHeaders;
use crate::http::target::{self, RequestTarget};

/// Name of the cookie carrying the session identifier.
pub const SESSION_COOKIE: &str = "JSESSIONID";

/// HTTP request methods.
///
/// All common verbs are recognized by the parser, but only GET and POST have
/// dedicated routing; anything else falls through to static-resource lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    GET,
    POST,
    PUT,
    DELETE,
    HEAD,
    OPTIONS,
    PATCH,
}

impl Method {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "GET" => Some(Method::GET),
            "POST" => Some(Method::POST),
            "PUT" => Some(Method::PUT),
            "DELETE" => Some(Method::DELETE),
            "HEAD" => Some(Method::HEAD),
            "OPTIONS" => Some(Method::OPTIONS),
            "PATCH" => Some(Method::PATCH),
            _ => None,
        }
    }
}

/// A parsed HTTP request.
///
/// Immutable once constructed; created once per connection by the parser and
/// discarded after the handler produces a response.
#[derive(Debug, Clone)]
pub struct Request {
    pub method: Method,
    pub target: RequestTarget,
    pub version: String,
    pub headers: HttpHeaders,
    pub body: Option<Vec<u8>>,
}

/// Builder for constructing Request objects, mainly from tests.
pub struct RequestBuilder {
    method: Option<Method>,
    target: Option<RequestTarget>,
    version: Option<String>,
    headers: HttpHeaders,
    body: Option<Vec<u8>>,
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self {
            method: None,
            target: None,
            version: None,
            headers: HttpHeaders::new(),
            body: None,
        }
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    /// Sets the request target from its raw `path[?query]` form.
    pub fn target(mut self, raw: &str) -> Self {
        self.target = RequestTarget::parse(raw).ok();
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.insert(name, value);
        self
    }

    pub fn body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }

    pub fn build(self) -> Result<Request, &'static str> {
        Ok(Request {
            method: self.method.ok_or("method missing")?,
            target: self.target.ok_or("target missing")?,
            version: self.version.unwrap_or_else(|| "HTTP/1.1".to_string()),
            headers: self.headers,
            body: self.body,
        })
    }
}

impl Default for RequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Request {
    pub fn path(&self) -> &str {
        self.target.path()
    }

    /// Retrieves a header value by its exact name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)
    }

    /// The declared Content-Length, or 0 when missing or unparsable.
    pub fn content_length(&self) -> usize {
        self.header("Content-Length")
            .and_then(|v| v.parse().ok())
            .unwrap_or(0)
    }

    pub fn has_query_params(&self) -> bool {
        self.target.has_query_params()
    }

    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.target.query_param(name)
    }

    /// Decodes the body as `key=value&key=value` form pairs.
    ///
    /// Empty when there is no body or the body is not valid UTF-8.
    pub fn form_params(&self) -> IndexMap<String, String> {
        self.body
            .as_deref()
            .and_then(|b| std::str::from_utf8(b).ok())
            .map(target::parse_pairs)
            .unwrap_or_default()
    }

    /// Extracts the session id from the `JSESSIONID` pair of the Cookie
    /// header, if any.
    pub fn session_id(&self) -> Option<&str> {
        let cookies = self.header("Cookie")?;
        cookies.split(';').find_map(|pair| {
            let (name, value) = pair.trim().split_once('=')?;
            (name == SESSION_COOKIE).then_some(value)
        })
    }
}
