use indexmap::IndexMap;

#[derive(Debug, PartialEq, Eq)]
pub enum TargetError {
    /// The raw target was empty or did not start with '/'.
    Malformed,
}

/// The path-plus-query-string portion of an HTTP request line.
///
/// Built once at parse time and immutable afterward. The path never contains
/// a `?`; everything after the first `?` is decomposed into ordered query
/// parameters. No percent-decoding is performed.
#[derive(Debug, Clone)]
pub struct RequestTarget {
    path: String,
    query_params: IndexMap<String, String>,
}

impl RequestTarget {
    pub fn parse(raw: &str) -> Result<Self, TargetError> {
        if raw.is_empty() || !raw.starts_with('/') {
            return Err(TargetError::Malformed);
        }

        let (path, query) = match raw.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (raw, None),
        };

        let query_params = match query {
            Some(q) => parse_pairs(q),
            None => IndexMap::new(),
        };

        Ok(Self {
            path: path.to_string(),
            query_params,
        })
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn has_query_params(&self) -> bool {
        !self.query_params.is_empty()
    }

    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query_params.get(name).map(|v| v.as_str())
    }

    pub fn query_params(&self) -> &IndexMap<String, String> {
        &self.query_params
    }
}

/// Decodes the `key=value&key=value` grammar shared by query strings and
/// form-encoded request bodies.
///
/// A token with no `=` yields the token with an empty value. Empty tokens
/// contribute nothing. On duplicate keys the last occurrence wins.
pub fn parse_pairs(raw: &str) -> IndexMap<String, String> {
    let mut pairs = IndexMap::new();

    for token in raw.split('&') {
        if token.is_empty() {
            continue;
        }

        let (key, value) = match token.split_once('=') {
            Some((key, value)) => (key, value),
            None => (token, ""),
        };

        pairs.insert(key.to_string(), value.to_string());
    }

    pairs
}
