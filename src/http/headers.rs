use indexmap::IndexMap;

#[derive(Debug, PartialEq, Eq)]
pub enum HeaderError {
    /// A header line contained no ':' separator.
    Malformed,
}

/// Ordered HTTP header map.
///
/// Entries preserve insertion order and names are compared case-sensitively
/// as parsed; no normalization is applied. Lookup of a missing name yields
/// `None`, never a default.
#[derive(Debug, Clone, Default)]
pub struct HttpHeaders {
    entries: IndexMap<String, String>,
}

impl HttpHeaders {
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Parses `Name: value` lines, stopping at the first empty line.
    ///
    /// Lines past the blank separator are never consumed; the body begins
    /// there. A line with no ':' is a parse failure, not skipped.
    pub fn parse<'a, I>(lines: I) -> Result<Self, HeaderError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut headers = Self::new();

        for line in lines {
            if line.is_empty() {
                break;
            }

            let (name, value) = line.split_once(':').ok_or(HeaderError::Malformed)?;
            headers.insert(name.trim(), value.trim());
        }

        Ok(headers)
    }

    pub fn insert(&mut self, name: &str, value: &str) {
        self.entries.insert(name.to_string(), value.to_string());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(|v| v.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
