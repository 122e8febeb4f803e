use crate::http::headers::{HeaderError, HttpHeaders};
use crate::http::request::{Method, Request};
use crate::http::target::{RequestTarget, TargetError};

#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    InvalidRequest,
    InvalidMethod,
    InvalidTarget,
    InvalidHeader,
    InvalidContentLength,
    Incomplete,
}

impl From<TargetError> for ParseError {
    fn from(_: TargetError) -> Self {
        ParseError::InvalidTarget
    }
}

impl From<HeaderError> for ParseError {
    fn from(_: HeaderError) -> Self {
        ParseError::InvalidHeader
    }
}

/// Parses one HTTP/1.1 request from the front of `buf`.
///
/// Returns the request together with the number of bytes consumed so the
/// caller can drain its read buffer. Both CRLF and bare LF line endings are
/// accepted. `Incomplete` means more bytes are needed, every other error is
/// a malformed request.
pub fn parse_request(buf: &[u8]) -> Result<(Request, usize), ParseError> {
    // Head section ends at the first blank line
    let (head_end, sep_len) = find_head_end(buf).ok_or(ParseError::Incomplete)?;
    let head_bytes = &buf[..head_end];
    let body_bytes = &buf[head_end + sep_len..];

    let head_str = std::str::from_utf8(head_bytes).map_err(|_| ParseError::InvalidRequest)?;

    let mut lines = head_str.lines();

    // Request line: METHOD SP target SP version
    let request_line = lines.next().ok_or(ParseError::InvalidRequest)?;
    let mut parts = request_line.split_whitespace();

    let method_str = parts.next().ok_or(ParseError::InvalidRequest)?;
    let target_str = parts.next().ok_or(ParseError::InvalidRequest)?;
    let version = parts.next().ok_or(ParseError::InvalidRequest)?;

    let method = Method::from_str(method_str).ok_or(ParseError::InvalidMethod)?;
    let target = RequestTarget::parse(target_str)?;
    let headers = HttpHeaders::parse(lines)?;

    // Body: exactly Content-Length bytes when declared, absent otherwise
    let content_length = headers
        .get("Content-Length")
        .map(|v| v.parse::<usize>().map_err(|_| ParseError::InvalidContentLength))
        .transpose()?;

    let (body, body_len) = match content_length {
        Some(len) => {
            if body_bytes.len() < len {
                return Err(ParseError::Incomplete);
            }
            (Some(body_bytes[..len].to_vec()), len)
        }
        None => (None, 0),
    };

    let request = Request {
        method,
        target,
        version: version.to_string(),
        headers,
        body,
    };

    let consumed = head_end + sep_len + body_len;
    Ok((request, consumed))
}

/// Locates the blank line terminating the head section.
///
/// Returns the offset of the separator and its length, handling both
/// `\r\n\r\n` and `\n\n`.
fn find_head_end(buf: &[u8]) -> Option<(usize, usize)> {
    let crlf = buf.windows(4).position(|w| w == b"\r\n\r\n");
    let lf = buf.windows(2).position(|w| w == b"\n\n");

    match (crlf, lf) {
        (Some(c), Some(l)) if l < c => Some((l, 2)),
        (Some(c), _) => Some((c, 4)),
        (None, Some(l)) => Some((l, 2)),
        (None, None) => None,
    }
}
