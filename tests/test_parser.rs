use porter::http::parser::{ParseError, parse_request};
use porter::http::request::Method;

#[test]
fn test_parse_simple_get_request() {
    let req = b"GET / HTTP/1.1\r\nHost: example.com\r\n\r\n";
    let (parsed, consumed) = parse_request(req).unwrap();

    assert_eq!(parsed.method, Method::GET);
    assert_eq!(parsed.path(), "/");
    assert_eq!(parsed.version, "HTTP/1.1");
    assert_eq!(parsed.headers.get("Host").unwrap(), "example.com");
    assert_eq!(consumed, req.len());
}

#[test]
fn test_parse_post_request_with_body() {
    let req = b"POST /api HTTP/1.1\r\nHost: localhost\r\nContent-Length: 5\r\n\r\nhello";
    let (parsed, consumed) = parse_request(req).unwrap();

    assert_eq!(parsed.method, Method::POST);
    assert_eq!(parsed.path(), "/api");
    assert_eq!(parsed.body, Some(b"hello".to_vec()));
    assert_eq!(consumed, req.len());
}

#[test]
fn test_parse_multiple_headers() {
    let req = b"GET /path HTTP/1.1\r\nHost: example.com\r\nUser-Agent: test-client\r\nAccept: */*\r\n\r\n";
    let (parsed, _) = parse_request(req).unwrap();

    assert_eq!(parsed.headers.get("Host").unwrap(), "example.com");
    assert_eq!(parsed.headers.get("User-Agent").unwrap(), "test-client");
    assert_eq!(parsed.headers.get("Accept").unwrap(), "*/*");
}

#[test]
fn test_parse_request_with_query_string() {
    let req = b"GET /search?q=rust HTTP/1.1\r\nHost: example.com\r\n\r\n";
    let (parsed, _) = parse_request(req).unwrap();

    assert_eq!(parsed.path(), "/search");
    assert_eq!(parsed.query_param("q"), Some("rust"));
}

#[test]
fn test_parse_accepts_bare_lf_line_endings() {
    let req = b"GET /index.html HTTP/1.1\nHost: localhost\n\n";
    let (parsed, consumed) = parse_request(req).unwrap();

    assert_eq!(parsed.path(), "/index.html");
    assert_eq!(parsed.headers.get("Host").unwrap(), "localhost");
    assert_eq!(consumed, req.len());
}

#[test]
fn test_parse_incomplete_request_missing_blank_line() {
    let req = b"GET / HTTP/1.1\r\nHost: example.com\r\n";
    let result = parse_request(req);

    assert!(matches!(result, Err(ParseError::Incomplete)));
}

#[test]
fn test_parse_incomplete_request_partial_body() {
    let req = b"POST /api HTTP/1.1\r\nContent-Length: 10\r\n\r\nhello";
    let result = parse_request(req);

    assert!(matches!(result, Err(ParseError::Incomplete)));
}

#[test]
fn test_parse_invalid_http_method() {
    let req = b"INVALID / HTTP/1.1\r\n\r\n";
    let result = parse_request(req);

    assert!(matches!(result, Err(ParseError::InvalidMethod)));
}

#[test]
fn test_parse_request_line_with_too_few_tokens() {
    let req = b"GET /\r\n\r\n";
    let result = parse_request(req);

    assert!(matches!(result, Err(ParseError::InvalidRequest)));
}

#[test]
fn test_parse_target_without_leading_slash() {
    let req = b"GET index.html HTTP/1.1\r\n\r\n";
    let result = parse_request(req);

    assert!(matches!(result, Err(ParseError::InvalidTarget)));
}

#[test]
fn test_parse_malformed_header() {
    let req = b"GET / HTTP/1.1\r\nBrokenHeader\r\n\r\n";
    let result = parse_request(req);

    assert!(matches!(result, Err(ParseError::InvalidHeader)));
}

#[test]
fn test_parse_non_numeric_content_length() {
    let req = b"POST /api HTTP/1.1\r\nContent-Length: many\r\n\r\n";
    let result = parse_request(req);

    assert!(matches!(result, Err(ParseError::InvalidContentLength)));
}

#[test]
fn test_parse_various_http_methods() {
    let methods = vec![
        ("GET", Method::GET),
        ("POST", Method::POST),
        ("PUT", Method::PUT),
        ("DELETE", Method::DELETE),
        ("HEAD", Method::HEAD),
        ("OPTIONS", Method::OPTIONS),
        ("PATCH", Method::PATCH),
    ];

    for (method_str, expected_method) in methods {
        let req = format!("{} / HTTP/1.1\r\n\r\n", method_str);
        let (parsed, _) = parse_request(req.as_bytes()).unwrap();
        assert_eq!(parsed.method, expected_method);
    }
}

#[test]
fn test_parse_request_with_zero_content_length() {
    let req = b"POST /api HTTP/1.1\r\nContent-Length: 0\r\n\r\n";
    let (parsed, _) = parse_request(req).unwrap();

    assert_eq!(parsed.body, Some(Vec::new()));
}

#[test]
fn test_parse_without_content_length_has_no_body() {
    let req = b"GET / HTTP/1.1\r\nHost: localhost\r\n\r\n";
    let (parsed, _) = parse_request(req).unwrap();

    assert_eq!(parsed.body, None);
}

#[test]
fn test_parse_body_captures_exactly_content_length_bytes() {
    let req = b"POST /api HTTP/1.1\r\nContent-Length: 5\r\n\r\nhelloEXTRA";
    let (parsed, consumed) = parse_request(req).unwrap();

    assert_eq!(parsed.body, Some(b"hello".to_vec()));
    assert_eq!(consumed, req.len() - "EXTRA".len());
}

#[test]
fn test_parse_body_length_matches_declared_content_length() {
    let body = "account=gugu&password=password";
    let req = format!(
        "POST /login HTTP/1.1\r\nContent-Length: {}\r\n\r\n{}",
        body.len(),
        body
    );
    let (parsed, _) = parse_request(req.as_bytes()).unwrap();

    assert_eq!(parsed.body.as_ref().unwrap().len(), parsed.content_length());
}
