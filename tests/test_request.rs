use porter::http::request::{Method, RequestBuilder};

#[test]
fn test_request_header_retrieval() {
    let req = RequestBuilder::new()
        .method(Method::GET)
        .target("/")
        .header("Host", "example.com")
        .header("Content-Type", "application/json")
        .build()
        .unwrap();

    assert_eq!(req.header("Host"), Some("example.com"));
    assert_eq!(req.header("Content-Type"), Some("application/json"));
    assert_eq!(req.header("Missing"), None);
}

#[test]
fn test_request_content_length_parsing() {
    let req = RequestBuilder::new()
        .method(Method::POST)
        .target("/api")
        .header("Content-Length", "42")
        .build()
        .unwrap();

    assert_eq!(req.content_length(), 42);
}

#[test]
fn test_request_content_length_missing() {
    let req = RequestBuilder::new()
        .method(Method::GET)
        .target("/")
        .build()
        .unwrap();

    assert_eq!(req.content_length(), 0);
}

#[test]
fn test_request_content_length_invalid() {
    let req = RequestBuilder::new()
        .method(Method::POST)
        .target("/api")
        .header("Content-Length", "not-a-number")
        .build()
        .unwrap();

    assert_eq!(req.content_length(), 0);
}

#[test]
fn test_request_query_accessors() {
    let req = RequestBuilder::new()
        .method(Method::GET)
        .target("/login?account=gugu&password=password")
        .build()
        .unwrap();

    assert!(req.has_query_params());
    assert_eq!(req.query_param("account"), Some("gugu"));
    assert_eq!(req.query_param("password"), Some("password"));
    assert_eq!(req.query_param("missing"), None);
}

#[test]
fn test_session_id_from_cookie_header() {
    let req = RequestBuilder::new()
        .method(Method::GET)
        .target("/")
        .header("Cookie", "JSESSIONID=656cef62-e3c4-40bc-a8df-94732920ed46")
        .build()
        .unwrap();

    assert_eq!(
        req.session_id(),
        Some("656cef62-e3c4-40bc-a8df-94732920ed46")
    );
}

#[test]
fn test_session_id_among_other_cookies() {
    let req = RequestBuilder::new()
        .method(Method::GET)
        .target("/")
        .header("Cookie", "yummy_cookie=choco; tasty_cookie=strawberry; JSESSIONID=abc123")
        .build()
        .unwrap();

    assert_eq!(req.session_id(), Some("abc123"));
}

#[test]
fn test_session_id_absent_without_cookie_header() {
    let req = RequestBuilder::new()
        .method(Method::GET)
        .target("/")
        .build()
        .unwrap();

    assert_eq!(req.session_id(), None);
}

#[test]
fn test_session_id_absent_when_cookie_lacks_it() {
    let req = RequestBuilder::new()
        .method(Method::GET)
        .target("/")
        .header("Cookie", "yummy_cookie=choco")
        .build()
        .unwrap();

    assert_eq!(req.session_id(), None);
}

#[test]
fn test_form_params_from_body() {
    let req = RequestBuilder::new()
        .method(Method::POST)
        .target("/login")
        .body(b"account=gugu&password=password".to_vec())
        .build()
        .unwrap();

    let form = req.form_params();
    assert_eq!(form.get("account").unwrap(), "gugu");
    assert_eq!(form.get("password").unwrap(), "password");
}

#[test]
fn test_form_params_empty_without_body() {
    let req = RequestBuilder::new()
        .method(Method::GET)
        .target("/login")
        .build()
        .unwrap();

    assert!(req.form_params().is_empty());
}

#[test]
fn test_builder_defaults_version_to_http11() {
    let req = RequestBuilder::new()
        .method(Method::GET)
        .target("/")
        .build()
        .unwrap();

    assert_eq!(req.version, "HTTP/1.1");
}

#[test]
fn test_builder_requires_method_and_target() {
    assert!(RequestBuilder::new().target("/").build().is_err());
    assert!(RequestBuilder::new().method(Method::GET).build().is_err());
}
