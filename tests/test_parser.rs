use static_forbid_server::http::connection::REQUEST_BUFFER_SIZE;
use static_forbid_server::http::parser::{ParseError, parse_http_request};

#[test]
fn test_parse_simple_get_request() {
    let req = b"GET / HTTP/1.1\r\nHost: example.com\r\n\r\n";
    let parsed = parse_http_request(req).unwrap();

    assert_eq!(parsed.method, "GET");
    assert_eq!(parsed.path, "/");
    assert_eq!(parsed.headers.get("Host").unwrap(), " example.com");
}

#[test]
fn test_parse_keeps_leading_space_in_value() {
    let req = b"GET / HTTP/1.1\r\nUser-Agent: test-client\r\n\r\n";
    let parsed = parse_http_request(req).unwrap();

    assert_eq!(parsed.header("User-Agent"), Some(" test-client"));
}

#[test]
fn test_parse_splits_on_first_colon_only() {
    let req = b"GET / HTTP/1.1\r\nHost: 127.0.0.1:8080\r\n\r\n";
    let parsed = parse_http_request(req).unwrap();

    assert_eq!(parsed.header("Host"), Some(" 127.0.0.1:8080"));
}

#[test]
fn test_parse_ignores_lines_without_colon_space() {
    let req = b"GET / HTTP/1.1\r\nBrokenHeader\r\nX-Tight:value\r\nAccept: */*\r\n\r\n";
    let parsed = parse_http_request(req).unwrap();

    assert_eq!(parsed.headers.len(), 1);
    assert_eq!(parsed.header("Accept"), Some(" */*"));
    assert!(parsed.header("X-Tight").is_none());
}

#[test]
fn test_parse_header_case_preservation() {
    let req = b"GET / HTTP/1.1\r\nContent-Type: application/json\r\n\r\n";
    let parsed = parse_http_request(req).unwrap();

    assert!(parsed.headers.contains_key("Content-Type"));
    assert!(!parsed.headers.contains_key("content-type"));
}

#[test]
fn test_parse_accepts_bare_newlines() {
    let req = b"GET /index.html HTTP/1.1\nUser-Agent: x\n\n";
    let parsed = parse_http_request(req).unwrap();

    assert_eq!(parsed.path, "/index.html");
    assert_eq!(parsed.header("User-Agent"), Some(" x"));
}

#[test]
fn test_parse_any_method_is_accepted() {
    let parsed = parse_http_request(b"BREW /pot HTTP/1.1\r\n\r\n").unwrap();

    assert_eq!(parsed.method, "BREW");
    assert_eq!(parsed.path, "/pot");
}

#[test]
fn test_parse_query_string_stays_in_path() {
    let parsed = parse_http_request(b"GET /search?q=rust HTTP/1.1\r\n\r\n").unwrap();

    assert_eq!(parsed.path, "/search?q=rust");
}

#[test]
fn test_parse_request_line_with_two_tokens() {
    let result = parse_http_request(b"GET /\r\nUser-Agent: x\r\n\r\n");

    assert!(matches!(result, Err(ParseError::MalformedRequestLine)));
}

#[test]
fn test_parse_request_line_with_four_tokens() {
    let result = parse_http_request(b"GET / HTTP/1.1 extra\r\n\r\n");

    assert!(matches!(result, Err(ParseError::MalformedRequestLine)));
}

#[test]
fn test_parse_request_line_with_double_space() {
    let result = parse_http_request(b"GET  / HTTP/1.1\r\n\r\n");

    assert!(matches!(result, Err(ParseError::MalformedRequestLine)));
}

#[test]
fn test_parse_invalid_utf8() {
    let result = parse_http_request(b"GET /\xff HTTP/1.1\r\n\r\n");

    assert!(matches!(result, Err(ParseError::InvalidEncoding)));
}

#[test]
fn test_parse_path_header_overrides_request_line() {
    let parsed =
        parse_http_request(b"GET /a HTTP/1.1\r\nPath: /secret.html\r\n\r\n").unwrap();

    assert_eq!(parsed.path, " /secret.html");
    assert_eq!(parsed.relative_path(), "/secret.html");
}

#[test]
fn test_parse_method_header_overrides_request_line() {
    let parsed = parse_http_request(b"GET /a HTTP/1.1\r\nMethod: POST\r\n\r\n").unwrap();

    assert_eq!(parsed.method, " POST");
    assert_eq!(parsed.path, "/a");
}

#[test]
fn test_relative_path_drops_leading_slash() {
    let parsed = parse_http_request(b"GET /sub/page.html HTTP/1.1\r\n\r\n").unwrap();

    assert_eq!(parsed.relative_path(), "sub/page.html");
}

#[test]
fn test_parse_multibyte_char_cut_at_read_limit() {
    let mut raw = b"GET / HTTP/1.1\r\nX-Pad: ".to_vec();
    raw.resize(REQUEST_BUFFER_SIZE - 1, b'a');
    raw.extend_from_slice("é".as_bytes());

    let result = parse_http_request(&raw[..REQUEST_BUFFER_SIZE]);

    assert!(matches!(result, Err(ParseError::InvalidEncoding)));
}
