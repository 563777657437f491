use crate::http::request::Request;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// Bytes are not valid UTF-8
    InvalidEncoding,
    /// Request line is missing or does not hold exactly three tokens
    MalformedRequestLine,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::InvalidEncoding => write!(f, "request is not valid UTF-8"),
            ParseError::MalformedRequestLine => write!(f, "malformed request line"),
        }
    }
}

impl std::error::Error for ParseError {}

/// Parses the initial chunk read from a connection into a [`Request`].
///
/// The first line must be `METHOD PATH VERSION` (single spaces, exactly three
/// tokens; the version is discarded). Every following line containing `": "`
/// becomes a header, split on its first colon with the value left untrimmed.
/// Any other line is ignored. A `Method` or `Path` header overrides the
/// matching request-line token.
pub fn parse_http_request(buf: &[u8]) -> Result<Request, ParseError> {
    let text = std::str::from_utf8(buf).map_err(|_| ParseError::InvalidEncoding)?;

    let mut lines = text.lines();

    // Request line
    let request_line = lines.next().ok_or(ParseError::MalformedRequestLine)?.trim();
    let parts: Vec<&str> = request_line.split(' ').collect();

    let &[method, path, _version] = parts.as_slice() else {
        return Err(ParseError::MalformedRequestLine);
    };

    // Headers
    let mut headers = HashMap::new();

    for line in lines {
        if !line.contains(": ") {
            continue;
        }

        if let Some((key, value)) = line.split_once(':') {
            headers.insert(key.to_string(), value.to_string());
        }
    }

    // Request-line fields share one namespace with headers, so a client
    // header named `Method` or `Path` replaces them, value untrimmed.
    let method = headers.get("Method").map_or(method, |v| v.as_str()).to_string();
    let path = headers.get("Path").map_or(path, |v| v.as_str()).to_string();

    Ok(Request {
        method,
        path,
        headers,
    })
}
