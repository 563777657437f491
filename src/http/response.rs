/// HTTP status codes the server can answer with.
///
/// - `Ok` (200): the requested file exists
/// - `NotFound` (404): no regular file at the requested path
/// - `Forbidden` (403): the User-Agent guard rejected the request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 404 Not Found
    NotFound,
    /// 403 Forbid
    Forbidden,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use static_forbid_server::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::Forbidden.as_u16(), 403);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::NotFound => 404,
            StatusCode::Forbidden => 403,
        }
    }

    /// Returns the reason phrase sent on the status line.
    ///
    /// 403 goes out as `Forbid`, not the standard `Forbidden`.
    ///
    /// # Example
    ///
    /// ```
    /// # use static_forbid_server::http::response::StatusCode;
    /// assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
    /// assert_eq!(StatusCode::Forbidden.reason_phrase(), "Forbid");
    /// ```
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::NotFound => "Not Found",
            StatusCode::Forbidden => "Forbid",
        }
    }
}

/// The fixed, ordered header set written on every response.
///
/// Built once from configuration and only ever read afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseHeaders {
    entries: Vec<(String, String)>,
}

impl ResponseHeaders {
    pub fn new<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Iterates `(name, value)` pairs in configured order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ResponseHeaders {
    fn default() -> Self {
        Self::new([
            ("Server", "my_server"),
            ("Content-Type", "text/html; charset=utf-8"),
        ])
    }
}
