use std::collections::HashMap;

/// Represents a parsed HTTP request from a client.
///
/// Holds the request line's method and path plus every header line the
/// parser accepted. Lives for exactly one connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// The request method as sent (e.g. "GET"), or a `Method` header's value
    pub method: String,
    /// The request path as sent (e.g. "/index.html"), or a `Path` header's value
    pub path: String,
    /// Header name -> value, names case-sensitive as received.
    ///
    /// Values keep the space that follows the colon, so `User-Agent: abc`
    /// is stored as `" abc"`.
    pub headers: HashMap<String, String>,
}

/// Builder for constructing Request objects.
#[derive(Default)]
pub struct RequestBuilder {
    method: Option<String>,
    path: Option<String>,
    headers: HashMap<String, String>,
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    pub fn build(self) -> Result<Request, &'static str> {
        Ok(Request {
            method: self.method.ok_or("method missing")?,
            path: self.path.ok_or("path missing")?,
            headers: self.headers,
        })
    }
}

impl Request {
    /// Retrieves a header value by its exact, case-sensitive name.
    ///
    /// # Returns
    ///
    /// `Some(&str)` with the raw stored value if present, `None` otherwise.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers.get(key).map(|v| v.as_str())
    }

    /// The request path with its first character (normally the leading
    /// `/`) removed.
    ///
    /// This is the location looked up under the document root. No other
    /// normalization happens, `..` segments included. A `Path` header value
    /// such as `" /x"` loses its space and stays absolute.
    pub fn relative_path(&self) -> &str {
        let mut chars = self.path.chars();
        chars.next();
        chars.as_str()
    }
}
