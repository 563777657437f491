//! Status decision and body selection for the served document root.

use std::path::PathBuf;

use bytes::Bytes;

use crate::config::Config;
use crate::http::error::ConnectionError;
use crate::http::request::Request;
use crate::http::response::{ResponseHeaders, StatusCode};

/// Shortest `User-Agent` value (in characters, leading space included)
/// that gets past the guard.
pub const USER_AGENT_MIN_LEN: usize = 60;

/// Body sent with every 403.
pub const FORBIDDEN_BODY: &[u8] = b"ForForForbid";

/// Base directory all request paths are resolved against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRoot {
    root: PathBuf,
    not_found_page: PathBuf,
}

impl DocumentRoot {
    pub fn new(root: impl Into<PathBuf>, not_found_page: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            not_found_page: not_found_page.into(),
        }
    }

    /// Location of `request` on disk. `..` is not resolved or rejected.
    pub fn resolve(&self, request: &Request) -> PathBuf {
        self.root.join(request.relative_path())
    }

    pub fn not_found_page(&self) -> PathBuf {
        self.root.join(&self.not_found_page)
    }
}

/// Everything a connection needs to answer requests. Read-only once built.
#[derive(Debug, Clone)]
pub struct Site {
    document_root: DocumentRoot,
    response_headers: ResponseHeaders,
}

impl Site {
    pub fn new(document_root: DocumentRoot, response_headers: ResponseHeaders) -> Self {
        Self {
            document_root,
            response_headers,
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(
            DocumentRoot::new(
                &cfg.static_files.root,
                &cfg.static_files.not_found_page,
            ),
            cfg.response_headers.clone(),
        )
    }

    pub fn response_headers(&self) -> &ResponseHeaders {
        &self.response_headers
    }

    /// Computes the status for `request`.
    ///
    /// The User-Agent guard runs first and short-circuits to 403 without
    /// touching the filesystem. Only then is the resolved path checked:
    /// a regular file gives 200, anything else 404.
    pub async fn decide(&self, request: &Request) -> Result<StatusCode, ConnectionError> {
        if !passes_guard(request)? {
            return Ok(StatusCode::Forbidden);
        }

        let path = self.document_root.resolve(request);
        let is_file = tokio::fs::metadata(&path)
            .await
            .map(|m| m.is_file())
            .unwrap_or(false);

        tracing::debug!(path = %path.display(), is_file, "Resolved request path");

        if is_file {
            Ok(StatusCode::Ok)
        } else {
            Ok(StatusCode::NotFound)
        }
    }

    /// Loads the body that goes with `status`.
    pub async fn body(
        &self,
        status: StatusCode,
        request: &Request,
    ) -> Result<Bytes, ConnectionError> {
        let path = match status {
            StatusCode::Forbidden => return Ok(Bytes::from_static(FORBIDDEN_BODY)),
            StatusCode::Ok => self.document_root.resolve(request),
            StatusCode::NotFound => self.document_root.not_found_page(),
        };

        match tokio::fs::read(&path).await {
            Ok(contents) => Ok(Bytes::from(contents)),
            Err(source) => Err(ConnectionError::BodyIo { path, source }),
        }
    }
}

/// The User-Agent guard.
///
/// A missing header is an error for the connection, not a 403.
pub fn passes_guard(request: &Request) -> Result<bool, ConnectionError> {
    let agent = request
        .header("User-Agent")
        .ok_or(ConnectionError::MissingRequiredHeader("User-Agent"))?;

    Ok(agent.chars().count() >= USER_AGENT_MIN_LEN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::request::RequestBuilder;

    fn request_with_agent(len: usize) -> Request {
        RequestBuilder::new()
            .method("GET")
            .path("/")
            .header("User-Agent", "a".repeat(len))
            .build()
            .unwrap()
    }

    #[test]
    fn guard_boundary() {
        assert!(!passes_guard(&request_with_agent(59)).unwrap());
        assert!(passes_guard(&request_with_agent(60)).unwrap());
    }

    #[test]
    fn guard_counts_characters_not_bytes() {
        let req = RequestBuilder::new()
            .method("GET")
            .path("/")
            .header("User-Agent", "é".repeat(59))
            .build()
            .unwrap();

        assert!(!passes_guard(&req).unwrap());
    }

    #[test]
    fn resolve_keeps_parent_segments() {
        let root = DocumentRoot::new("/srv/www", "404.html");
        let req = RequestBuilder::new()
            .method("GET")
            .path("/../etc/passwd")
            .build()
            .unwrap();

        assert_eq!(root.resolve(&req), PathBuf::from("/srv/www/../etc/passwd"));
        assert_eq!(root.not_found_page(), PathBuf::from("/srv/www/404.html"));
    }
}
