//! Server configuration.
//!
//! Built-in defaults, optionally overlaid by a YAML file named in
//! `SERVER_CONFIG`, then by the `PORT` and `DOCUMENT_ROOT` env vars.

use std::path::PathBuf;

use anyhow::Context;
use serde::Deserialize;

use crate::http::response::ResponseHeaders;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_DOCUMENT_ROOT: &str = "static";
pub const DEFAULT_NOT_FOUND_PAGE: &str = "404.html";

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub static_files: StaticFilesConfig,
    pub response_headers: ResponseHeaders,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticFilesConfig {
    /// Directory every request path is resolved against
    pub root: PathBuf,
    /// Page served with 404, relative to `root`
    pub not_found_page: PathBuf,
}

/// On-disk shape of the YAML file. Every section is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    server: Option<FileServer>,
    static_files: Option<FileStaticFiles>,
    response_headers: Option<Vec<FileHeader>>,
}

#[derive(Debug, Deserialize)]
struct FileServer {
    port: Option<u16>,
}

#[derive(Debug, Deserialize)]
struct FileStaticFiles {
    root: Option<PathBuf>,
    not_found_page: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
struct FileHeader {
    name: String,
    value: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig { port: DEFAULT_PORT },
            static_files: StaticFilesConfig {
                root: PathBuf::from(DEFAULT_DOCUMENT_ROOT),
                not_found_page: PathBuf::from(DEFAULT_NOT_FOUND_PAGE),
            },
            response_headers: ResponseHeaders::default(),
        }
    }
}

impl Config {
    /// Loads configuration from the process environment.
    pub fn load() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration, reading variables through `lookup` instead of
    /// the process environment.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = match lookup("SERVER_CONFIG") {
            Some(path) => {
                let text = std::fs::read_to_string(&path)
                    .with_context(|| format!("failed to read config file {}", path))?;
                Self::from_yaml(&text)
                    .with_context(|| format!("invalid config file {}", path))?
            }
            None => Self::default(),
        };

        if let Some(port) = lookup("PORT") {
            cfg.server.port = port
                .trim()
                .parse()
                .with_context(|| format!("invalid PORT value {:?}", port))?;
        }

        if let Some(root) = lookup("DOCUMENT_ROOT") {
            cfg.static_files.root = PathBuf::from(root);
        }

        Ok(cfg)
    }

    /// Parses a YAML document on top of the defaults.
    pub fn from_yaml(text: &str) -> anyhow::Result<Self> {
        let file: FileConfig = serde_yaml::from_str(text)?;
        let mut cfg = Self::default();

        if let Some(port) = file.server.and_then(|s| s.port) {
            cfg.server.port = port;
        }

        if let Some(static_files) = file.static_files {
            if let Some(root) = static_files.root {
                cfg.static_files.root = root;
            }
            if let Some(page) = static_files.not_found_page {
                cfg.static_files.not_found_page = page;
            }
        }

        if let Some(headers) = file.response_headers {
            cfg.response_headers =
                ResponseHeaders::new(headers.into_iter().map(|h| (h.name, h.value)));
        }

        Ok(cfg)
    }
}
