use std::sync::Arc;

use bytes::{Bytes, BytesMut};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::net::TcpStream;

use crate::http::error::ConnectionError;
use crate::http::parser::parse_http_request;
use crate::http::request::Request;
use crate::http::response::StatusCode;
use crate::http::site::Site;
use crate::http::writer::ResponseWriter;

/// Only the first read is parsed; anything past it is never looked at.
pub const REQUEST_BUFFER_SIZE: usize = 1024;

pub struct Connection<S = TcpStream> {
    stream: S,
    site: Arc<Site>,
    state: ConnectionState,
}

pub enum ConnectionState {
    Accepted,
    Parsed(Request),
    StatusDecided(Request, StatusCode),
    HeadersSent(Request, StatusCode),
    BodySent,
    Closed,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, site: Arc<Site>) -> Self {
        Self {
            stream,
            site,
            state: ConnectionState::Accepted,
        }
    }

    /// Drives the connection from accept to close, exactly once.
    ///
    /// Any error leaves the remaining states unvisited; the caller drops the
    /// stream, so a failure before `HeadersSent` means no response bytes.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match std::mem::replace(&mut self.state, ConnectionState::Closed) {
                ConnectionState::Accepted => match self.read_request().await? {
                    Some(buf) => {
                        let req = parse_http_request(&buf).map_err(ConnectionError::from)?;
                        tracing::debug!(method = %req.method, path = %req.path, "Parsed request");
                        self.state = ConnectionState::Parsed(req);
                    }
                    None => {
                        tracing::debug!("Client closed before sending a request");
                        self.state = ConnectionState::Closed;
                    }
                },

                ConnectionState::Parsed(req) => {
                    let status = self.site.decide(&req).await?;
                    tracing::debug!(status = status.as_u16(), path = %req.path, "Status decided");
                    self.state = ConnectionState::StatusDecided(req, status);
                }

                ConnectionState::StatusDecided(req, status) => {
                    ResponseWriter::head(status, self.site.response_headers())
                        .write_to_stream(&mut self.stream)
                        .await
                        .map_err(ConnectionError::from)?;
                    self.state = ConnectionState::HeadersSent(req, status);
                }

                ConnectionState::HeadersSent(req, status) => {
                    let body = self.site.body(status, &req).await?;
                    ResponseWriter::new(body)
                        .write_to_stream(&mut self.stream)
                        .await
                        .map_err(ConnectionError::from)?;
                    self.state = ConnectionState::BodySent;
                }

                ConnectionState::BodySent => {
                    // Peer may already be gone; the response is out either way.
                    let _ = self.stream.shutdown().await;
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }

    /// Reads the single initial chunk. `None` when the peer sent nothing.
    pub async fn read_request(&mut self) -> Result<Option<Bytes>, ConnectionError> {
        let mut buf = BytesMut::zeroed(REQUEST_BUFFER_SIZE);
        let n = self.stream.read(&mut buf).await?;

        if n == 0 {
            return Ok(None);
        }

        buf.truncate(n);
        Ok(Some(buf.freeze()))
    }
}
