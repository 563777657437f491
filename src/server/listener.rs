use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::net::{TcpListener, TcpSocket};
use tracing::info;

use crate::config::Config;
use crate::http::connection::Connection;
use crate::http::site::Site;

/// Pending-connection queue length passed to `listen`.
pub const BACKLOG: u32 = 5;

/// Pause after a failed accept so a persistent error (EMFILE) does not spin.
pub const ACCEPT_RETRY_DELAY: Duration = Duration::from_millis(100);

/// Binds a listening socket on all interfaces with address reuse enabled.
pub fn bind(port: u16) -> anyhow::Result<TcpListener> {
    let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, port));

    let socket = TcpSocket::new_v4()?;
    socket.set_reuseaddr(true)?;
    socket
        .bind(addr)
        .with_context(|| format!("failed to bind {}", addr))?;

    let listener = socket.listen(BACKLOG)?;
    info!("Listening on {}", listener.local_addr()?);

    Ok(listener)
}

/// Accepts forever, one task per connection.
///
/// Each task owns its socket outright; the loop keeps no handle to it.
pub async fn serve(listener: TcpListener, site: Arc<Site>) -> anyhow::Result<()> {
    loop {
        let (socket, peer) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(e) => {
                tracing::warn!("Accept failed: {}", e);
                tokio::time::sleep(ACCEPT_RETRY_DELAY).await;
                continue;
            }
        };
        info!("Accepted connection from {}", peer);

        let site = Arc::clone(&site);
        tokio::spawn(async move {
            let mut conn = Connection::new(socket, site);
            if let Err(e) = conn.run().await {
                tracing::error!("Connection error from {}: {}", peer, e);
            }
        });
    }
}

pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let listener = bind(cfg.server.port)?;
    let site = Arc::new(Site::from_config(cfg));
    info!(
        root = %cfg.static_files.root.display(),
        "Serving static files"
    );

    serve(listener, site).await
}
