use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;

use crate::config::Config;
use crate::handler::auth::InMemoryUserStore;
use crate::handler::resolver::StaticFileResolver;
use crate::handler::router::RequestHandler;
use crate::http::connection::Connection;
use crate::session::SessionManager;

pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let listener = TcpListener::bind(&cfg.server.listen_addr).await?;
    info!("Listening on {}", cfg.server.listen_addr);

    let handler = Arc::new(RequestHandler::new(
        StaticFileResolver::new(cfg.static_files.root.clone()),
        InMemoryUserStore::with_defaults(),
        SessionManager::create(),
    ));

    loop {
        let (socket, peer) = listener.accept().await?;
        info!("Accepted connection from {}", peer);

        let handler = handler.clone();
        tokio::spawn(async move {
            let mut conn = Connection::new(socket, handler);
            if let Err(e) = conn.run().await {
                tracing::error!("Connection error from {}: {}", peer, e);
            }
        });
    }
}
