//! Integration tests for the geodist node
//!
//! `rest_api` checks the JSON shapes of the API, `rest_handlers` runs a
//! live node on an ephemeral port and talks to it over HTTP.

mod rest_handlers;

use std::sync::Arc;

use geodist_core::NodeConfig;
use geodist_node::client::DistanceClient;
use geodist_node::AppState;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// A node serving on 127.0.0.1; stops when dropped
pub struct TestNode {
    pub base_url: String,
    _shutdown: oneshot::Sender<()>,
}

impl TestNode {
    pub fn client(&self) -> DistanceClient {
        DistanceClient::new(self.base_url.clone()).expect("client")
    }
}

pub async fn spawn_node() -> TestNode {
    let mut config = NodeConfig::default();
    config.server.host = "127.0.0.1".to_string();
    config.server.port = 0;

    let listener = TcpListener::bind(config.bind_address()).await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    let (tx, rx) = oneshot::channel::<()>();

    let state = Arc::new(AppState::new(config));
    tokio::spawn(async move {
        let _ = geodist_node::serve(listener, state, async move {
            let _ = rx.await;
        })
        .await;
    });

    TestNode {
        base_url: format!("http://{}", addr),
        _shutdown: tx,
    }
}
