use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use axum::Router;

use crate::{config::ClientConfig, http::ApiService};

/// Serves `router` on an ephemeral localhost port and returns its base address.
pub async fn spawn_backend(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://{}", addr)
}

pub fn test_api(config: ClientConfig) -> ApiService {
    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    ApiService::with_client(client, config)
}

#[derive(Clone, Default)]
pub struct HitCounter(Arc<AtomicUsize>);

impl HitCounter {
    pub fn hit(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }

    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}
