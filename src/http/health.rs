use tracing::{debug, info};

use super::ApiService;

impl ApiService {
    /// Probes `{local}/health` within the configured timeout and picks the base to prefer.
    ///
    /// Any 2xx selects the local backend; errors, other statuses and timeouts fall back to
    /// the public one. The result is advisory and never gates a dispatch.
    pub async fn resolve_preferred_base(&self) -> String {
        let config = self.config();
        let url = format!("{}/health", config.local_base.trim_end_matches('/'));

        let probe = self.client.get(&url).send();
        let healthy = match tokio::time::timeout(config.health_timeout, probe).await {
            Ok(Ok(response)) => response.status().is_success(),
            Ok(Err(e)) => {
                debug!("Health probe to {} failed: {}", url, e);
                false
            }
            Err(_) => {
                debug!("Health probe to {} timed out", url);
                false
            }
        };

        let base = if healthy {
            config.local_base.clone()
        } else {
            config.public_base.clone()
        };
        info!("Preferred API base: {}", base);
        base
    }
}
