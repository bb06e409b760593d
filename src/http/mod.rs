pub mod error;
pub mod health;
pub mod types;

use reqwest::Client;
use tracing::{debug, info, warn};

use crate::{
    config::ClientConfig,
    session::{DispatchRequest, MediaResponse, SessionInput},
};

use self::{error::DispatchError, types::DispatchBody};

pub struct ApiService {
    client: Client,
    config: ClientConfig,
}

impl ApiService {
    pub fn new(config: ClientConfig) -> color_eyre::Result<Self> {
        let client = Client::builder().build()?;
        Ok(Self::with_client(client, config))
    }

    pub fn with_client(client: Client, config: ClientConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub async fn create_and_play(
        &self,
        input: &SessionInput,
    ) -> Result<MediaResponse, DispatchError> {
        let request = input.prepare(&self.config)?;
        self.dispatch(&request).await
    }

    /// Sends exactly one request for `request`; no retry and no timeout.
    pub async fn dispatch(
        &self,
        request: &DispatchRequest,
    ) -> Result<MediaResponse, DispatchError> {
        let url = request.url();
        info!("Dispatching {} to {}", request.endpoint, url);

        let response = self
            .client
            .post(&url)
            .json(&DispatchBody::new(request))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!("Dispatch to {} failed with {}", url, status);
            return Err(DispatchError::Network(format!(
                "API {}: {}",
                status.as_u16(),
                body
            )));
        }

        let media = types::parse_media_response(&request.base, &body)?;
        debug!("Playback address: {}", media.playback_address);
        Ok(media)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{Json, Router, http::StatusCode, routing::post};
    use serde_json::{Value, json};

    use super::*;
    use crate::{
        config::Endpoint,
        session::InputField,
        test_utils::{HitCounter, spawn_backend, test_api},
    };

    fn session(base: &str, query: &str) -> SessionInput {
        let mut input = SessionInput::new(base);
        input.push_str(InputField::Query, query);
        input
    }

    #[tokio::test]
    async fn test_successful_search() {
        let received = Arc::new(Mutex::new(None::<Value>));
        let router = Router::new().route(
            "/search",
            post({
                let received = received.clone();
                move |Json(body): Json<Value>| {
                    let received = received.clone();
                    async move {
                        *received.lock().unwrap() = Some(body);
                        Json(json!({
                            "download_url": "/files/abc.mp3",
                            "title": "T",
                            "lyrics_text": "L",
                        }))
                    }
                }
            }),
        );
        let base = spawn_backend(router).await;
        let api = test_api(ClientConfig::default());

        let media = api
            .create_and_play(&session(&format!("{}/", base), "rick astley"))
            .await
            .unwrap();

        assert_eq!(media.playback_address, format!("{}/files/abc.mp3", base));
        assert_eq!(media.download_path, "/files/abc.mp3");
        assert_eq!(media.title, "T");
        assert_eq!(media.lyrics_text, "L");

        let body = received.lock().unwrap().clone().unwrap();
        assert_eq!(body, json!({ "input": "rick astley", "bitrate_kbps": 192 }));
    }

    #[tokio::test]
    async fn test_legacy_mp3_body() {
        let received = Arc::new(Mutex::new(None::<Value>));
        let router = Router::new().route(
            "/mp3",
            post({
                let received = received.clone();
                move |Json(body): Json<Value>| {
                    let received = received.clone();
                    async move {
                        *received.lock().unwrap() = Some(body);
                        Json(json!({ "download_url": "/files/xyz.mp3" }))
                    }
                }
            }),
        );
        let base = spawn_backend(router).await;
        let api = test_api(ClientConfig {
            endpoint: Endpoint::Mp3,
            ..ClientConfig::default()
        });

        let media = api
            .create_and_play(&session(&base, "https://www.youtube.com/watch?v=OIxRRR3gS_E"))
            .await
            .unwrap();

        assert_eq!(media.playback_address, format!("{}/files/xyz.mp3", base));
        assert_eq!(media.title, "");
        assert_eq!(media.lyrics_text, "");

        let body = received.lock().unwrap().clone().unwrap();
        assert_eq!(
            body,
            json!({
                "youtube_url": "https://www.youtube.com/watch?v=OIxRRR3gS_E",
                "bitrate_kbps": 192,
            })
        );
    }

    #[tokio::test]
    async fn test_missing_download_url_is_malformed() {
        let router = Router::new().route(
            "/search",
            post(|| async { Json(json!({ "title": "T" })) }),
        );
        let base = spawn_backend(router).await;
        let api = test_api(ClientConfig::default());

        let err = api
            .create_and_play(&session(&base, "song"))
            .await
            .unwrap_err();

        assert!(matches!(err, DispatchError::MalformedResponse(_)));
        assert!(err.to_string().to_lowercase().contains("malformed"));
    }

    #[tokio::test]
    async fn test_non_json_body_is_malformed() {
        let router = Router::new().route("/search", post(|| async { "<html>oops</html>" }));
        let base = spawn_backend(router).await;
        let api = test_api(ClientConfig::default());

        let err = api
            .create_and_play(&session(&base, "song"))
            .await
            .unwrap_err();

        assert!(matches!(err, DispatchError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn test_non_2xx_carries_status_and_body() {
        let router = Router::new().route(
            "/search",
            post(|| async { (StatusCode::BAD_GATEWAY, "yt-dlp exploded") }),
        );
        let base = spawn_backend(router).await;
        let api = test_api(ClientConfig::default());

        let err = api
            .create_and_play(&session(&base, "song"))
            .await
            .unwrap_err();

        assert!(matches!(err, DispatchError::Network(_)));
        assert_eq!(err.to_string(), "API 502: yt-dlp exploded");
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_network_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let api = test_api(ClientConfig::default());
        let err = api
            .create_and_play(&session(&format!("http://{}", addr), "song"))
            .await
            .unwrap_err();

        assert!(matches!(err, DispatchError::Network(_)));
    }

    #[tokio::test]
    async fn test_invalid_input_never_reaches_network() {
        let hits = HitCounter::default();
        let router = Router::new().route(
            "/search",
            post({
                let hits = hits.clone();
                move || {
                    let hits = hits.clone();
                    async move {
                        hits.hit();
                        Json(json!({ "download_url": "/files/abc.mp3" }))
                    }
                }
            }),
        );
        let base = spawn_backend(router).await;
        let api = test_api(ClientConfig::default());

        let bad_base = base.trim_start_matches("http://").to_string();
        assert!(matches!(
            api.create_and_play(&session(&bad_base, "song")).await,
            Err(DispatchError::Validation(_))
        ));
        assert!(matches!(
            api.create_and_play(&session(&base, "   ")).await,
            Err(DispatchError::Validation(_))
        ));
        assert_eq!(hits.count(), 0);

        api.create_and_play(&session(&base, "song")).await.unwrap();
        assert_eq!(hits.count(), 1);
    }
}
