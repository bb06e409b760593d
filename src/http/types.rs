use serde::Serialize;
use serde_json::Value;

use crate::{
    config::Endpoint,
    session::{DispatchRequest, MediaResponse},
};

use super::error::DispatchError;

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum DispatchBody<'a> {
    Search { input: &'a str, bitrate_kbps: u32 },
    Mp3 { youtube_url: &'a str, bitrate_kbps: u32 },
}

impl<'a> DispatchBody<'a> {
    pub fn new(request: &'a DispatchRequest) -> Self {
        match request.endpoint {
            Endpoint::Search => DispatchBody::Search {
                input: &request.query,
                bitrate_kbps: request.bitrate_kbps,
            },
            Endpoint::Mp3 => DispatchBody::Mp3 {
                youtube_url: &request.query,
                bitrate_kbps: request.bitrate_kbps,
            },
        }
    }
}

/// Only `download_url` is required; optional fields of the wrong type count as absent.
pub fn parse_media_response(base: &str, body: &str) -> Result<MediaResponse, DispatchError> {
    let value: Value = serde_json::from_str(body).map_err(|e| {
        DispatchError::MalformedResponse(format!("Malformed API response: {}", e))
    })?;

    let download_path = value
        .get("download_url")
        .and_then(Value::as_str)
        .filter(|path| !path.is_empty())
        .ok_or_else(|| {
            DispatchError::MalformedResponse(
                "Malformed API response: missing download_url".to_string(),
            )
        })?
        .to_string();

    let title = value
        .get("title")
        .and_then(Value::as_str)
        .or_else(|| {
            value
                .get("search_metadata")
                .and_then(|m| m.get("full_title"))
                .and_then(Value::as_str)
        })
        .unwrap_or_default()
        .to_string();

    let lyrics_text = value
        .get("lyrics_text")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    Ok(MediaResponse {
        playback_address: format!("{}{}", base, download_path),
        download_path,
        title,
        lyrics_text,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_falls_back_to_search_metadata() {
        let media = parse_media_response(
            "http://h:8000",
            r#"{"download_url":"/files/a.mp3","search_metadata":{"full_title":"Full"}}"#,
        )
        .unwrap();
        assert_eq!(media.title, "Full");
    }

    #[test]
    fn test_wrong_typed_optionals_are_tolerated() {
        let media = parse_media_response(
            "http://h:8000",
            r#"{"download_url":"/files/a.mp3","title":42,"lyrics_text":null}"#,
        )
        .unwrap();
        assert_eq!(media.title, "");
        assert_eq!(media.lyrics_text, "");
    }

    #[test]
    fn test_empty_or_non_string_download_url_is_malformed() {
        for body in [
            r#"{"download_url":""}"#,
            r#"{"download_url":7}"#,
            r#"[]"#,
        ] {
            let err = parse_media_response("http://h:8000", body).unwrap_err();
            assert!(matches!(err, DispatchError::MalformedResponse(_)), "{}", body);
        }
    }

    #[test]
    fn test_body_shapes() {
        let request = DispatchRequest {
            base: "http://h:8000".to_string(),
            query: "q".to_string(),
            endpoint: Endpoint::Search,
            bitrate_kbps: 192,
        };
        assert_eq!(
            serde_json::to_value(DispatchBody::new(&request)).unwrap(),
            serde_json::json!({ "input": "q", "bitrate_kbps": 192 })
        );
    }
}
