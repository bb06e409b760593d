use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    config::{ClientConfig, Endpoint},
    http::error::DispatchError,
};

lazy_static! {
    static ref HTTP_URL: Regex = Regex::new(r"(?i)^https?://").unwrap();
}

/// Which of the two text inputs receives keystrokes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputField {
    ApiBase,
    #[default]
    Query,
}

impl InputField {
    pub fn toggle(&self) -> Self {
        match self {
            InputField::ApiBase => InputField::Query,
            InputField::Query => InputField::ApiBase,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchRequest {
    pub base: String,
    pub query: String,
    pub endpoint: Endpoint,
    pub bitrate_kbps: u32,
}

impl DispatchRequest {
    pub fn url(&self) -> String {
        format!("{}{}", self.base, self.endpoint.path())
    }
}

#[derive(Debug, Clone, Default)]
pub struct SessionInput {
    pub query: String,
    pub api_base: String,
    base_edited: bool,
}

impl SessionInput {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            query: String::new(),
            api_base: api_base.into(),
            base_edited: false,
        }
    }

    pub fn field(&self, field: InputField) -> &str {
        match field {
            InputField::ApiBase => &self.api_base,
            InputField::Query => &self.query,
        }
    }

    pub fn push_str(&mut self, field: InputField, text: &str) {
        match field {
            InputField::ApiBase => {
                self.api_base.push_str(text);
                self.base_edited = true;
            }
            InputField::Query => self.query.push_str(text),
        }
    }

    pub fn pop(&mut self, field: InputField) {
        match field {
            InputField::ApiBase => {
                self.api_base.pop();
                self.base_edited = true;
            }
            InputField::Query => {
                self.query.pop();
            }
        }
    }

    pub fn base_edited(&self) -> bool {
        self.base_edited
    }

    /// Seeds the base address from the health probe unless the user already typed one.
    pub fn adopt_preferred_base(&mut self, base: &str) -> bool {
        if self.base_edited {
            return false;
        }
        self.api_base = base.to_string();
        true
    }

    /// Validates both inputs and builds the request without touching the network.
    pub fn prepare(&self, config: &ClientConfig) -> Result<DispatchRequest, DispatchError> {
        let base = normalize_base(&self.api_base);
        if !is_http_url(&base) {
            return Err(DispatchError::Validation(format!(
                "Invalid API base, e.g. {}",
                config.local_base
            )));
        }

        let query = self.query.trim();
        match config.endpoint {
            Endpoint::Search if query.is_empty() => {
                return Err(DispatchError::Validation(
                    "Enter a song name, YouTube URL or video ID.".to_string(),
                ));
            }
            Endpoint::Mp3 if !is_http_url(query) => {
                return Err(DispatchError::Validation(
                    "Invalid URL, paste a full YouTube URL.".to_string(),
                ));
            }
            _ => {}
        }

        Ok(DispatchRequest {
            base,
            query: query.to_string(),
            endpoint: config.endpoint,
            bitrate_kbps: config.bitrate_kbps,
        })
    }
}

/// Trims whitespace and strips a single trailing slash.
pub fn normalize_base(base: &str) -> String {
    let base = base.trim();
    base.strip_suffix('/').unwrap_or(base).to_string()
}

pub fn is_http_url(value: &str) -> bool {
    HTTP_URL.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(base: &str, query: &str) -> SessionInput {
        let mut input = SessionInput::new(base);
        input.push_str(InputField::Query, query);
        input
    }

    #[test]
    fn test_normalize_strips_single_trailing_slash() {
        assert_eq!(normalize_base(" http://h:8000/ "), "http://h:8000");
        assert_eq!(normalize_base("http://h:8000//"), "http://h:8000/");
        assert_eq!(normalize_base("http://h:8000"), "http://h:8000");
    }

    #[test]
    fn test_non_url_bases_are_rejected() {
        let config = ClientConfig::default();
        for base in ["", "   ", "127.0.0.1:8000", "ftp://h", "htp://h", "localhost"] {
            let result = input(base, "never gonna give you up").prepare(&config);
            assert!(
                matches!(result, Err(DispatchError::Validation(_))),
                "base {:?} should be rejected",
                base
            );
        }
    }

    #[test]
    fn test_empty_queries_are_rejected() {
        let config = ClientConfig::default();
        for query in ["", "   ", "\t"] {
            let result = input("http://h:8000", query).prepare(&config);
            assert!(matches!(result, Err(DispatchError::Validation(_))));
        }
    }

    #[test]
    fn test_mp3_endpoint_requires_url_query() {
        let config = ClientConfig {
            endpoint: Endpoint::Mp3,
            ..ClientConfig::default()
        };
        assert!(input("http://h:8000", "just a title").prepare(&config).is_err());

        let request = input("http://h:8000", "https://www.youtube.com/watch?v=OIxRRR3gS_E")
            .prepare(&config)
            .unwrap();
        assert_eq!(request.url(), "http://h:8000/mp3");
    }

    #[test]
    fn test_prepare_builds_normalized_request() {
        let config = ClientConfig::default();
        let request = input("HTTPS://h:8000/", "  song  ").prepare(&config).unwrap();

        assert_eq!(request.base, "HTTPS://h:8000");
        assert_eq!(request.query, "song");
        assert_eq!(request.bitrate_kbps, 192);
        assert_eq!(request.url(), "HTTPS://h:8000/search");
    }

    #[test]
    fn test_preferred_base_only_seeds_untouched_field() {
        let mut input = SessionInput::new("http://127.0.0.1:8000");
        assert!(input.adopt_preferred_base("https://public.example"));
        assert_eq!(input.api_base, "https://public.example");

        input.pop(InputField::ApiBase);
        assert!(input.base_edited());
        assert!(!input.adopt_preferred_base("http://127.0.0.1:8000"));
        assert_eq!(input.api_base, "https://public.exampl");
    }
}
