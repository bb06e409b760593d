use std::{fmt, str::FromStr, time::Duration};

use color_eyre::eyre::{WrapErr, eyre};

pub const DEFAULT_LOCAL_BASE: &str = "http://127.0.0.1:8000";
pub const DEFAULT_PUBLIC_BASE: &str = "https://mixterious.example.com";
pub const DEFAULT_BITRATE_KBPS: u32 = 192;
pub const DEFAULT_HEALTH_TIMEOUT: Duration = Duration::from_millis(1200);

/// Backend route a dispatch is sent to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Endpoint {
    /// `POST /search`, accepts a URL, video id or free-text query.
    #[default]
    Search,
    /// `POST /mp3`, the legacy route that only accepts a full YouTube URL.
    Mp3,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Search => "/search",
            Endpoint::Mp3 => "/mp3",
        }
    }

    pub fn query_label(&self) -> &'static str {
        match self {
            Endpoint::Search => "Song, YouTube URL or video ID",
            Endpoint::Mp3 => "YouTube URL",
        }
    }
}

impl FromStr for Endpoint {
    type Err = color_eyre::Report;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "search" => Ok(Endpoint::Search),
            "mp3" => Ok(Endpoint::Mp3),
            other => Err(eyre!("Unknown endpoint '{}', expected 'search' or 'mp3'", other)),
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Search => write!(f, "search"),
            Endpoint::Mp3 => write!(f, "mp3"),
        }
    }
}

/// Everything the dispatcher and health probe need to know about the backend.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub local_base: String,
    pub public_base: String,
    pub endpoint: Endpoint,
    pub bitrate_kbps: u32,
    pub health_timeout: Duration,
    pub probe_health: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            local_base: DEFAULT_LOCAL_BASE.to_string(),
            public_base: DEFAULT_PUBLIC_BASE.to_string(),
            endpoint: Endpoint::default(),
            bitrate_kbps: DEFAULT_BITRATE_KBPS,
            health_timeout: DEFAULT_HEALTH_TIMEOUT,
            probe_health: true,
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> color_eyre::Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    pub fn from_vars<F>(lookup: F) -> color_eyre::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(base) = lookup("MIXTERIOUS_API_BASE") {
            config.local_base = base;
        }
        if let Some(base) = lookup("MIXTERIOUS_PUBLIC_API_BASE") {
            config.public_base = base;
        }
        if let Some(endpoint) = lookup("MIXTERIOUS_ENDPOINT") {
            config.endpoint = endpoint.parse()?;
        }
        if let Some(timeout) = lookup("MIXTERIOUS_HEALTH_TIMEOUT_MS") {
            let millis = timeout
                .trim()
                .parse::<u64>()
                .wrap_err_with(|| format!("Invalid MIXTERIOUS_HEALTH_TIMEOUT_MS '{}'", timeout))?;
            config.health_timeout = Duration::from_millis(millis);
        }
        if let Some(probe) = lookup("MIXTERIOUS_HEALTH_PROBE") {
            config.probe_health = probe
                .trim()
                .parse::<bool>()
                .wrap_err_with(|| format!("Invalid MIXTERIOUS_HEALTH_PROBE '{}'", probe))?;
        }

        Ok(config)
    }
}
