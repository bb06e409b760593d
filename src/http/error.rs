use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DispatchError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Network(String),

    #[error("{0}")]
    MalformedResponse(String),
}

impl DispatchError {
    pub fn alert_title(&self) -> &'static str {
        match self {
            DispatchError::Validation(_) => "Invalid input",
            DispatchError::Network(_) | DispatchError::MalformedResponse(_) => "Error",
        }
    }
}

impl From<reqwest::Error> for DispatchError {
    fn from(e: reqwest::Error) -> Self {
        DispatchError::Network(e.to_string())
    }
}
