use crate::{
    http::error::DispatchError,
    session::{DispatchRequest, MediaResponse},
};

#[derive(Debug, Clone)]
pub enum Event {
    // Events
    Initialize,
    PreferredBaseResolved(String),
    DispatchCompleted(Result<MediaResponse, DispatchError>),
    PlayerOpenFailed(String),

    // Commands
    Dispatch(DispatchRequest),
}
