use crate::http::error::DispatchError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaResponse {
    pub download_path: String,
    pub title: String,
    pub lyrics_text: String,
    pub playback_address: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum DispatchStatus {
    #[default]
    Idle,
    InFlight,
    Succeeded,
    Failed(String),
}

#[derive(Debug, Clone, Default)]
pub struct DispatchState {
    status: DispatchStatus,
    media: Option<MediaResponse>,
}

impl DispatchState {
    pub fn status(&self) -> &DispatchStatus {
        &self.status
    }

    pub fn is_busy(&self) -> bool {
        self.status == DispatchStatus::InFlight
    }

    pub fn media(&self) -> Option<&MediaResponse> {
        self.media.as_ref()
    }

    pub fn playback_address(&self) -> Option<&str> {
        self.media.as_ref().map(|m| m.playback_address.as_str())
    }

    /// Enters `InFlight`, dropping the previous response. Refused while a dispatch is running.
    pub fn begin(&mut self) -> bool {
        if self.is_busy() {
            return false;
        }
        self.status = DispatchStatus::InFlight;
        self.media = None;
        true
    }

    /// Applies the outcome of a dispatch, returning the error for the alert if it failed.
    pub fn complete(
        &mut self,
        result: Result<MediaResponse, DispatchError>,
    ) -> Option<DispatchError> {
        match result {
            Ok(media) => {
                self.status = DispatchStatus::Succeeded;
                self.media = Some(media);
                None
            }
            Err(e) => {
                self.status = DispatchStatus::Failed(e.to_string());
                self.media = None;
                Some(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn media(path: &str) -> MediaResponse {
        MediaResponse {
            download_path: path.to_string(),
            title: String::new(),
            lyrics_text: String::new(),
            playback_address: format!("http://h:8000{}", path),
        }
    }

    #[test]
    fn test_success_transition() {
        let mut state = DispatchState::default();
        assert_eq!(state.status(), &DispatchStatus::Idle);

        assert!(state.begin());
        assert!(state.is_busy());
        assert!(state.complete(Ok(media("/files/abc.mp3"))).is_none());

        assert_eq!(state.status(), &DispatchStatus::Succeeded);
        assert_eq!(state.playback_address(), Some("http://h:8000/files/abc.mp3"));
    }

    #[test]
    fn test_begin_refused_while_in_flight() {
        let mut state = DispatchState::default();
        assert!(state.begin());
        assert!(!state.begin());
    }

    #[test]
    fn test_failure_leaves_playback_unset() {
        let mut state = DispatchState::default();
        state.begin();
        state.complete(Ok(media("/files/old.mp3")));

        assert!(state.begin());
        assert_eq!(state.playback_address(), None);

        let err = state
            .complete(Err(DispatchError::MalformedResponse(
                "Malformed API response".to_string(),
            )))
            .unwrap();
        assert_eq!(err.alert_title(), "Error");
        assert_eq!(
            state.status(),
            &DispatchStatus::Failed("Malformed API response".to_string())
        );
        assert_eq!(state.playback_address(), None);
    }

    #[test]
    fn test_resubmission_after_failure() {
        let mut state = DispatchState::default();
        state.begin();
        state.complete(Err(DispatchError::Network("API 500: boom".to_string())));

        assert!(state.begin());
        state.complete(Ok(media("/files/new.mp3")));
        assert_eq!(state.media().map(|m| m.download_path.as_str()), Some("/files/new.mp3"));
    }
}
