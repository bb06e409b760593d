use std::{path::PathBuf, sync::Arc};

use flume::Sender;

use crate::{event::events::Event, http::ApiService};

pub struct AppContext {
    pub api: Arc<ApiService>,
    pub event_tx: Sender<Event>,
    /// Where the player document is written before it is opened.
    pub cache_dir: PathBuf,
}
