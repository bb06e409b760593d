#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub data: AppData,
    pub ui: UiState,
}

#[derive(Debug, Clone, Default)]
pub struct AppData {
    /// Base picked by the health probe, seeded into views whose base field is untouched.
    pub preferred_base: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub current_route: Route,
    pub sidebar_index: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Route {
    #[default]
    Mixer,
    Karaoke,
    About,
}

impl Route {
    pub const ALL: [Route; 3] = [Route::Mixer, Route::Karaoke, Route::About];

    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|r| r == self).unwrap_or(0)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Mixer => "Create + Play",
            Route::Karaoke => "Karaoke",
            Route::About => "About",
        }
    }
}
