use crate::ui::state::Route;

#[derive(Debug, Clone)]
pub enum AppMessage {
    Quit,

    // Navigation
    NavigateTo(Route),
    NextSidebarItem,
    PreviousSidebarItem,
    SetSidebarIndex(usize),
    CloseOverlay,
}
