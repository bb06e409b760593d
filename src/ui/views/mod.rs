pub mod about;
pub mod karaoke;
pub mod lyrics;
pub mod mixer;

pub use about::About;
pub use karaoke::Karaoke;
pub use lyrics::LyricsModal;
pub use mixer::Mixer;
