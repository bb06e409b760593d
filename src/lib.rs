pub mod config;
pub mod event;
pub mod http;
pub mod karaoke;
pub mod player;
pub mod session;
pub mod ui;
pub mod util;

#[cfg(test)]
mod test_utils;
