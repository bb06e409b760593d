pub mod alert;
pub mod lyrics;
pub mod sidebar;
pub mod spinner;
pub mod text_input;
