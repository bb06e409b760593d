pub mod input;
pub mod state;

pub use input::{DispatchRequest, InputField, SessionInput};
pub use state::{DispatchState, DispatchStatus, MediaResponse};
