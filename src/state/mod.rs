//! Application state module

mod app_state;
mod forms;
mod loading_state;
mod submission;

pub use app_state::*;
pub use forms::*;
pub use loading_state::*;
pub use submission::*;
