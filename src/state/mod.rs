//! Application state module

mod app_state;
mod form;
mod message;

pub use app_state::*;
pub use form::*;
pub use message::*;
