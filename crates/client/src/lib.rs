//! Terminal client for the rift card battler.
//!
//! The binary wires [`rift_runtime::Runtime`] to a line-based prompt: typed
//! commands become runtime requests and subscribed events are printed as
//! they arrive.
pub mod app;
pub mod command;
pub mod logging;
pub mod render;

pub use app::App;
pub use command::{Command, ParseError};
