//! Interactive menu module

pub mod console;
pub mod render;
pub mod session;
pub mod state;

pub use console::{Console, TerminalConsole};
pub use render::{render, Screen};
pub use session::Session;
pub use state::{step, Effect, MenuState, Transition, UrlTarget};
