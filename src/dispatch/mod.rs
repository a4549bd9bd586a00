//! Command dispatch module

pub mod dispatcher;
pub mod script;

pub use dispatcher::{execute, DispatchChoice};
pub use script::{default_script_name, export_script, render_script, SHEBANG};
