//! Command construction module

pub mod builder;

pub use builder::{
    build_command, format_selector, listing_command, output_template, subtitle_languages,
    DownloadMode, ToolCommand, PROGRAM,
};
