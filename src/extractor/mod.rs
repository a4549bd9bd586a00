pub mod models;
pub mod traits;
pub mod ytdlp;

pub use models::{CapturedOutput, FormatEntry, FormatListing, RunOutcome};
pub use traits::ToolRunner;
pub use ytdlp::{list_formats, parse_formats, YtDlpRunner};
