//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod format;
pub mod inspect;
pub mod models;
pub mod utils;

// Re-export main command functions
pub use format::{build_config, execute_format, validate_args};
pub use inspect::{build_report, execute_inspect};
pub use models::{FormatArgs, InspectArgs};
pub use utils::{display_version, read_dump, validate_report_file};
