//! CLI command implementations.
//!
//! Available commands:
//! - **extract**: package exports → adapter report CSV
//! - **link**: adapter report → report with ProcessDirect call columns
//! - **run**: extract followed by link on one directory
//! - **init**: write a default `.asismap.toml`

pub mod extract;
pub mod init;
pub mod link;
pub mod run;

pub use extract::{handle_extract, ExtractConfig, ExtractOutcome};
pub use init::init_config;
pub use link::{handle_link, link_report, LinkConfig};
pub use run::handle_run;
