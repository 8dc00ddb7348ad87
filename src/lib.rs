// Export modules for library usage
pub mod archive;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod errors;
pub mod extraction;
pub mod formatting;
pub mod io;
pub mod linker;

// Re-export commonly used types
pub use crate::core::{AdapterRecord, FlowInfo, ParameterTable, REPORT_COLUMNS};
pub use crate::errors::{AsisError, Result};
pub use crate::extraction::{extract_packages, ExtractionReport, PackageCounters, StatusEvent};
pub use crate::io::csv::Table;
pub use crate::linker::{link_calls, normalize_address, LinkSummary};
