//! Library side of the `census` command-line tool.

pub mod ingest;
pub mod input;
pub mod logging;
pub mod types;
