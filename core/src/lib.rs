//! The access-log analysis pipeline.
//!
//! ```text
//! raw lines -> parser -> filter -> aggregate -> report
//! ```
//!
//! [`analysis::analyze`] runs the whole thing against files on disk; the
//! stages are public so they can be driven directly on in-memory lines.

pub mod aggregate;
pub mod analysis;
pub mod error;
pub mod filter;
pub mod parser;
pub mod report;
pub mod source;
