//! # iplog Common
//!
//! Value types shared by the analysis pipeline and the command line:
//!
//! * **[`network`]**: dotted-quad parsing, the per-octet start bound and mask.
//! * **[`time`]**: strict `dd.MM.yyyy` parsing and the scan [`time::DateRange`].
//! * **[`config`]**: the validated run configuration.
//! * **[`error`]**: configuration errors.

pub mod config;
pub mod error;
pub mod network;
pub mod time;

#[doc(hidden)]
pub use tracing;

/// Logs a status line that marks a completed step.
///
/// Rendered by the CLI formatter with its own symbol, separate from plain `info!`.
#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::tracing::info!(target: "iplog::success", $($arg)*)
    };
}
