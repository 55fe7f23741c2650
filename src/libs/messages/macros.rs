//! Output macros shared by every command.
//!
//! In normal mode messages go to stdout (stderr for errors) with an emoji
//! prefix. When debug mode is on (`TUDU_DEBUG` or `RUST_LOG` set) the same
//! messages are emitted through `tracing` so they interleave with the
//! store's own structured events.
//!
//! ```rust
//! use tudu::{msg_error, msg_success};
//! use tudu::libs::messages::Message;
//!
//! msg_success!(Message::TaskCreated);
//! msg_error!(Message::TaskNotFound(3));
//! ```

use std::sync::OnceLock;

/// Cached result of the debug mode check.
static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// Whether messages should be routed through `tracing`.
///
/// Checks `TUDU_DEBUG` and `RUST_LOG` once and caches the answer for the
/// lifetime of the process.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| std::env::var("TUDU_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok())
}

/// Prints a message without prefix.
///
/// ```rust
/// # use tudu::{msg_print, libs::messages::Message};
/// msg_print!(Message::TasksHeader, true);
/// // Output: "\nTodos\n"
/// ```
#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("{}", $msg);
        } else {
            println!("{}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\n{}\n", $msg);
        } else {
            println!("\n{}\n", $msg);
        }
    };
}

/// Prints a success message with ✅ prefix.
#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("✅ {}", $msg);
        } else {
            println!("✅ {}", $msg);
        }
    };
}

/// Prints an error message with ❌ prefix to stderr.
#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("❌ {}", $msg);
        } else {
            eprintln!("❌ {}", $msg);
        }
    };
}

/// Prints a warning message with ⚠️ prefix.
#[macro_export]
macro_rules! msg_warning {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::warn!("⚠️ {}", $msg);
        } else {
            println!("⚠️ {}", $msg);
        }
    };
}

/// Prints an informational message with ℹ️ prefix.
#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("ℹ️ {}", $msg);
        } else {
            println!("ℹ️ {}", $msg);
        }
    };
}

/// Debug-only message with 🔍 prefix; silent in normal mode.
#[macro_export]
macro_rules! msg_debug {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::debug!("🔍 {}", $msg);
        }
    };
}

/// Early return with an `anyhow::Error` built from a message.
///
/// ```rust
/// use anyhow::Result;
/// use tudu::{msg_bail_anyhow, libs::messages::Message};
///
/// fn open() -> Result<()> {
///     msg_bail_anyhow!(Message::DbConnectionFailed);
/// }
/// assert!(open().is_err());
/// ```
#[macro_export]
macro_rules! msg_bail_anyhow {
    ($msg:expr) => {
        anyhow::bail!("❌ {}", $msg)
    };
}
