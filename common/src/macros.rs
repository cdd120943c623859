//! Status-line macros shared by every crate in the workspace.
//!
//! They all log on the `dealer::status` target so the terminal formatter can
//! prefix them with a status symbol instead of printing them raw.

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::__tracing::info!(target: "dealer::status", $($arg)*)
    };
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::__tracing::info!(target: "dealer::status", $($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::__tracing::warn!(target: "dealer::status", $($arg)*)
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::__tracing::error!(target: "dealer::status", $($arg)*)
    };
}
