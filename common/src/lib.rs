pub mod config;
pub mod error;
mod macros;

#[doc(hidden)]
pub use tracing as __tracing;
