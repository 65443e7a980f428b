//! Error handling and result types for pr-gatekeeper.
//!
//! All fallible functions in this crate return the `Result<T>` defined here,
//! a type alias for `color_eyre::eyre::Result<T>`. Errors carry context added
//! with `.wrap_err()` as they propagate and are rendered with color-eyre's
//! report handler installed in `main`.

use color_eyre::eyre::Result as EyreResult;

/// Standard result type used throughout pr-gatekeeper.
pub type Result<T> = EyreResult<T>;
