//! Exit codes returned by [`crate::run`].

/// Success exit code (standard Unix convention).
pub const SUCCESS: i32 = 0;

/// Any command failure: bad arguments, unreadable input, failed audit.
pub const ERROR: i32 = 2;
