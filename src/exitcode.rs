//! Standard exit codes (BSD sysexits.h compatible)

/// Successful termination
pub const OK: i32 = 0;

/// Command line usage error
pub const USAGE: i32 = 64;

/// Malformed outline (duplicate ids, level mismatch, bad JSON)
pub const DATAERR: i32 = 65;

/// Outline file does not exist
pub const NOINPUT: i32 = 66;

/// Outline or content generation failed
pub const UNAVAILABLE: i32 = 69;

/// Input/output error
pub const IOERR: i32 = 74;

/// Configuration error
pub const CONFIG: i32 = 78;
