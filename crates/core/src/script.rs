//! Script version numbering.

/// Content of the first version when a script is created without any.
pub const INITIAL_VERSION_CONTENT: &str = "Initial version.";

/// Version number assigned to the first version of a script.
pub const FIRST_VERSION: i32 = 1;

/// Compute the next version number given the latest existing one.
pub fn next_version(latest: Option<i32>) -> i32 {
    latest.map_or(FIRST_VERSION, |v| v + 1)
}
