//! Exit code constants for the readme-gen CLI.
//!
//! - 0: Success (including a run the user aborted on purpose)
//! - 1: User error (bad args, bad config, closed input)
//! - 2: Self-test failure
//! - 3: Filesystem failure while writing output

/// Successful execution, or a clean user abort.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, invalid config, or input closed mid-session.
pub const USER_ERROR: i32 = 1;

/// One or more `--run-tests` scenarios failed.
pub const SELF_TEST_FAILURE: i32 = 2;

/// The document or manifest could not be written.
pub const FILESYSTEM_FAILURE: i32 = 3;
