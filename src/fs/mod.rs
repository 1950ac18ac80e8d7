//! Filesystem utilities for readme-gen.
//!
//! Every output file is written whole and atomically, so an interrupted or
//! failed run never leaves a half-written README or manifest behind.

pub mod atomic;

pub use atomic::atomic_write;
pub use atomic::atomic_write_file;
