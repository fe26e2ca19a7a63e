//! skypath CLI library.
//!
//! Output formatting and argument helpers shared by the `skypath-cli` binary
//! and its tests.

pub mod output;
