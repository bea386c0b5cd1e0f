//! Gradeview CLI
//!
//! Support code for the `gradeview-cli` binary: the user-facing wording of
//! every outcome the engine can produce.

pub mod messages;
