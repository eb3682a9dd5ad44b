//! Persistence layer for the line-oriented board file format.
//!
//! # Responsibility
//! - Encode and decode boards to the two-token line protocol.
//! - Keep file I/O details behind the repository seam.
//!
//! # Invariants
//! - Decoding is tolerant: malformed lines are skipped, never fatal.
//! - I/O failures surface as explicit errors; callers choose the policy.

pub mod board_file;
