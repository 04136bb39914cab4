//! Win/lose chance checks over a fast or a cryptographically secure random
//! source. `chance` is a percentage from 0 to 100.

pub mod chance;
pub mod error;
pub mod sources;
