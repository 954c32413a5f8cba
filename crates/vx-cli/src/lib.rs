//! Stdin/stdout front end for VoxCue.
//!
//! The binary is a thin shell over these modules; tests drive the session
//! loop directly over in-memory buffers.

pub mod config;
pub mod session;
