//! Application-level configuration.
//!
//! This module provides configuration types that control how the session
//! engine behaves:
//!
//! - [`SessionParams`] — resolution policy and discussion window length

pub mod session_params;

pub use session_params::SessionParams;
