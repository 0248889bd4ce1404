//! Event Handling Module
//!
//! # Module Organization
//!
//! - **`keys`**: Keyboard input processing and page dispatch
//! - **`search`**: Background worker behind the simulated AI search

pub mod keys;
pub mod search;
