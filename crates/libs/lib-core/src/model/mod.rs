//! # Model Layer
//!
//! Stored representations and the store that writes them.

pub mod store;
