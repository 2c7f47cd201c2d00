//! Shared error plumbing.

pub mod error;

pub use error::{DetPostError, DetPostResult};
