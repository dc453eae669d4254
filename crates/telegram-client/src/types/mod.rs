//! Bot API request and response types.

mod send;

pub use send::*;
