//! Built-in tool implementations.

mod calculator;
mod weather;

pub use calculator::Calculator;
pub use weather::Weather;
