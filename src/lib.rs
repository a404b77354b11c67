//! Propview library exports for testing

pub mod core;
pub mod profile;
pub mod tui;

#[cfg(test)]
pub mod test_support;
