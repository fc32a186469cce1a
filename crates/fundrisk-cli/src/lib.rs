//! CLI library components for the fund risk monitor.

pub mod logging;
pub mod session;
pub mod summary;
pub mod types;
