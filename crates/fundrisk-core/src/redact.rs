//! Redaction of holding values in log output.
//!
//! Holding and asset amounts are client data. They only reach the logs when
//! value logging has been switched on explicitly.

use std::sync::atomic::{AtomicBool, Ordering};

static LOG_VALUES_ENABLED: AtomicBool = AtomicBool::new(false);

/// Placeholder used when value logging is disabled.
pub const REDACTED_VALUE: &str = "[REDACTED]";

pub fn set_log_values(enable: bool) {
    LOG_VALUES_ENABLED.store(enable, Ordering::Relaxed);
}

/// Returns true if amounts may be written to the logs.
pub fn log_values_enabled() -> bool {
    LOG_VALUES_ENABLED.load(Ordering::Relaxed)
}

/// Formats an amount for logging, or the redaction token.
pub fn redact_amount(value: f64) -> String {
    if log_values_enabled() {
        value.to_string()
    } else {
        REDACTED_VALUE.to_string()
    }
}
