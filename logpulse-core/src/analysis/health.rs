use crate::analysis::constants::{
    CRITICAL_ERROR_THRESHOLD, DEGRADED_ERROR_THRESHOLD, WARNING_THRESHOLD,
};
use crate::analysis::types::HealthStatus;

/// Threshold ladder over the final ERROR and WARNING counts. First match wins.
pub fn classify_health(error_count: u64, warning_count: u64) -> HealthStatus {
    if error_count > CRITICAL_ERROR_THRESHOLD {
        HealthStatus::Critical
    } else if error_count > DEGRADED_ERROR_THRESHOLD {
        HealthStatus::Degraded
    } else if warning_count > WARNING_THRESHOLD {
        HealthStatus::Warning
    } else {
        HealthStatus::Healthy
    }
}
