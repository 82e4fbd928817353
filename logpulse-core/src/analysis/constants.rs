/// How many of the most recent ERROR / WARNING entries a summary keeps.
pub const RECENT_LIMIT: usize = 5;

// Health ladder. All comparisons are strict `>`.
pub const CRITICAL_ERROR_THRESHOLD: u64 = 10;
pub const DEGRADED_ERROR_THRESHOLD: u64 = 3;
pub const WARNING_THRESHOLD: u64 = 5;
