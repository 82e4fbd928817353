pub mod fixtures;
pub mod tracing;

pub use fixtures::{LogFixture, sample_log};
pub use tracing::{CapturedEvent, captured_events, init_test_tracing};
