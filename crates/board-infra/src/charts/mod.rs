//! Chart sources.

mod mock;

pub use mock::MockChartSource;
