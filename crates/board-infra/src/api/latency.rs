use std::time::Duration;

/// Artificial round-trip delay per API operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedLatency {
    pub login: Duration,
    pub list: Duration,
    pub create: Duration,
    pub update: Duration,
    pub delete: Duration,
    pub chart: Duration,
}

impl SimulatedLatency {
    /// No delay at all, for tests and scripted use.
    pub fn none() -> Self {
        Self::uniform(Duration::ZERO)
    }

    pub fn uniform(delay: Duration) -> Self {
        Self {
            login: delay,
            list: delay,
            create: delay,
            update: delay,
            delete: delay,
            chart: delay,
        }
    }

    /// Default latency when `enabled`, none otherwise.
    pub fn enabled(enabled: bool) -> Self {
        if enabled { Self::default() } else { Self::none() }
    }
}

impl Default for SimulatedLatency {
    fn default() -> Self {
        Self {
            login: Duration::from_millis(300),
            list: Duration::from_millis(200),
            create: Duration::from_millis(300),
            update: Duration::from_millis(300),
            delete: Duration::from_millis(200),
            chart: Duration::from_millis(200),
        }
    }
}
