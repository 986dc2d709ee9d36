use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Liveness report returned by `GET /health`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthDto {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
    /// Seconds since the server started.
    pub uptime: f64,
}

pub fn health(started_at: Instant) -> HealthDto {
    HealthDto {
        status: "healthy",
        timestamp: Utc::now(),
        uptime: started_at.elapsed().as_secs_f64(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn reports_uptime_since_start() {
        let started_at = Instant::now() - Duration::from_secs(3);
        let report = health(started_at);
        assert_eq!(report.status, "healthy");
        assert!(report.uptime >= 3.0);
    }
}
