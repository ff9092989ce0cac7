use std::time::Duration;

use super::config::{GameConfig, SpeedMode};

/// Maps the score to the time between ticks
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedCurve {
    base_duration_ms: f64,
    min_interval_ms: f64,
    pub mode: SpeedMode,
}

impl SpeedCurve {
    pub fn new(base_duration_ms: f64, min_interval_ms: f64, mode: SpeedMode) -> Self {
        Self {
            base_duration_ms,
            min_interval_ms,
            mode,
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(
            config.base_duration_ms,
            config.min_interval_ms,
            config.speed_mode,
        )
    }

    /// `base - (score^2 / base / 10) * 2` milliseconds, never below the floor
    pub fn interval_ms(&self, score: u32) -> f64 {
        let base = self.base_duration_ms;
        let score = f64::from(score);
        let raw = base - (score * score / base / 10.0) * 2.0;
        raw.max(self.min_interval_ms)
    }

    pub fn interval(&self, score: u32) -> Duration {
        Duration::from_secs_f64(self.interval_ms(score) / 1000.0)
    }
}

impl Default for SpeedCurve {
    fn default() -> Self {
        Self::from_config(&GameConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_at_zero_is_base() {
        let curve = SpeedCurve::default();
        assert_eq!(curve.interval_ms(0), 200.0);
        assert_eq!(curve.interval(0).as_millis(), 200);
    }

    #[test]
    fn test_interval_at_score_ten() {
        let curve = SpeedCurve::default();
        assert!((curve.interval_ms(10) - 199.9).abs() < 1e-9);
    }

    #[test]
    fn test_interval_shrinks_with_score() {
        let curve = SpeedCurve::default();
        let mut previous = curve.interval_ms(0);
        for score in 1..200 {
            let next = curve.interval_ms(score);
            assert!(next <= previous);
            previous = next;
        }
    }

    #[test]
    fn test_interval_is_clamped() {
        let curve = SpeedCurve::new(200.0, 10.0, SpeedMode::OnStart);
        // 200 - (1000^2 / 200 / 10) * 2 = -800
        assert_eq!(curve.interval_ms(1_000), 10.0);
        assert!(curve.interval(u32::MAX) > Duration::ZERO);
    }
}
