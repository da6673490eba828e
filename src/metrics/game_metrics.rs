use std::time::{Duration, Instant};

use crate::game::StepInfo;

/// Session statistics shown in the header. Nothing is written to disk.
pub struct GameMetrics {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    pub best_length: usize,
    pub resets: u32,
    pub food_eaten: u32,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            best_length: 1,
            resets: 0,
            food_eaten: 0,
        }
    }

    pub fn update(&mut self) {
        self.elapsed_time = self.start_time.elapsed();
    }

    /// Fold one tick's outcome in. `length` is the snake's target length after
    /// the tick.
    pub fn record(&mut self, info: &StepInfo, length: usize) {
        if info.ate_food {
            self.food_eaten += 1;
        }
        if let Some(reached) = info.reset_from {
            self.resets += 1;
            self.best_length = self.best_length.max(reached);
        }
        self.best_length = self.best_length.max(length);
    }

    /// `mm:ss`, growing an hours field once the session passes an hour
    pub fn format_time(&self) -> String {
        let secs = self.elapsed_time.as_secs();
        let (hours, minutes, seconds) = (secs / 3600, secs / 60 % 60, secs % 60);
        if hours > 0 {
            format!("{hours}:{minutes:02}:{seconds:02}")
        } else {
            format!("{minutes:02}:{seconds:02}")
        }
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_shows_hours_only_when_needed() {
        let mut metrics = GameMetrics::new();
        let cases = [(0, "00:00"), (59, "00:59"), (754, "12:34"), (3599, "59:59")];
        for (secs, shown) in cases {
            metrics.elapsed_time = Duration::from_secs(secs);
            assert_eq!(metrics.format_time(), shown);
        }

        metrics.elapsed_time = Duration::from_secs(3600 + 2 * 60 + 3);
        assert_eq!(metrics.format_time(), "1:02:03");
    }

    #[test]
    fn test_food_counted_even_when_reset_same_tick() {
        let mut metrics = GameMetrics::new();
        let info = StepInfo {
            ate_food: true,
            reset_from: Some(4),
        };
        metrics.record(&info, 1);

        assert_eq!(metrics.food_eaten, 1);
        assert_eq!(metrics.resets, 1);
        assert_eq!(metrics.best_length, 4);
    }

    #[test]
    fn test_best_length_tracking() {
        let mut metrics = GameMetrics::new();

        let ate = StepInfo {
            ate_food: true,
            reset_from: None,
        };
        metrics.record(&ate, 2);
        metrics.record(&ate, 3);
        assert_eq!(metrics.best_length, 3);
        assert_eq!(metrics.food_eaten, 2);

        let crashed = StepInfo {
            ate_food: false,
            reset_from: Some(7),
        };
        metrics.record(&crashed, 1);
        assert_eq!(metrics.best_length, 7);
        assert_eq!(metrics.resets, 1);

        metrics.record(&StepInfo::default(), 1);
        assert_eq!(metrics.best_length, 7); // Should not decrease
    }

    #[test]
    fn test_update_tracks_elapsed() {
        let mut metrics = GameMetrics::new();
        std::thread::sleep(Duration::from_millis(50));
        metrics.update();

        assert!(metrics.elapsed_time.as_millis() >= 50);
    }
}
