use serde::{Deserialize, Serialize};

/// Speed above which a sample counts as a shake
pub const DEFAULT_SHAKE_THRESHOLD: f64 = 800.0;
/// Minimum gap between samples that are considered, in milliseconds
pub const DEFAULT_MIN_INTERVAL_MS: u64 = 100;

/// One accelerometer reading
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AccelSample {
    pub timestamp_ms: u64,
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl AccelSample {
    pub fn new(timestamp_ms: u64, x: f32, y: f32, z: f32) -> Self {
        Self {
            timestamp_ms,
            x,
            y,
            z,
        }
    }
}

/// Debounced edge trigger over accelerometer readings
#[derive(Debug, Clone)]
pub struct ShakeDetector {
    threshold: f64,
    min_interval_ms: u64,
    /// Last considered reading; `None` until the first sample arrives
    last: Option<AccelSample>,
}

impl Default for ShakeDetector {
    fn default() -> Self {
        Self::new(DEFAULT_SHAKE_THRESHOLD, DEFAULT_MIN_INTERVAL_MS)
    }
}

impl ShakeDetector {
    pub fn new(threshold: f64, min_interval_ms: u64) -> Self {
        Self {
            threshold,
            min_interval_ms,
            last: None,
        }
    }

    /// Feed a reading; returns true when it qualifies as a shake.
    ///
    /// The first reading only sets the baseline. Readings that arrive within
    /// `min_interval_ms` of the last considered one are dropped without
    /// touching the stored state.
    pub fn on_sample(&mut self, sample: AccelSample) -> bool {
        let Some(last) = self.last else {
            self.last = Some(sample);
            return false;
        };

        let elapsed = sample.timestamp_ms.saturating_sub(last.timestamp_ms);
        if elapsed <= self.min_interval_ms {
            return false;
        }

        let dx = f64::from(sample.x - last.x);
        let dy = f64::from(sample.y - last.y);
        let dz = f64::from(sample.z - last.z);
        let speed = (dx * dx + dy * dy + dz * dz).sqrt() / elapsed as f64 * 10_000.0;

        self.last = Some(sample);

        let shaken = speed > self.threshold;
        if shaken {
            tracing::debug!("Shake detected (speed {:.1})", speed);
        }
        shaken
    }
}
