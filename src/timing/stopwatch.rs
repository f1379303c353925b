//! Pause-aware elapsed time
//!
//! The underlying clock never stops. Pausing is accounted for by moving the
//! start mark forward by the paused duration, which leaves the elapsed time
//! exactly where it was when the pause began.

use std::time::Duration;

/// Elapsed-time counter measured against external timestamps
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stopwatch {
    started_at: Duration,
    /// Total time shifted out by pauses
    excluded: Duration,
}

impl Stopwatch {
    pub fn started_at(now: Duration) -> Self {
        Stopwatch {
            started_at: now,
            excluded: Duration::ZERO,
        }
    }

    /// Restart from `now`, forgetting previous pauses
    pub fn restart(&mut self, now: Duration) {
        *self = Self::started_at(now);
    }

    pub fn elapsed(&self, now: Duration) -> Duration {
        now.saturating_sub(self.started_at)
    }

    /// Exclude `paused` from future elapsed readings
    pub fn shift(&mut self, paused: Duration) {
        self.started_at += paused;
        self.excluded += paused;
    }

    pub fn excluded(&self) -> Duration {
        self.excluded
    }
}

/// Format a duration as `MM:SS.cc` for timer labels
pub fn format_clock(elapsed: Duration) -> String {
    let total_centis = elapsed.as_millis() / 10;
    let minutes = total_centis / 6000;
    let seconds = (total_centis / 100) % 60;
    let centis = total_centis % 100;
    format!("{:02}:{:02}.{:02}", minutes, seconds, centis)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shift_excludes_pause() {
        let mut watch = Stopwatch::started_at(Duration::from_secs(10));
        let before_pause = watch.elapsed(Duration::from_secs(13));
        watch.shift(Duration::from_secs(30));
        assert_eq!(watch.elapsed(Duration::from_secs(43)), before_pause);
        assert_eq!(watch.excluded(), Duration::from_secs(30));
    }

    #[test]
    fn test_elapsed_never_negative() {
        let watch = Stopwatch::started_at(Duration::from_secs(5));
        assert_eq!(watch.elapsed(Duration::from_secs(1)), Duration::ZERO);
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(Duration::ZERO), "00:00.00");
        assert_eq!(format_clock(Duration::from_millis(65_432)), "01:05.43");
        assert_eq!(format_clock(Duration::from_millis(9)), "00:00.00");
    }
}
