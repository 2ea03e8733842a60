/// Civil wall-clock components resolved in a named timezone.
///
/// Invariant:
/// - `hour`/`minute`/`second` are timezone-local (DST applied)
/// - `subsec` is the elapsed fraction of the current second, in
///   `[0.0, 1.0)`, and is not timezone-dependent
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TimeComponents {
    /// 0–23.
    pub hour: u32,
    /// 0–59.
    pub minute: u32,
    /// 0–59.
    pub second: u32,
    /// Sub-second fraction for smooth motion.
    pub subsec: f64,
}

impl TimeComponents {
    #[inline]
    pub const fn new(hour: u32, minute: u32, second: u32, subsec: f64) -> Self {
        Self { hour, minute, second, subsec }
    }

    /// Seconds position including the sub-second fraction, `0.0..60.0`.
    #[inline]
    pub fn smooth_second(&self) -> f64 {
        self.second as f64 + self.subsec
    }

    /// Minutes position including the fraction contributed by whole
    /// elapsed seconds, `0.0..60.0`.
    #[inline]
    pub fn fractional_minute(&self) -> f64 {
        self.minute as f64 + self.second as f64 / 60.0
    }

    /// Hours position on a 12-hour dial including the fraction contributed
    /// by whole elapsed minutes, `0.0..12.0`.
    #[inline]
    pub fn fractional_hour(&self) -> f64 {
        (self.hour % 12) as f64 + self.minute as f64 / 60.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smooth_second_carries_the_fraction() {
        let t = TimeComponents::new(0, 0, 30, 0.5);
        assert_eq!(t.smooth_second(), 30.5);
    }

    #[test]
    fn fractional_minute_advances_with_seconds() {
        let t = TimeComponents::new(0, 9, 15, 0.0);
        assert_eq!(t.fractional_minute(), 9.25);
    }

    #[test]
    fn fractional_hour_wraps_the_pm_hours() {
        let am = TimeComponents::new(10, 30, 0, 0.0);
        let pm = TimeComponents::new(22, 30, 0, 0.0);
        assert_eq!(am.fractional_hour(), pm.fractional_hour());
        assert_eq!(am.fractional_hour(), 10.5);
    }

    #[test]
    fn fractional_hour_ignores_seconds() {
        // The hour position tracks whole minutes only.
        let a = TimeComponents::new(3, 20, 0, 0.0);
        let b = TimeComponents::new(3, 20, 59, 0.99);
        assert_eq!(a.fractional_hour(), b.fractional_hour());
    }
}
