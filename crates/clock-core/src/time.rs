//! Wall-clock time and the mapping from time to hand angles.
//!
//! Timestamps are *local* milliseconds: epoch milliseconds already shifted by
//! the viewer's timezone offset. The web frontend does that shift once per
//! tick so everything here stays platform free.

const MS_PER_SECOND: i64 = 1_000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// Which hand an angle or trail belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TimeUnit {
    Seconds,
    Minutes,
    Hours,
}

impl TimeUnit {
    pub const ALL: [TimeUnit; 3] = [TimeUnit::Seconds, TimeUnit::Minutes, TimeUnit::Hours];

    pub fn as_str(self) -> &'static str {
        match self {
            TimeUnit::Seconds => "seconds",
            TimeUnit::Minutes => "minutes",
            TimeUnit::Hours => "hours",
        }
    }
}

/// Broken-down time of day.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClockTime {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
    pub millis: u32,
}

impl ClockTime {
    pub fn new(hours: u32, minutes: u32, seconds: u32, millis: u32) -> Self {
        Self {
            hours,
            minutes,
            seconds,
            millis,
        }
    }

    /// Decompose a local-millisecond timestamp. Values before the epoch wrap
    /// into the previous day.
    pub fn from_local_millis(local_ms: i64) -> Self {
        let of_day = local_ms.rem_euclid(MS_PER_DAY);
        Self {
            hours: (of_day / MS_PER_HOUR) as u32,
            minutes: (of_day % MS_PER_HOUR / MS_PER_MINUTE) as u32,
            seconds: (of_day % MS_PER_MINUTE / MS_PER_SECOND) as u32,
            millis: (of_day % MS_PER_SECOND) as u32,
        }
    }

    /// Hand angle in degrees, 0 at twelve o'clock, growing clockwise.
    ///
    /// Each hand carries the fraction of the next smaller unit, so the minute
    /// hand creeps with the seconds and the hour hand with the minutes.
    pub fn angle(&self, unit: TimeUnit) -> f64 {
        let seconds = self.seconds as f64;
        let minutes = self.minutes as f64 + seconds / 60.0;
        match unit {
            TimeUnit::Seconds => (seconds + self.millis as f64 / 1000.0) / 60.0 * 360.0,
            TimeUnit::Minutes => minutes / 60.0 * 360.0,
            TimeUnit::Hours => ((self.hours % 12) as f64 + minutes / 60.0) / 12.0 * 360.0,
        }
    }
}

/// The clock's only persistent input: "now", refreshed every clock tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClockState {
    pub now_local_ms: i64,
}

impl ClockState {
    pub fn new(now_local_ms: i64) -> Self {
        Self { now_local_ms }
    }

    pub fn set_now(&mut self, now_local_ms: i64) {
        self.now_local_ms = now_local_ms;
    }

    pub fn time(&self) -> ClockTime {
        ClockTime::from_local_millis(self.now_local_ms)
    }

    /// Time `offset_ms` milliseconds in the past.
    pub fn time_before(&self, offset_ms: i64) -> ClockTime {
        ClockTime::from_local_millis(self.now_local_ms - offset_ms)
    }
}
