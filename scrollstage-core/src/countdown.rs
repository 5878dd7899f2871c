use std::fmt;

const MS_PER_SECOND: i64 = 1000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// Time left until launch, broken into display fields.
///
/// Shared by the primary countdown and the zoomed overlay so both always
/// show the same value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CountdownSnapshot {
    pub days: u64,
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
    pub millis: u16,
}

impl CountdownSnapshot {
    /// Break down `remaining_ms`; negative input reads as zero.
    pub fn from_remaining_ms(remaining_ms: i64) -> Self {
        let ms = remaining_ms.max(0);
        Self {
            days: (ms / MS_PER_DAY) as u64,
            hours: ((ms % MS_PER_DAY) / MS_PER_HOUR) as u8,
            minutes: ((ms % MS_PER_HOUR) / MS_PER_MINUTE) as u8,
            seconds: ((ms % MS_PER_MINUTE) / MS_PER_SECOND) as u8,
            millis: (ms % MS_PER_SECOND) as u16,
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    /// `DDD` fields only, e.g. `01D 01H 01M 01S`.
    pub fn label(&self) -> String {
        self.to_string()
    }

    /// Fixed-width millisecond field, e.g. `007MS`.
    pub fn millis_label(&self) -> String {
        format!("{:03}MS", self.millis)
    }
}

impl fmt::Display for CountdownSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}D {:02}H {:02}M {:02}S",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}

/// Countdown to a fixed epoch that latches at zero once reached.
#[derive(Clone, Copy, Debug)]
pub struct Countdown {
    target_ms: i64,
    expired: bool,
}

impl Countdown {
    pub fn new(target_ms: i64) -> Self {
        Self { target_ms, expired: false }
    }

    pub fn is_expired(&self) -> bool {
        self.expired
    }

    /// Snapshot at wall-clock `now_ms`. After the first zero reading the
    /// countdown stays at zero even if the clock later moves backwards.
    pub fn tick(&mut self, now_ms: i64) -> CountdownSnapshot {
        if self.expired {
            return CountdownSnapshot::default();
        }
        let remaining = self.target_ms.saturating_sub(now_ms);
        if remaining <= 0 {
            log::info!("countdown reached zero");
            self.expired = true;
            return CountdownSnapshot::default();
        }
        CountdownSnapshot::from_remaining_ms(remaining)
    }
}
