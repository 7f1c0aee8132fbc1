use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};

/// Get the current date in local timezone
pub fn local_date_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Get the current date and time in local timezone
pub fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Time source for date-dependent validation and queries
///
/// Every "today" and "now" read in the server goes through a Clock instead
/// of ambient system time. `System` is used in production; `Fixed` pins the
/// current instant so tests can exercise due-date rules deterministically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clock {
    /// Local system time
    System,
    /// A pinned instant
    Fixed(NaiveDateTime),
}

impl Clock {
    /// Clock backed by the local system time
    pub fn system() -> Self {
        Clock::System
    }

    /// Clock pinned to the given instant
    pub fn fixed(now: NaiveDateTime) -> Self {
        Clock::Fixed(now)
    }

    /// Clock pinned to midnight of the given date
    pub fn fixed_date(today: NaiveDate) -> Self {
        Clock::Fixed(today.and_time(NaiveTime::MIN))
    }

    /// Current instant according to this clock
    pub fn now(&self) -> NaiveDateTime {
        match self {
            Clock::System => local_now(),
            Clock::Fixed(now) => *now,
        }
    }

    /// Current date according to this clock
    pub fn today(&self) -> NaiveDate {
        self.now().date()
    }
}
