use chrono::{DateTime, Utc};

/// Time source injected into services so submission stamps are testable.
#[derive(Debug, Clone, Copy, Default)]
pub enum Clock {
    /// Real system time.
    #[default]
    System,
    /// Frozen at a known instant; used by tests.
    Fixed(DateTime<Utc>),
}

impl Clock {
    #[must_use]
    pub fn system() -> Self {
        Self::System
    }

    /// Returns a clock frozen at the given instant.
    #[must_use]
    pub fn fixed(at: DateTime<Utc>) -> Self {
        Self::Fixed(at)
    }

    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        match self {
            Clock::System => Utc::now(),
            Clock::Fixed(at) => *at,
        }
    }
}

/// Deterministic instant for tests (2024-05-06T12:53:20Z).
///
/// # Panics
///
/// Panics if the constant timestamp cannot be represented, which cannot
/// happen for a fixed in-range value.
#[must_use]
pub fn fixed_now() -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(1_715_000_000, 0).expect("fixed timestamp is in range")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_returns_the_frozen_instant() {
        let at = fixed_now();
        let clock = Clock::fixed(at);
        assert_eq!(clock.now(), at);
        assert_eq!(clock.now(), at);
    }

    #[test]
    fn system_clock_is_the_default() {
        assert!(matches!(Clock::default(), Clock::System));
    }
}
