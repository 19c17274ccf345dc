use std::time::SystemTime;

/// Error type for timestamp operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeError {
    /// System time is before UNIX epoch
    SystemTimeBeforeEpoch,
}

impl std::fmt::Display for TimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeError::SystemTimeBeforeEpoch => {
                write!(f, "System time is before UNIX epoch")
            }
        }
    }
}

impl std::error::Error for TimeError {}

pub struct Timestamp;

impl Timestamp {
    /// Returns the current timestamp in milliseconds since UNIX epoch.
    ///
    /// # Errors
    /// Returns `TimeError::SystemTimeBeforeEpoch` if system time is before UNIX epoch.
    pub fn try_now_ms() -> Result<u64, TimeError> {
        SystemTime::now()
            .duration_since(SystemTime::UNIX_EPOCH)
            .map(|d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
            .map_err(|_| TimeError::SystemTimeBeforeEpoch)
    }
}

/// Source of wall-clock milliseconds used for cooldown arithmetic
pub trait Clock: Send + Sync {
    fn now_ms(&self) -> u64;
}

/// Clock backed by the system time
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        // A clock set before the epoch only affects cooldown spacing
        Timestamp::try_now_ms().unwrap_or(0)
    }
}
