//! The countdown timer adapter

/// Abstraction over a monotonic clock used to bound every blocking wait
///
/// An unarmed timer behaves as immediately expired.
pub trait Countdown {
    /// Arms the timer to expire `ms` milliseconds from now
    fn arm(&mut self, ms: u32);
    /// Whether the current monotonic time is at or past the armed deadline
    fn expired(&self) -> bool;
    /// Milliseconds remaining until the deadline; negative or zero once past expiry
    fn remaining_ms(&self) -> i64;

    /// Arms the timer to expire `secs` seconds from now
    fn arm_seconds(&mut self, secs: u16) {
        self.arm(u32::from(secs).saturating_mul(1000));
    }
}

/// A [`Countdown`] backed by [`std::time::Instant`]
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy)]
pub struct SystemCountdown {
    /// The armed deadline, if any
    deadline: Option<std::time::Instant>,
}
#[cfg(feature = "std")]
impl SystemCountdown {
    /// Creates a new, unarmed countdown
    pub const fn new() -> Self {
        Self { deadline: None }
    }
}
#[cfg(feature = "std")]
impl Default for SystemCountdown {
    fn default() -> Self {
        Self::new()
    }
}
#[cfg(feature = "std")]
impl Countdown for SystemCountdown {
    fn arm(&mut self, ms: u32) {
        self.deadline = Some(std::time::Instant::now() + std::time::Duration::from_millis(u64::from(ms)));
    }

    fn expired(&self) -> bool {
        match self.deadline {
            Some(deadline) => std::time::Instant::now() >= deadline,
            None => true,
        }
    }

    fn remaining_ms(&self) -> i64 {
        match self.deadline {
            Some(deadline) => {
                let now = std::time::Instant::now();
                if deadline > now {
                    i64::try_from(deadline.duration_since(now).as_millis()).unwrap_or(i64::MAX)
                } else {
                    i64::try_from(now.duration_since(deadline).as_millis()).map_or(i64::MIN, |past| -past)
                }
            }
            None => 0,
        }
    }
}
