use std::thread;
use std::time::Duration;

/// Why an attempt failed, as far as backoff is concerned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// HTTP 429 from the service
    RateLimited,
    /// Transport errors, other error statuses, undecodable bodies
    Other,
}

/// Bounded retry with a linear backoff per failure kind
#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub rate_limit_step: Duration,
    pub error_step: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            rate_limit_step: Duration::from_secs(5),
            error_step: Duration::from_secs(3),
        }
    }
}

impl RetryPolicy {
    /// Wait before the next attempt after `attempt` (zero-based) failed.
    ///
    /// With the defaults: 5s, 10s, 15s when rate limited, 3s, 6s, 9s otherwise.
    pub fn backoff(&self, attempt: u32, kind: FailureKind) -> Duration {
        let step = match kind {
            FailureKind::RateLimited => self.rate_limit_step,
            FailureKind::Other => self.error_step,
        };
        step * (attempt + 1)
    }
}

/// Blocking delay, injectable so tests don't actually sleep
pub trait Pause {
    fn pause(&self, duration: Duration);
}

/// Sleeps the current thread
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadPause;

impl Pause for ThreadPause {
    fn pause(&self, duration: Duration) {
        thread::sleep(duration);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_limit_schedule() {
        let policy = RetryPolicy::default();
        let waits: Vec<u64> = (0..3)
            .map(|a| policy.backoff(a, FailureKind::RateLimited).as_secs())
            .collect();
        assert_eq!(waits, vec![5, 10, 15]);
    }

    #[test]
    fn test_error_schedule() {
        let policy = RetryPolicy::default();
        let waits: Vec<u64> = (0..3)
            .map(|a| policy.backoff(a, FailureKind::Other).as_secs())
            .collect();
        assert_eq!(waits, vec![3, 6, 9]);
    }

    #[test]
    fn test_custom_steps() {
        let policy = RetryPolicy {
            max_attempts: 5,
            rate_limit_step: Duration::from_millis(250),
            error_step: Duration::from_millis(100),
        };
        assert_eq!(
            policy.backoff(3, FailureKind::RateLimited),
            Duration::from_secs(1)
        );
        assert_eq!(
            policy.backoff(4, FailureKind::Other),
            Duration::from_millis(500)
        );
    }
}
