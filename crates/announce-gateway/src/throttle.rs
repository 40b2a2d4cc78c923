use std::num::NonZeroU32;
use std::time::Duration;

use governor::{DefaultDirectRateLimiter, Quota, RateLimiter};

/// Steady request rate plus burst allowance for one route.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateLimit {
    pub rate_per_sec: f64,
    pub burst: u32,
}

impl RateLimit {
    /// One cell every `1 / rate_per_sec` seconds, at most `burst` cells
    /// banked.
    fn quota(&self) -> Quota {
        let burst = NonZeroU32::new(self.burst).unwrap_or(NonZeroU32::MIN);
        let quota = Duration::try_from_secs_f64(1.0 / self.rate_per_sec)
            .ok()
            .and_then(Quota::with_period)
            .unwrap_or_else(|| Quota::per_second(NonZeroU32::MAX));
        quota.allow_burst(burst)
    }
}

/// Rate limiter guarding one route. Starts with the full burst available.
pub struct Throttle {
    limiter: DefaultDirectRateLimiter,
}

impl Throttle {
    pub fn new(limit: RateLimit) -> Self {
        Self {
            limiter: RateLimiter::direct(limit.quota()),
        }
    }

    /// Admit one request if the route has capacity left.
    pub fn try_acquire(&self) -> bool {
        self.limiter.check().is_ok()
    }
}
