use std::sync::Arc;
use tokio::sync::{AcquireError, OwnedSemaphorePermit, Semaphore};
use tokio::time::{Duration, Instant};
use parking_lot::Mutex;

/// Throttles quote requests against the keyed upstream.
///
/// Bounds the number of requests in flight and spaces request starts so a
/// fan-out of dozens of symbols stays inside the provider's per-minute quota.
pub struct RateLimiter {
    /// Semaphore to limit concurrent requests
    semaphore: Arc<Semaphore>,
    /// Start time reserved by the most recent request
    last_request: Arc<Mutex<Option<Instant>>>,
    /// Minimum delay between request starts; zero disables spacing
    min_delay: Duration,
}

impl RateLimiter {
    /// Create a new rate limiter
    ///
    /// # Arguments
    /// * `max_concurrent` - Maximum number of requests in flight (at least 1)
    /// * `requests_per_minute` - Maximum request starts per minute; 0 means unthrottled
    pub fn new(max_concurrent: usize, requests_per_minute: u32) -> Self {
        let min_delay = if requests_per_minute == 0 {
            Duration::ZERO
        } else {
            Duration::from_millis(60_000 / requests_per_minute as u64)
        };

        Self {
            semaphore: Arc::new(Semaphore::new(max_concurrent.max(1))),
            last_request: Arc::new(Mutex::new(None)),
            min_delay,
        }
    }

    /// Wait for a concurrency permit and for the spacing window, then return
    /// a guard that releases the permit when dropped.
    pub async fn acquire(&self) -> Result<RateLimitGuard, AcquireError> {
        let permit = self.semaphore.clone().acquire_owned().await?;

        if !self.min_delay.is_zero() {
            // Reserve the next start slot under the lock, sleep outside it
            let wait_until = {
                let mut last = self.last_request.lock();
                let now = Instant::now();
                let next = match *last {
                    Some(previous) => (previous + self.min_delay).max(now),
                    None => now,
                };
                *last = Some(next);
                next
            };
            tokio::time::sleep_until(wait_until).await;
        }

        Ok(RateLimitGuard { _permit: permit })
    }

    /// Get the current utilization (for monitoring)
    pub fn available_permits(&self) -> usize {
        self.semaphore.available_permits()
    }
}

/// Guard that holds a rate limit permit
/// The permit is automatically released when this is dropped
pub struct RateLimitGuard {
    _permit: OwnedSemaphorePermit,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant as StdInstant;
    use tokio::time::sleep;

    #[tokio::test]
    async fn test_rate_limiter_enforces_delay() {
        // Allow 2 concurrent, 600 per minute (1 per 100ms)
        let limiter = RateLimiter::new(2, 600);

        let start = StdInstant::now();

        let guard1 = limiter.acquire().await.unwrap();
        assert!(start.elapsed().as_millis() < 50, "First request should be immediate");
        drop(guard1);

        let _guard2 = limiter.acquire().await.unwrap();
        assert!(start.elapsed().as_millis() >= 90, "Second request should wait ~100ms");
    }

    #[tokio::test]
    async fn test_zero_rate_disables_spacing() {
        let limiter = RateLimiter::new(4, 0);
        let start = StdInstant::now();

        for _ in 0..4 {
            let _guard = limiter.acquire().await.unwrap();
        }

        assert!(start.elapsed().as_millis() < 50);
    }

    #[tokio::test]
    async fn test_concurrent_limit() {
        let limiter = Arc::new(RateLimiter::new(2, 0));

        let guard1 = limiter.acquire().await.unwrap();
        let _guard2 = limiter.acquire().await.unwrap();
        assert_eq!(limiter.available_permits(), 0);

        let limiter3 = limiter.clone();
        let handle3 = tokio::spawn(async move {
            let _guard = limiter3.acquire().await.unwrap();
            sleep(Duration::from_millis(10)).await;
        });

        sleep(Duration::from_millis(20)).await;
        assert!(!handle3.is_finished(), "third request should wait for a permit");

        drop(guard1);
        handle3.await.unwrap();
    }
}
