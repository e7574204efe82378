//! Tests for the shared sliding-window limiter.

use cmtt_rate_limit::{RateLimiter, WindowQuota};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;

fn per_second(calls: u32) -> RateLimiter {
    RateLimiter::new(WindowQuota::new(calls, Duration::from_secs(1)).expect("valid quota"))
}

#[tokio::test(start_paused = true)]
async fn test_extra_call_denied_until_oldest_expires() {
    let limiter = per_second(3);

    assert!(limiter.try_acquire());
    tokio::time::advance(Duration::from_millis(100)).await;
    assert!(limiter.try_acquire());
    assert!(limiter.try_acquire());

    // Fourth call inside the window is denied
    assert!(!limiter.try_acquire());
    tokio::time::advance(Duration::from_millis(899)).await;
    assert!(!limiter.try_acquire(), "Oldest call is only 999ms old");

    tokio::time::advance(Duration::from_millis(1)).await;
    assert!(limiter.try_acquire(), "Oldest call is now one second old");

    // Only one slot was freed
    assert!(!limiter.try_acquire());
    assert_eq!(limiter.in_window(), 3);
}

#[tokio::test(start_paused = true)]
async fn test_acquire_sleeps_until_window_frees() {
    let limiter = per_second(3);
    let start = Instant::now();

    for _ in 0..3 {
        limiter.acquire().await;
    }
    assert_eq!(Instant::now(), start, "First three calls do not wait");

    limiter.acquire().await;
    assert_eq!(Instant::now() - start, Duration::from_secs(1));
}

#[tokio::test(start_paused = true)]
async fn test_wait_time_reports_remaining() {
    let limiter = per_second(1);
    assert_eq!(limiter.wait_time(), Duration::ZERO);

    limiter.acquire().await;
    tokio::time::advance(Duration::from_millis(250)).await;
    assert_eq!(limiter.wait_time(), Duration::from_millis(750));
}

#[tokio::test(start_paused = true)]
async fn test_acquire_within_times_out_without_recording() {
    let limiter = per_second(1);
    limiter.acquire().await;

    let err = limiter
        .acquire_within(Duration::from_millis(500))
        .await
        .expect_err("Window cannot free up within 500ms");
    assert_eq!(err.limit, Some(Duration::from_millis(500)));
    assert_eq!(limiter.in_window(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_acquire_within_succeeds_when_deadline_allows() -> anyhow::Result<()> {
    let limiter = per_second(1);
    let start = Instant::now();
    limiter.acquire().await;

    limiter.acquire_within(Duration::from_secs(2)).await?;
    assert_eq!(Instant::now() - start, Duration::from_secs(1));
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_acquire_until_passed_deadline() {
    let limiter = per_second(1);
    let deadline = Instant::now() + Duration::from_millis(100);
    limiter.acquire().await;
    tokio::time::advance(Duration::from_millis(200)).await;

    let err = limiter
        .acquire_until(deadline)
        .await
        .expect_err("Deadline already passed");
    assert_eq!(err.limit, Some(Duration::ZERO));

    tokio::time::advance(Duration::from_millis(800)).await;
    assert!(limiter.acquire_until(Instant::now()).await.is_ok());
}

#[tokio::test(start_paused = true)]
async fn test_concurrent_callers_respect_aggregate_cap() {
    let limiter = per_second(3);
    let grants = Arc::new(Mutex::new(Vec::new()));

    let mut handles = Vec::new();
    for _ in 0..10 {
        let limiter = limiter.clone();
        let grants = Arc::clone(&grants);
        handles.push(tokio::spawn(async move {
            limiter.acquire().await;
            grants.lock().await.push(Instant::now());
        }));
    }
    for handle in handles {
        handle.await.expect("task panicked");
    }

    let mut grants = grants.lock().await.clone();
    grants.sort();
    assert_eq!(grants.len(), 10);

    // Any four consecutive grants span at least one full window
    for pair in grants.windows(4) {
        assert!(
            pair[3] - pair[0] >= Duration::from_secs(1),
            "More than 3 calls within one second: {:?}",
            pair
        );
    }
}

#[tokio::test]
async fn test_clones_share_history() {
    let limiter = per_second(2);
    let clone = limiter.clone();

    assert!(limiter.try_acquire());
    assert!(clone.try_acquire());
    assert!(!limiter.try_acquire());
    assert_eq!(clone.in_window(), 2);
}
