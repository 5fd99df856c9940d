//! Timer futures shared by components on both targets.

/// Resolve after `ms` milliseconds.
///
/// Backed by a `gloo-timers` future on wasm and `tokio::time` on native, so
/// callers can await it from any component handler without caring which
/// platform they rendered on.
#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(ms: u64) {
    gloo_timers::future::TimeoutFuture::new(ms as u32).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}
