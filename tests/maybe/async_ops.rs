use std::sync::atomic::{AtomicU32, Ordering};

use outcome_rail::Maybe;

#[tokio::test]
async fn fold_async_awaits_only_the_selected_handler() {
    let some_calls = AtomicU32::new(0);
    let none_calls = AtomicU32::new(0);

    let value = Maybe::some(2)
        .fold_async(
            |v| {
                some_calls.fetch_add(1, Ordering::SeqCst);
                async move { v * 10 }
            },
            || {
                none_calls.fetch_add(1, Ordering::SeqCst);
                async { 0 }
            },
        )
        .await;

    assert_eq!(value, 20);
    assert_eq!(some_calls.load(Ordering::SeqCst), 1);
    assert_eq!(none_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn fold_async_matches_fold() {
    for input in [Maybe::some(3), Maybe::none()] {
        let sync = input.fold(|v| v + 1, || -1);
        let awaited = input
            .fold_async(|v| async move { v + 1 }, || async { -1 })
            .await;
        assert_eq!(sync, awaited);
    }
}

#[tokio::test]
async fn map_and_and_then_async_short_circuit_on_none() {
    let calls = AtomicU32::new(0);

    let mapped = Maybe::<i32>::none()
        .map_async(|v| {
            calls.fetch_add(1, Ordering::SeqCst);
            async move { v + 1 }
        })
        .await;
    assert_eq!(mapped, Maybe::none());

    let chained = Maybe::some(4)
        .and_then_async(|v| async move { if v > 3 { Maybe::some(v) } else { Maybe::none() } })
        .await;
    assert_eq!(chained, Maybe::some(4));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn observers_and_fallback_async() {
    let seen = AtomicU32::new(0);

    let same = Maybe::some(7u32)
        .on_some_async(|v| {
            seen.store(*v, Ordering::SeqCst);
            async {}
        })
        .await
        .on_none_async(|| std::future::ready(seen.store(0, Ordering::SeqCst)))
        .await;
    assert_eq!(same, Maybe::some(7));
    assert_eq!(seen.load(Ordering::SeqCst), 7);

    let recovered = Maybe::<u32>::none().fallback_to_async(|| async { Maybe::some(1) }).await;
    assert_eq!(recovered, Maybe::some(1));
}
