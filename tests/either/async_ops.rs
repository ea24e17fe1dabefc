use std::sync::atomic::{AtomicU32, Ordering};

use outcome_rail::{Either, Either3};

#[tokio::test]
async fn map_left_async_skips_the_right_arm() {
    let calls = AtomicU32::new(0);

    let untouched = Either::<i32, &str>::right("r")
        .map_left_async(|l| {
            calls.fetch_add(1, Ordering::SeqCst);
            async move { l + 1 }
        })
        .await;
    assert_eq!(untouched, Either::right("r"));
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    let mapped = Either::<i32, &str>::left(1).map_left_async(|l| async move { l + 1 }).await;
    assert_eq!(mapped, Either::left(2));
}

#[tokio::test]
async fn fold_async_matches_fold() {
    for input in [Either3::<u8, u16, u32>::first(1), Either3::second(2), Either3::last(3)] {
        let sync = input.fold(u32::from, u32::from, |v| v);
        let awaited = input
            .fold_async(
                |v| async move { u32::from(v) },
                |v| async move { u32::from(v) },
                |v| async move { v },
            )
            .await;
        assert_eq!(sync, awaited);
    }
}

#[tokio::test]
async fn and_then_and_observers_async() {
    let seen = AtomicU32::new(0);

    let chained: Either3<u32, u32, u32> = Either3::<u32, u32, u32>::second(5)
        .and_then_second_async(|v| async move { Either3::last(v * 2) })
        .await
        .on_last_async(|v| std::future::ready(seen.store(*v, Ordering::SeqCst)))
        .await
        .on_first_async(|_| std::future::ready(seen.store(0, Ordering::SeqCst)))
        .await;

    assert_eq!(chained, Either3::last(10));
    assert_eq!(seen.load(Ordering::SeqCst), 10);
}
