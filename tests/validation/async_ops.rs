use std::sync::atomic::{AtomicU32, Ordering};

use outcome_rail::{ErrorList, Validation};

fn two_errors() -> Validation<i32, &'static str> {
    Validation::failure("too short").zip_with(Validation::failure("missing digit"), |a, _: i32| a)
}

#[tokio::test]
async fn fold_async_matches_fold() {
    for input in [Validation::<i32, &str>::success(3), two_errors()] {
        let sync = input.clone().fold(|v| v.to_string(), |errs| errs.into_vec().join("|"));
        let awaited = input
            .fold_async(
                |v| async move { v.to_string() },
                |errs| async move { errs.into_vec().join("|") },
            )
            .await;
        assert_eq!(sync, awaited);
    }
}

#[tokio::test]
async fn failing_map_and_bind_keep_every_error() {
    let calls = AtomicU32::new(0);

    let mapped = two_errors()
        .map_async(|v| {
            calls.fetch_add(1, Ordering::SeqCst);
            async move { v + 1 }
        })
        .await;
    let bound = mapped
        .and_then_async(|v| {
            calls.fetch_add(1, Ordering::SeqCst);
            async move { Validation::<i32, &str>::success(v * 2) }
        })
        .await;

    assert_eq!(calls.load(Ordering::SeqCst), 0);
    let expected = ErrorList::try_from_iter(["too short", "missing digit"]).expect("non-empty");
    assert_eq!(bound, Validation::failures(expected));
}

#[tokio::test]
async fn successful_chain_runs_each_step() {
    let result = Validation::<i32, &str>::success(2)
        .and_then_async(|v| async move { Validation::success(v * 2) })
        .await
        .map_async(|v| async move { v + 1 })
        .await;
    assert_eq!(result, Validation::success(5));

    let rejected = Validation::<i32, &str>::success(2)
        .and_then_async(|_| async { Validation::<i32, &str>::failure("odd") })
        .await;
    assert_eq!(rejected, Validation::failure("odd"));
}

#[tokio::test]
async fn observers_fire_only_for_their_variant() {
    let seen = AtomicU32::new(0);

    let result = two_errors()
        .on_success_async(|_| std::future::ready(seen.fetch_add(100, Ordering::SeqCst)))
        .await
        .on_failure_async(|errs| {
            std::future::ready(seen.fetch_add(errs.len() as u32, Ordering::SeqCst))
        })
        .await;

    assert_eq!(result, two_errors());
    assert_eq!(seen.load(Ordering::SeqCst), 2);

    let valid = Validation::<i32, &str>::success(7)
        .on_failure_async(|_| std::future::ready(seen.fetch_add(100, Ordering::SeqCst)))
        .await
        .on_success_async(|v| std::future::ready(seen.fetch_add(*v as u32, Ordering::SeqCst)))
        .await;

    assert_eq!(valid, Validation::success(7));
    assert_eq!(seen.load(Ordering::SeqCst), 9);
}

#[tokio::test]
async fn fallback_to_async_only_runs_on_failure() {
    let calls = AtomicU32::new(0);
    let recover = || {
        calls.fetch_add(1, Ordering::SeqCst);
        async { Validation::<i32, &str>::success(0) }
    };

    assert_eq!(Validation::success(1).fallback_to_async(recover).await, Validation::success(1));
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    assert_eq!(two_errors().fallback_to_async(recover).await, Validation::success(0));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}
