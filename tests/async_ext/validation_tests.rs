//! Tests for async validation functions.

use outcome_rail::prelude_async::*;

fn validate_positive(n: i32) -> std::future::Ready<Validation<i32, &'static str>> {
    std::future::ready(if n > 0 {
        Validation::success(n)
    } else {
        Validation::failure("must be positive")
    })
}

fn validate_even(n: i32) -> std::future::Ready<Validation<i32, &'static str>> {
    std::future::ready(if n % 2 == 0 {
        Validation::success(n)
    } else {
        Validation::failure("must be even")
    })
}

fn validate_less_than_100(n: i32) -> std::future::Ready<Validation<i32, &'static str>> {
    std::future::ready(if n < 100 {
        Validation::success(n)
    } else {
        Validation::failure("must be less than 100")
    })
}

#[tokio::test]
async fn validate_all_async_all_valid() {
    let result =
        validate_all_async([validate_positive(10), validate_even(10), validate_less_than_100(10)])
            .await;

    assert_eq!(result, Validation::success(vec![10, 10, 10]));
}

#[tokio::test]
async fn validate_all_async_keeps_every_error_in_order() {
    let result =
        validate_all_async([validate_positive(-5), validate_even(3), validate_less_than_100(50)])
            .await;

    let errors: Vec<_> = result.errors().copied().collect();
    assert_eq!(errors, vec!["must be positive", "must be even"]);
}

#[tokio::test]
async fn validate_all_async_empty_input_is_valid() {
    let result = validate_all_async(Vec::<std::future::Ready<Validation<i32, &str>>>::new()).await;
    assert_eq!(result, Validation::success(Vec::new()));
}

#[tokio::test]
async fn validate_seq_async_threads_the_value() {
    let result = validate_seq_async(4, [validate_positive, validate_even, validate_less_than_100]).await;
    assert_eq!(result, Validation::success(4));
}

#[tokio::test]
async fn validate_seq_async_stops_at_first_failure() {
    let result = validate_seq_async(-3, [validate_positive, validate_even]).await;
    assert_eq!(result.errors().copied().collect::<Vec<_>>(), vec!["must be positive"]);
}
