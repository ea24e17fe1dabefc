use std::cell::Cell;

use outcome_rail::{Either, Either3, Either4, Either7, Maybe, Outcome, Skip};

mod async_ops;

#[test]
fn map_left_targets_only_the_left_arm() {
    let calls = Cell::new(0);
    let double = |x: i32| {
        calls.set(calls.get() + 1);
        x * 2
    };

    assert_eq!(Either::<i32, &str>::left(5).map_left(double), Either::left(10));
    assert_eq!(Either::<i32, &str>::right("e").map_left(double), Either::right("e"));
    assert_eq!(calls.get(), 1);
}

#[test]
fn map_right_and_and_then_right() {
    let parsed = Either::<String, &str>::right("12").and_then_right(|raw| match raw.parse::<u32>() {
        Ok(n) => Either::right(n),
        Err(e) => Either::left(e.to_string()),
    });
    assert_eq!(parsed, Either::right(12));

    let rejected = Either::<String, &str>::right("x").and_then_right(|raw| match raw.parse::<u32>() {
        Ok(n) => Either::right(n),
        Err(e) => Either::left(e.to_string()),
    });
    assert!(rejected.is_left());

    assert_eq!(Either::<i32, i32>::right(1).map_right(|r| r + 1), Either::right(2));
}

#[test]
fn fold_runs_exactly_one_handler() {
    let left_calls = Cell::new(0);
    let right_calls = Cell::new(0);

    for input in [Either::<i32, &str>::left(1), Either::right("r")] {
        input.fold(|_| left_calls.set(left_calls.get() + 1), |_| right_calls.set(right_calls.get() + 1));
    }

    assert_eq!((left_calls.get(), right_calls.get()), (1, 1));
}

#[test]
fn observers_and_perform_return_self() {
    let seen = Cell::new(0);

    let same = Either::<i32, &str>::left(4).on_left(|l| seen.set(*l)).on_right(|_| seen.set(-1));
    assert_eq!(same, Either::left(4));
    assert_eq!(seen.get(), 4);

    let same = Either::<i32, &str>::right("r").perform(|l: &i32| seen.set(*l), Skip);
    assert_eq!(same, Either::right("r"));
    assert_eq!(seen.get(), 4);
}

#[test]
fn conversions_to_maybe_and_outcome() {
    let left = Either::<i32, &str>::left(1);
    let right = Either::<i32, &str>::right("r");

    assert_eq!(left.to_maybe_left(), Maybe::some(1));
    assert_eq!(left.to_maybe_right(), Maybe::none());
    assert_eq!(right.to_maybe_right(), Maybe::some("r"));

    assert_eq!(right.to_outcome_right(|l| l * 10), Outcome::success("r"));
    assert_eq!(left.to_outcome_right(|l| l * 10), Outcome::failure(10));
    assert_eq!(left.to_outcome_left(|r| r.len()), Outcome::success(1));

    assert_eq!(left.swap(), Either::right(1));
    assert_eq!(right.swap().swap(), right);
}

#[test]
fn either3_arms_pass_through_untouched() {
    let calls = Cell::new(0);
    let bump = |n: u8| {
        calls.set(calls.get() + 1);
        n + 1
    };

    let first: Either3<u8, &str, bool> = Either3::first(1);
    let second: Either3<u8, &str, bool> = Either3::second("two");
    let last: Either3<u8, &str, bool> = Either3::last(true);

    assert_eq!(first.map_first(bump), Either3::first(2));
    assert_eq!(second.map_first(bump), Either3::second("two"));
    assert_eq!(last.map_first(bump), Either3::last(true));
    assert_eq!(calls.get(), 1);

    assert_eq!(second.map_second(str::len), Either3::second(3));
    assert_eq!(last.and_then_last(|b| if b { Either3::first(9) } else { Either3::last(b) }), Either3::first(9));
    assert!(second.is_second());
    assert_eq!(last.to_maybe_last(), Maybe::some(true));
    assert_eq!(first.to_maybe_second(), Maybe::none());
}

#[test]
fn either4_fold_and_perform() {
    let shape: Either4<u8, u16, u32, u64> = Either4::third(3);
    assert_eq!(shape.fold(u64::from, u64::from, u64::from, |v| v), 3);

    let seen = Cell::new(0u32);
    let same = shape.perform(Skip, Skip, |v: &u32| seen.set(*v), Skip);
    assert_eq!(same, shape);
    assert_eq!(seen.get(), 3);
}

#[test]
fn either7_reaches_every_arm() {
    type Wide = Either7<u8, u8, u8, u8, u8, u8, u8>;
    let arms: [Wide; 7] = [
        Either7::first(1),
        Either7::second(2),
        Either7::third(3),
        Either7::fourth(4),
        Either7::fifth(5),
        Either7::sixth(6),
        Either7::last(7),
    ];

    let total: u32 = arms
        .iter()
        .map(|arm| arm.fold(u32::from, u32::from, u32::from, u32::from, u32::from, u32::from, u32::from))
        .sum();
    assert_eq!(total, 28);

    let sixth = arms[5].map_sixth(|v| v * 10).map_last(|v| v + 1);
    assert_eq!(sixth, Either7::sixth(60));
    assert!(arms[6].is_last());
    assert_eq!(arms[3].as_ref().to_maybe_fourth(), Maybe::some(&4));
}

#[cfg(feature = "serde")]
#[test]
fn serde_round_trip() {
    let value: Either3<u8, String, bool> = Either3::second("json".to_string());
    let json = serde_json::to_string(&value).unwrap();
    let back: Either3<u8, String, bool> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, value);
}
