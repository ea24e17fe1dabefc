use std::cell::Cell;

use outcome_rail::{Either, Error, ErrorKind, Maybe, Outcome, Skip, Validation};


fn parse_port(raw: &str) -> Outcome<u16> {
    match raw.parse::<u16>() {
        Ok(port) => Outcome::success(port),
        Err(e) => Outcome::failure(Error::validation("port.parse", e.to_string())),
    }
}

#[test]
fn fold_runs_exactly_one_handler() {
    let success_calls = Cell::new(0);
    let failure_calls = Cell::new(0);
    let count = |cell: &Cell<u32>| cell.set(cell.get() + 1);

    let label = parse_port("80").fold(
        |port| {
            count(&success_calls);
            format!("port {port}")
        },
        |err| {
            count(&failure_calls);
            err.code().to_string()
        },
    );
    assert_eq!(label, "port 80");

    let label = parse_port("http").fold(
        |port| {
            count(&success_calls);
            format!("port {port}")
        },
        |err| {
            count(&failure_calls);
            err.code().to_string()
        },
    );
    assert_eq!(label, "port.parse");
    assert_eq!((success_calls.get(), failure_calls.get()), (1, 1));
}

#[test]
fn map_short_circuits_on_failure() {
    let calls = Cell::new(0);

    let mapped = Outcome::<i32, &str>::failure("e").map(|x| {
        calls.set(calls.get() + 1);
        x + 1
    });

    assert_eq!(mapped, Outcome::failure("e"));
    assert_eq!(calls.get(), 0);
}

#[test]
fn and_then_surfaces_the_first_failure() {
    let downstream = Cell::new(0);

    let result: Outcome<i32, &str> = Outcome::<i32, &str>::success(1)
        .and_then(|_| Outcome::<i32, &str>::failure("first"))
        .and_then(|v| {
            downstream.set(downstream.get() + 1);
            Outcome::failure(if v > 0 { "second" } else { "third" })
        });

    assert_eq!(result, Outcome::failure("first"));
    assert_eq!(downstream.get(), 0);
}

#[test]
fn map_err_and_or_else_work_on_the_error_side() {
    let failed: Outcome<u16> = parse_port("-1");
    let recoded = failed.clone().map_err(|err| err.with_metadata("input", "-1"));
    assert_eq!(
        recoded.fold(|_| None, |e| e.metadata_value("input").map(str::to_owned)),
        Some("-1".to_string())
    );

    let recovered = failed.or_else(|_| Outcome::<u16, ()>::success(8080));
    assert_eq!(recovered, Outcome::success(8080));

    let untouched = Outcome::<u16, &str>::success(1).map_err(|e| e.len());
    assert_eq!(untouched, Outcome::success(1));
}

#[test]
fn observers_return_self_unchanged() {
    let seen = Cell::new(0u16);
    let errors = Cell::new(0);

    let ok = parse_port("443")
        .on_success(|p| seen.set(*p))
        .on_failure(|_| errors.set(errors.get() + 1));
    assert_eq!(ok, Outcome::success(443));
    assert_eq!(seen.get(), 443);
    assert_eq!(errors.get(), 0);

    let failed = parse_port("x").on_success(|p| seen.set(*p)).on_failure(|e| {
        assert_eq!(e.kind(), ErrorKind::Validation);
        errors.set(errors.get() + 1)
    });
    assert!(failed.is_failure());
    assert_eq!(seen.get(), 443);
    assert_eq!(errors.get(), 1);
}

#[test]
fn perform_runs_only_the_matching_handler() {
    let successes = Cell::new(0);
    let failures = Cell::new(0);

    let out = Outcome::<i32, &str>::success(1).perform(
        |_: &i32| successes.set(successes.get() + 1),
        |_: &&str| failures.set(failures.get() + 1),
    );
    assert_eq!(out, Outcome::success(1));

    let out = Outcome::<i32, &str>::failure("e").perform(Skip, |_: &&str| failures.set(failures.get() + 1));
    assert_eq!(out, Outcome::failure("e"));

    let out = Outcome::<i32, &str>::failure("e").perform(|_: &i32| successes.set(successes.get() + 1), Skip);
    assert_eq!(out, Outcome::failure("e"));

    assert_eq!((successes.get(), failures.get()), (1, 1));
}

#[test]
fn fallback_to_and_fallback_to_with() {
    let primary = Outcome::<i32, &str>::success(1);
    let broken = Outcome::<i32, &str>::failure("down");
    let alt = Outcome::success(2);

    assert_eq!(primary.fallback_to(alt), primary);
    assert_eq!(broken.fallback_to(alt), alt);

    let calls = Cell::new(0);
    let lazy = || {
        calls.set(calls.get() + 1);
        alt
    };
    assert_eq!(primary.fallback_to_with(lazy), primary);
    assert_eq!(calls.get(), 0);
    assert_eq!(broken.fallback_to_with(lazy), alt);
    assert_eq!(calls.get(), 1);
}

#[test]
fn round_trip_through_maybe() {
    assert_eq!(Outcome::<i32, &str>::success(5).to_maybe().to_outcome("e"), Outcome::success(5));
    assert_eq!(Outcome::<i32, &str>::failure("lost").to_maybe(), Maybe::none());
    assert_eq!(Maybe::<i32>::none().to_outcome("e"), Outcome::failure("e"));
}

#[test]
fn conversions_to_validation_and_either() {
    let invalid = Outcome::<i32, &str>::failure("only").to_validation();
    assert_eq!(invalid.errors().copied().collect::<Vec<_>>(), vec!["only"]);
    assert_eq!(Outcome::<i32, &str>::success(1).to_validation(), Validation::success(1));

    assert_eq!(Outcome::<i32, &str>::success(1).to_either(), Either::right(1));
    assert_eq!(Outcome::<i32, &str>::failure("e").to_either(), Either::left("e"));
}

#[test]
fn std_result_interop() {
    let ok: Outcome<i32, String> = Ok(3).into();
    assert_eq!(ok, Outcome::success(3));

    let err: Outcome<i32, String> = Err("bad".to_string()).into();
    assert!(err.is_failure());

    let back: Result<i32, String> = ok.into();
    assert_eq!(back, Ok(3));
    assert_eq!(Outcome::<i32, &str>::failure("e").into_result(), Err("e"));
    assert_eq!(Outcome::from_result(Ok::<_, ()>(1)), Outcome::success(1));
}

#[test]
fn as_ref_borrows_both_sides() {
    let failed: Outcome<String, String> = Outcome::failure("oops".to_string());
    assert_eq!(failed.as_ref().map_err(|e| e.len()), Outcome::failure(4));
    assert!(failed.is_failure());
}

#[cfg(feature = "serde")]
#[test]
fn serde_round_trip() {
    let failed: Outcome<u16> = Outcome::failure(Error::conflict("user.exists", "duplicate user"));
    let json = serde_json::to_string(&failed).unwrap();
    let back: Outcome<u16> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, failed);
}
