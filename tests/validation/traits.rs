use smallvec::SmallVec;

use outcome_rail::{validate, ErrorList, Outcome, ValidateAll, Validation};

fn positive(n: i32) -> Validation<i32, String> {
    if n > 0 {
        Validation::success(n)
    } else {
        Validation::failure(format!("{n} is not positive"))
    }
}

#[test]
fn three_checks_two_failures_in_evaluation_order() {
    let all = (positive(1), positive(-2), positive(-3)).all();
    let errors: Vec<_> = all.errors().cloned().collect();
    assert_eq!(errors, vec!["-2 is not positive".to_string(), "-3 is not positive".to_string()]);
}

#[test]
fn validate_all_returns_the_tuple_when_every_check_passes() {
    assert_eq!((positive(1),).all(), Validation::success((1,)));
    assert_eq!((positive(1), positive(2)).all(), Validation::success((1, 2)));
    assert_eq!(
        (positive(1), positive(2), positive(3), positive(4), positive(5), positive(6)).all(),
        Validation::success((1, 2, 3, 4, 5, 6))
    );
}

#[test]
fn validate_all_mixes_payload_types() {
    let name = Validation::<&str, &str>::success("ada");
    let age = Validation::<u8, &str>::success(36);
    let admin = Validation::<bool, &str>::failure("role.unknown");
    let email = Validation::<String, &str>::failure("email.format");

    let all = (name, age, admin, email).all();
    assert_eq!(all.errors().copied().collect::<Vec<_>>(), vec!["role.unknown", "email.format"]);
}

#[test]
fn validate_macro_builds_from_named_values() {
    #[derive(Debug, PartialEq)]
    struct Range {
        low: i32,
        high: i32,
    }

    let range = validate!(low = positive(1), high = positive(10) => Range { low, high });
    assert_eq!(range, Validation::success(Range { low: 1, high: 10 }));

    let broken = validate!(low = positive(0), high = positive(-1) => Range { low, high });
    assert_eq!(broken.errors().count(), 2);

    let tuple = validate!(positive(1), positive(2), positive(3));
    assert_eq!(tuple, Validation::success((1, 2, 3)));
}

#[test]
fn collecting_validations_preserves_all_errors() {
    let items = vec![Validation::success(10), Validation::failure("bad"), Validation::failure("worse")];

    let collected: Validation<Vec<i32>, &str> = items.into_iter().collect();
    assert_eq!(collected.errors().copied().collect::<Vec<_>>(), vec!["bad", "worse"]);

    let all_good: Validation<Vec<i32>, &str> = (1..=3).map(Validation::success).collect();
    assert_eq!(all_good, Validation::success(vec![1, 2, 3]));
}

#[test]
fn collecting_outcomes_and_results_does_not_stop_early() {
    let outcomes = vec![Outcome::success(1), Outcome::failure("err1"), Outcome::failure("err2")];
    let collected: Validation<Vec<i32>, &str> = outcomes.into_iter().collect();
    assert_eq!(collected.errors().count(), 2);

    let results = vec![Ok(1), Err("err1"), Ok(2)];
    let collected: Validation<SmallVec<[i32; 4]>, &str> = results.into_iter().collect();
    assert_eq!(collected.into_result().unwrap_err(), ErrorList::new("err1"));
}
