use std::cell::RefCell;

use proptest::prelude::*;
use trackway::combinators::{outcome, outcome_sequence, sequence};
use trackway::prelude::*;

fn checked(x: i32) -> Outcome<String, i32> {
    if x < 0 {
        Outcome::Failure(format!("{x} < 0"))
    } else {
        Outcome::Success(x)
    }
}

proptest! {
    #[test]
    fn map_failure_never_touches_a_success(s in any::<i64>()) {
        let o: Outcome<String, i64> = Outcome::Success(s);
        prop_assert_eq!(outcome::map_failure(o, |e| e.len()), Outcome::Success(s));
    }

    #[test]
    fn map_success_never_touches_a_failure(e in ".*") {
        let o: Outcome<String, i64> = Outcome::Failure(e.clone());
        prop_assert_eq!(outcome::map_success(o, |s| s.wrapping_mul(2)), Outcome::Failure(e));
    }

    #[test]
    fn identity_map_round_trips(v in any::<u32>()) {
        let mapped = OutcomeWrapper::<(), u32>::of_success(v).map_success(|x| x).into_value();
        prop_assert_eq!(mapped, OutcomeWrapper::<(), u32>::of_success(v).into_value());
    }

    #[test]
    fn fail_fast_stops_at_first_failure(xs in prop::collection::vec(-50_i32..50, 0..20)) {
        let calls = RefCell::new(0_usize);
        let out = SequenceWrapper::from_sequence(xs.clone())
            .map_to_outcome(|x| {
                *calls.borrow_mut() += 1;
                checked(x)
            })
            .into_value();

        match xs.iter().position(|x| *x < 0) {
            Some(i) => {
                prop_assert_eq!(out, Outcome::Failure(format!("{} < 0", xs[i])));
                prop_assert_eq!(*calls.borrow(), i + 1);
            }
            None => {
                prop_assert_eq!(out, Outcome::Success(xs.clone()));
                prop_assert_eq!(*calls.borrow(), xs.len());
            }
        }
    }

    #[test]
    fn wrapper_agrees_with_combinator(xs in prop::collection::vec(-5_i32..20, 0..10)) {
        let chained = OutcomeSequenceWrapper::<String, i32>::from_sequence(xs.clone())
            .map_successes_to_outcome(checked)
            .map_successes(|x| x * 3)
            .into_value();
        let direct = outcome_sequence::map_successes(
            outcome_sequence::map_successes_to_outcome(
                outcome_sequence::construct_successes_from_sequence(xs),
                checked,
            ),
            |x| x * 3,
        );
        prop_assert_eq!(chained, direct);
    }

    #[test]
    fn tap_replication_repeats_in_place(xs in prop::collection::vec(0_usize..4, 0..10)) {
        let out = sequence::tap_to_sequence(xs.clone(), |n| 0..*n);
        let expected: Vec<usize> = xs.iter().flat_map(|n| std::iter::repeat(*n).take(*n)).collect();
        prop_assert_eq!(out, expected);
    }
}

#[test]
fn sqrt_scenario() {
    fn sqrt_if_non_negative(x: f64) -> Outcome<&'static str, f64> {
        if x < 0.0 {
            Outcome::Failure("negative")
        } else {
            Outcome::Success(x.sqrt())
        }
    }

    let neg = OutcomeWrapper::of_success(-25.0).map_success_to_outcome(sqrt_if_non_negative);
    assert_eq!(neg.into_value(), Outcome::Failure("negative"));

    let pos = OutcomeWrapper::of_success(25.0).map_success_to_outcome(sqrt_if_non_negative);
    assert_eq!(pos.into_value(), Outcome::Success(5.0));
}

#[test]
fn flat_map_short_circuit_skips_later_steps() {
    let called = RefCell::new(false);
    let out = OutcomeWrapper::<String, i32>::of_success(-1)
        .map_success_to_outcome(checked)
        .map_success_to_outcome(|x| {
            *called.borrow_mut() = true;
            checked(x + 1)
        });
    assert_eq!(out.into_value(), Outcome::Failure("-1 < 0".to_string()));
    assert!(!*called.borrow());
}

#[test]
fn failure_recovery_cardinality() {
    let empty = OutcomeSequenceWrapper::<&str, char>::of_failure("e")
        .map_failure_to_sequence::<(), _>(|_| vec![]);
    assert_eq!(empty.into_value(), Outcome::Success(vec![]));

    let two = OutcomeSequenceWrapper::<&str, char>::of_failure("e")
        .map_failure_to_sequence::<(), _>(|_| vec!['a', 'b']);
    assert_eq!(two.into_value(), Outcome::Success(vec!['a', 'b']));
}

#[test]
fn tap_replication_and_drop() {
    let doubled = OutcomeSequenceWrapper::<(), _>::from_sequence(vec!["x", "y"])
        .tap_successes_to_sequence(|_| [1, 2]);
    assert_eq!(doubled.into_value(), Outcome::Success(vec!["x", "x", "y", "y"]));

    let dropped = OutcomeSequenceWrapper::<(), _>::from_sequence(vec!["x", "y"])
        .tap_successes_to_sequence(|s| if *s == "x" { vec![] } else { vec![()] });
    assert_eq!(dropped.into_value(), Outcome::Success(vec!["y"]));
}

#[test]
fn pipe_and_compose_apply_left_to_right() {
    let piped = trackway::pipe!(2, |x: i32| x + 3, |x: i32| x * 10, |x: i32| x.to_string());
    assert_eq!(piped, "50");

    let f = trackway::compose!(checked, |o| outcome::map_success(o, |x| x * 2));
    assert_eq!(f(4), Outcome::Success(8));
    assert_eq!(f(-4), Outcome::Failure("-4 < 0".to_string()));

    assert_eq!(7_i32.pipe(checked).into_result(), Ok(7));
}

#[test]
fn wrong_track_read_is_an_error() {
    let o = Outcome::<&str, i32>::Failure("e");
    assert_eq!(
        o.try_success(),
        Err(TrackError::WrongTrack {
            expected: Track::Success,
            found: Track::Failure
        })
    );
    assert_eq!(o.try_failure(), Ok(&"e"));
}
