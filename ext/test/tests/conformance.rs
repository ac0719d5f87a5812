//! Conformance tests for the engine's observable behavior
//!
//! Each section pins down one part of the contract: dispatch and value
//! cases over scalar subjects, guard chains, optional results, absent
//! subjects, and sequence shapes over lists.

use casus_test::prelude::*;

#[derive(Debug, PartialEq)]
struct Request {
    verb: String,
    attempts: u32,
}

// ═══════════════════════════════════════════════════════════════════════════════
// Scalar dispatch and value cases
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn type_case_invokes_its_handler() {
    let subject = String::from("Hello");
    let result = match_value(&subject, |m| {
        m.case_type::<String>().then(|s| s.len());
    });
    assert_eq!(result.unwrap(), 5);
}

#[test]
fn wrong_type_alone_is_a_match_error() {
    let subject = 5_i32;
    let result = match_value(&subject, |m| {
        m.case_type::<String>().then(|s| s.len());
    });
    assert!(result.is_err());
}

#[test]
fn dispatch_picks_the_case_with_the_subject_type() {
    let subject = 5_i32;
    let result = match_value(&subject, |m| {
        m.case_type::<String>().then(|_| "string");
        m.case_type::<i32>().then(|_| "int");
        m.case_type::<f64>().then(|_| "float");
    });
    assert_eq!(result.unwrap(), "int");
}

#[test]
fn struct_fields_are_usable_in_the_handler() {
    let subject = Request {
        verb: String::from("GET"),
        attempts: 2,
    };
    let result = match_value(&subject, |m| {
        m.case_type::<Request>()
            .then(|r| format!("{} x{}", r.verb, r.attempts));
        m.case_type::<Request>().then(|_| unreachable!());
    });
    assert_eq!(result.unwrap(), "GET x2");
}

#[test]
fn value_case_wins_over_a_later_type_case() {
    let subject = String::from("Hello");
    let result = match_value(&subject, |m| {
        m.case_value::<String, _>(["Hello"]).then(|_| 1);
        m.case_type::<String>().then(|_| 2);
    });
    assert_eq!(result.unwrap(), 1);
}

#[test]
fn candidate_lists_match_any_member() {
    let subject = String::from("Hello");
    let result = match_value(&subject, |m| {
        m.case_value::<String, _>(["Hello1", "Hello2"]).then(|_| 1);
        m.case_value::<String, _>(["Hello3", "Hello"]).then(|_| 2);
    });
    assert_eq!(result.unwrap(), 2);
}

#[test]
fn the_committed_result_is_returned() {
    let subject = String::from("Hello");
    let result = match_value(&subject, |m| {
        m.case_type::<String>().then(String::len);
    });
    assert_eq!(result.unwrap(), 5);
}

#[test]
fn no_matching_case_is_a_match_error() {
    let subject = String::from("Hello");
    let result = match_value(&subject, |m| {
        m.case_value::<String, _>(["Goodbye"]).then(|_| 1);
        m.case_type::<i32>().then(|n| *n);
    });

    let err = result.unwrap_err();
    assert_eq!(err.subject, "\"Hello\"");
    assert!(err.to_string().contains("no case matched"));
}

// ═══════════════════════════════════════════════════════════════════════════════
// Guard chains
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn failing_guard_on_the_only_case_is_a_match_error() {
    let subject = String::from("Hello");
    let result = match_value(&subject, |m| {
        m.case_value::<String, _>(["Hello"])
            .and(|s| s.len() > 10)
            .then(|s| s.len());
    });
    assert!(result.is_err());
}

#[test]
fn passing_guard_lets_the_case_commit() {
    let subject = String::from("Hello");
    let result = match_value(&subject, |m| {
        m.case_value::<String, _>(["Hello"])
            .and(|s| s.len() == 5)
            .then(|s| s.len());
    });
    assert_eq!(result.unwrap(), 5);
}

#[test]
fn failing_guard_falls_through_to_otherwise() {
    let subject = String::from("Hello");
    let result = match_value(&subject, |m| {
        m.case_type::<String>()
            .and(|s| s.len() > 10)
            .then(|s| s.len());
        m.otherwise(|| 6);
    });
    assert_eq!(result.unwrap(), 6);
}

#[test]
fn passing_guard_beats_otherwise() {
    let subject = String::from("Hello");
    let result = match_value(&subject, |m| {
        m.case_type::<String>()
            .and(|s| s.len() == 5)
            .then(|s| s.len());
        m.otherwise(|| 6);
    });
    assert_eq!(result.unwrap(), 5);
}

#[test]
fn any_failing_guard_in_a_chain_kills_the_arm() {
    let subject = String::from("Hello");
    let result = match_value(&subject, |m| {
        m.case_type::<String>()
            .and(|s| s.starts_with('H'))
            .and(|s| s.len() > 10)
            .then(|s| s.len());
        m.otherwise(|| 6);
    });
    assert_eq!(result.unwrap(), 6);
}

#[test]
fn a_fully_passing_guard_chain_commits() {
    let subject = String::from("Hello");
    let result = match_value(&subject, |m| {
        m.case_type::<String>()
            .and(|s| s.starts_with('H'))
            .and(|s| s.len() == 5)
            .then(|s| s.len());
        m.otherwise(|| 6);
    });
    assert_eq!(result.unwrap(), 5);
}

// ═══════════════════════════════════════════════════════════════════════════════
// Optional results and absent subjects
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn optional_results_pass_through_when_some() {
    let subject = String::from("Hello");
    let result = match_value(&subject, |m| {
        m.case_type::<String>().then(|s| Some(s.len()));
        m.case_type::<String>().then(|_| None);
    });
    assert_eq!(result.unwrap(), Some(5));
}

#[test]
fn a_committed_none_is_a_result_not_an_error() {
    let subject = String::from("Hello");
    let result = match_value(&subject, |m| {
        m.case_type::<String>().then(|_| None::<usize>);
        m.otherwise(|| Some(0));
    });
    assert_eq!(result.unwrap(), None);
}

#[test]
fn absent_subject_falls_to_otherwise() {
    let result = match_value(Subject::absent(), |m| {
        m.case_type::<String>().then(|_| 1);
        m.otherwise(|| 2);
    });
    assert_eq!(result.unwrap(), 2);
}

#[test]
fn case_absent_matches_a_missing_subject() {
    let missing: Option<&String> = None;
    let result = match_value(missing, |m| {
        m.case_absent().then(|| 1);
        m.otherwise(|| 2);
    });
    assert_eq!(result.unwrap(), 1);
}

#[test]
fn case_absent_guards_run_without_arguments() {
    let result = match_value(Option::<&i32>::None, |m| {
        m.case_absent().and(|| false).then(|| 1);
        m.case_absent().then(|| 2);
    });
    assert_eq!(result.unwrap(), 2);
}

#[test]
fn typed_none_is_an_ordinary_value_candidate() {
    let subject: Option<i32> = None;
    let result = match_value(&subject, |m| {
        m.case_value::<Option<i32>, _>([Some(1), None, Some(2)])
            .then(|_| 1);
        m.otherwise(|| 2);
    });
    assert_eq!(result.unwrap(), 1);
}

// ═══════════════════════════════════════════════════════════════════════════════
// Sequence shapes
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn empty_shape_matches_an_empty_list() {
    let list: Vec<String> = Vec::new();
    let result = match_value(&list, |m| {
        m.case_empty::<Vec<String>, _>(&seq::Empty).then(|_| 2 + 2);
    });
    assert_eq!(result.unwrap(), 4);
}

#[test]
fn empty_shape_rejects_a_populated_list() {
    let list = vec![String::new()];
    let result = match_value(&list, |m| {
        m.case_empty::<Vec<String>, _>(&seq::Empty).then(|_| 2 + 2);
    });
    assert!(result.is_err());
}

#[test]
fn one_shape_binds_the_only_element() {
    let list = vec![String::from("Hello")];
    let result = match_value(&list, |m| {
        m.case_single::<Vec<String>, _>(&seq::One)
            .then(|_, only| only.to_uppercase());
    });
    assert_eq!(result.unwrap(), "HELLO");
}

#[test]
fn one_shape_misses_an_empty_list() {
    let list: Vec<String> = Vec::new();
    let result = match_value(&list, |m| {
        m.case_single::<Vec<String>, _>(&seq::One)
            .then(|_, only| only.to_uppercase());
        m.otherwise(|| String::from("Goodbye"));
    });
    assert_eq!(result.unwrap(), "Goodbye");
}

#[test]
fn one_shape_misses_a_longer_list() {
    let list = vec![String::from("Hi"), String::from("Hello")];
    let result = match_value(&list, |m| {
        m.case_single::<Vec<String>, _>(&seq::One)
            .and(|_, only| only == "Hi")
            .then(|_, only| only.to_uppercase());
        m.case_single::<Vec<String>, _>(&seq::One)
            .and(|_, only| only == "Hello")
            .then(|_, only| only.to_uppercase());
    });
    assert!(result.is_err());
}

#[test]
fn literal_head_is_a_guard_over_the_one_shape() {
    let list = vec![String::from("Hello")];
    let result = match_value(&list, |m| {
        m.case_single::<Vec<String>, _>(&seq::One)
            .and(|_, only| only == "Hi")
            .then(|_, only| only);
        m.case_single::<Vec<String>, _>(&seq::One)
            .and(|_, only| only == "Hello")
            .then(|_, only| only.to_uppercase());
        m.case_single::<Vec<String>, _>(&seq::One)
            .and(|_, only| only == "Goodbye")
            .then(|_, only| only);
    });
    assert_eq!(result.unwrap(), "HELLO");
}

#[test]
fn head_and_rest_rebuild_the_original_list() {
    let list = vec![String::from("Hello"), String::from("Hi")];
    let result = match_value(&list, |m| {
        m.case_pair::<Vec<String>, _>(&seq::OneAndRest)
            .and(|_, head, _| head == "Hello")
            .then(|_, head, rest| {
                let mut rebuilt = vec![head];
                rebuilt.extend(rest);
                rebuilt
            });
        m.otherwise(Vec::new);
    });
    assert_eq!(result.unwrap(), list);
}

#[test]
fn rest_of_a_singleton_is_empty() {
    let list = vec![String::from("Hello")];
    let result = match_value(&list, |m| {
        m.case_pair::<Vec<String>, _>(&seq::OneAndRest)
            .then(|_, head, rest| {
                assert!(rest.is_empty());
                head.to_uppercase()
            });
    });
    assert_eq!(result.unwrap(), "HELLO");
}

#[test]
fn two_shape_binds_both_elements() {
    let list = vec![String::from("Hello"), String::from("Hi")];
    let result = match_value(&list, |m| {
        m.case_pair::<Vec<String>, _>(&seq::Two)
            .and(|_, _, second| second == "Hi")
            .then(|_, first, second| format!("{first}{second}"));
        m.otherwise(|| String::from("Goodbye"));
    });
    assert_eq!(result.unwrap(), "HelloHi");
}

#[test]
fn two_shape_misses_a_longer_list() {
    let list = ["Hello", "Hi", "End"].map(String::from).to_vec();
    let result = match_value(&list, |m| {
        m.case_pair::<Vec<String>, _>(&seq::Two)
            .and(|_, _, second| second == "Hi")
            .then(|_, first, second| format!("{first}{second}"));
        m.otherwise(|| String::from("Goodbye"));
    });
    assert_eq!(result.unwrap(), "Goodbye");
}

#[test]
fn rest_after_two_of_two_is_empty() {
    let list = vec![String::from("Hello"), String::from("Hi")];
    let result = match_value(&list, |m| {
        m.case_triple::<Vec<String>, _>(&seq::TwoAndRest)
            .then(|_, first, second, rest| {
                assert!(rest.is_empty());
                format!("{first}{second}")
            });
        m.otherwise(|| String::from("Goodbye"));
    });
    assert_eq!(result.unwrap(), "HelloHi");
}

#[test]
fn rest_carries_everything_past_the_first_two() {
    let list = ["Hello", "Hi", "Not end", "End"].map(String::from).to_vec();
    let result = match_value(&list, |m| {
        m.case_triple::<Vec<String>, _>(&seq::TwoAndRest)
            .then(|_, first, second, rest| {
                assert_eq!(rest, ["Not end", "End"]);
                format!("{first}{second}")
            });
        m.otherwise(|| String::from("Goodbye"));
    });
    assert_eq!(result.unwrap(), "HelloHi");
}

#[test]
fn a_failed_guard_yields_to_the_next_shape_case() {
    let list = vec![String::from("Hello"), String::from("Hi")];
    let result = match_value(&list, |m| {
        m.case_pair::<Vec<String>, _>(&seq::Two)
            .and(|_, _, second| second != "Hi")
            .then(|_, first, second| format!("{first}{second}"));
        m.case_pair::<Vec<String>, _>(&seq::Two)
            .and(|_, first, second| first == "Hello" && second == "Hi")
            .then(|_, _, _| String::from("Result"));
        m.otherwise(|| String::from("Goodbye"));
    });
    assert_eq!(result.unwrap(), "Result");
}

#[test]
fn guards_see_all_extracted_values() {
    let list = ["Hello", "Hi", "HI"].map(String::from).to_vec();
    let result = match_value(&list, |m| {
        m.case_triple::<Vec<String>, _>(&seq::TwoAndRest)
            .and(|_, _, second, rest| rest.contains(&second.to_uppercase()))
            .then(|_, first, _, rest| first.len() + rest.len());
        m.case_triple::<Vec<String>, _>(&seq::TwoAndRest)
            .then(|_, _, _, _| 4);
    });
    assert_eq!(result.unwrap(), 6);
}

#[test]
fn unit_results_run_for_side_effects() {
    let list = ["Hello", "Hi", "HI"].map(String::from).to_vec();
    let mut seen: Vec<String> = Vec::new();
    match_value(&list, |m| {
        m.case_triple::<Vec<String>, _>(&seq::TwoAndRest)
            .then(|_, _, _, rest| seen.extend(rest));
        m.case_single::<Vec<String>, _>(&seq::One)
            .then(|_, only| seen.push(only));
    })
    .unwrap();
    assert_eq!(seen, ["HI"]);
}

#[test]
fn a_none_from_a_list_handler_still_commits() {
    let list = ["Hello", "Hi", "HI"].map(String::from).to_vec();
    let result = match_value(&list, |m| {
        m.case_triple::<Vec<String>, _>(&seq::TwoAndRest)
            .then(|_, _, _, _| None);
        m.case_single::<Vec<String>, _>(&seq::One).then(|_, _| Some(1));
    });
    assert_eq!(result.unwrap(), None);
}

#[test]
fn lists_of_optional_elements_match_by_shape() {
    let list = vec![Some(String::from("Hello")), None, Some(String::from("HI"))];
    let result = match_value(&list, |m| {
        m.case_triple::<Vec<Option<String>>, _>(&seq::TwoAndRest)
            .and(|_, first, _, _| first.as_deref() == Some("Hello"))
            .then(|_, _, _, _| 1);
        m.otherwise(|| 2);
    });
    assert_eq!(result.unwrap(), 1);
}

#[test]
fn a_none_element_is_matched_positionally() {
    let list = vec![Some(String::from("Hello")), None, Some(String::from("HI"))];
    let result = match_value(&list, |m| {
        m.case_triple::<Vec<Option<String>>, _>(&seq::TwoAndRest)
            .and(|_, _, second, _| second.as_deref() == Some("Hi"))
            .then(|_, _, _, _| 1);
        m.case_triple::<Vec<Option<String>>, _>(&seq::TwoAndRest)
            .and(|_, _, second, _| second.is_none())
            .then(|_, _, _, _| 2);
    });
    assert_eq!(result.unwrap(), 2);
}

// ═══════════════════════════════════════════════════════════════════════════════
// Engine behavior
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn commitment_stops_consulting_extractors() {
    let list = vec![1_i32, 2];
    let misses = Probe::new(seq::One);
    let commits = Probe::new(seq::Two);
    let skipped = Probe::new(seq::OneAndRest);

    let result = match_value(&list, |m| {
        m.case_single::<Vec<i32>, _>(&misses).then(|_, only| only);
        m.case_pair::<Vec<i32>, _>(&commits).then(|_, a, b| a + b);
        m.case_pair::<Vec<i32>, _>(&skipped).then(|_, head, _| head);
    });

    assert_eq!(result.unwrap(), 3);
    assert_eq!(misses.hits(), 1);
    assert_eq!(commits.hits(), 1);
    assert_eq!(skipped.hits(), 0);
}

#[test]
fn erased_subjects_dispatch_across_types() {
    fn describe(subject: Subject<'_>) -> String {
        match_value(subject, |m| {
            m.case_type::<i32>().then(|n| format!("int {n}"));
            m.case_type::<String>().then(|s| format!("text {s}"));
            m.case_absent().then(|| String::from("nothing"));
        })
        .unwrap()
    }

    let n = 7_i32;
    let s = String::from("hey");
    assert_eq!(describe(Subject::of(&n)), "int 7");
    assert_eq!(describe(Subject::of(&s)), "text hey");
    assert_eq!(describe(Subject::absent()), "nothing");
}

#[test]
fn text_shapes_drive_protocol_style_dispatch() {
    let classify = |line: &String| -> String {
        match_value(line, |m| {
            m.case_pair::<String, _>(&text::SplitOnce::new("="))
                .then(|_, key, value| format!("set {key} to {value}"));
            m.case_single::<String, _>(&text::ParseInt)
                .and(|_, n| *n >= 0)
                .then(|_, n| format!("count {n}"));
            m.otherwise(|| String::from("noise"));
        })
        .unwrap()
    };

    assert_eq!(classify(&String::from("level=debug")), "set level to debug");
    assert_eq!(classify(&String::from("42")), "count 42");
    assert_eq!(classify(&String::from("???")), "noise");
}

#[test]
fn recursive_head_rest_matching_consumes_a_list() {
    fn sum(values: &Vec<i64>) -> i64 {
        match_value(values, |m| {
            m.case_empty::<Vec<i64>, _>(&seq::Empty).then(|_| 0);
            m.case_pair::<Vec<i64>, _>(&seq::OneAndRest)
                .then(|_, head, rest| head + sum(&rest));
        })
        .unwrap()
    }

    assert_eq!(sum(&vec![1, 2, 3, 4]), 10);
    assert_eq!(sum(&Vec::new()), 0);
}
