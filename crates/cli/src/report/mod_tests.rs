#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use termcolor::Buffer;

use super::*;

#[test]
fn compute_wraps_factorial_of() {
    assert_eq!(Outcome::compute(5).result, Ok(120));
    assert_eq!(
        Outcome::compute(-2).result,
        Err(FactorialError::InvalidArgument { n: -2 })
    );
}

#[test]
fn collect_values_in_order() {
    let outcomes = collect_outcomes(None, &[3, -1, 0]);
    let inputs: Vec<i64> = outcomes.iter().map(|o| o.n).collect();
    assert_eq!(inputs, vec![3, -1, 0]);
    assert!(outcomes[0].is_ok());
    assert!(!outcomes[1].is_ok());
}

#[test]
fn collect_table_comes_before_values() {
    let outcomes = collect_outcomes(Some(2), &[10]);
    let rows: Vec<(i64, u128)> = outcomes
        .iter()
        .map(|o| (o.n, *o.result.as_ref().unwrap()))
        .collect();
    assert_eq!(rows, vec![(0, 1), (1, 1), (2, 2), (10, 3_628_800)]);
}

#[test]
fn collect_table_zero_has_one_row() {
    let outcomes = collect_outcomes(Some(0), &[]);
    assert_eq!(outcomes, vec![Outcome { n: 0, result: Ok(1) }]);
}

#[test]
fn collect_table_clamps_to_max_input() {
    let outcomes = collect_outcomes(Some(1000), &[]);
    assert_eq!(outcomes.len(), (MAX_INPUT + 1) as usize);
    assert_eq!(outcomes.last().unwrap().n, MAX_INPUT);
}

#[test]
fn format_report_dispatches_on_format() {
    let outcomes = collect_outcomes(None, &[4]);

    let mut text = Buffer::no_color();
    format_report_to(&mut text, OutputFormat::Text, &outcomes).unwrap();
    assert_eq!(String::from_utf8(text.into_inner()).unwrap(), "4! = 24\n");

    let mut json = Buffer::no_color();
    format_report_to(&mut json, OutputFormat::Json, &outcomes).unwrap();
    let parsed: serde_json::Value = serde_json::from_slice(json.as_slice()).unwrap();
    assert_eq!(parsed["results"][0]["factorial"], "24");
}
