#![allow(unused)]

pub mod doc_gen;

use streaming_pretty_printer::testing::oracular_pretty_print;
use streaming_pretty_printer::{pretty_print, Doc, Width};

fn compare_lines(message: &str, expected: String, actual: String) {
    if actual != expected {
        eprintln!(
            "{}\nEXPECTED:\n{}\nACTUAL:\n{}\n=========",
            message, expected, actual,
        );
        assert_eq!(actual, expected);
    }
}

/// Check the rendering of `doc` against `expected_lines`, and check the
/// expectation itself against the oracle.
#[track_caller]
pub fn assert_pp(doc: &Doc, width: Width, expected_lines: &[&str]) {
    let oracle_result = oracular_pretty_print(width, doc);
    compare_lines(
        &format!(
            "ORACLE DISAGREES WITH TEST CASE AT WIDTH {}, SO TEST CASE MUST BE WRONG",
            width
        ),
        expected_lines.join("\n"),
        oracle_result.clone(),
    );
    compare_lines(
        &format!("IN PRETTY PRINTING WITH WIDTH {}", width),
        oracle_result,
        pretty_print(width, doc),
    );
}

/// Check that the pipeline and the oracle agree on `doc`, without an
/// expected rendering.
#[track_caller]
pub fn assert_pp_without_expectation(doc: &Doc, width: Width) {
    compare_lines(
        &format!("PIPELINE DISAGREES WITH ORACLE AT WIDTH {}", width),
        oracular_pretty_print(width, doc),
        pretty_print(width, doc),
    );
}
