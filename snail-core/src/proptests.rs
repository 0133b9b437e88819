//! Property-based tests for prompt rendering
//!
//! These tests check the formatter invariants over arbitrary transcripts:
//! - Complete pairs render to exactly the sum of their turns
//! - A trailing user turn adds exactly one continuation marker
//! - Rendering is deterministic

use crate::formatter::Formatter;
use crate::types::turn::Turn;
use proptest::prelude::*;

/// Free text, including braces and newlines that must pass through untouched
fn arb_text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 _.!?,{}\n]{0,40}"
}

/// Alternating user/bot pairs
fn arb_pairs() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec((arb_text(), arb_text()), 0..8)
}

fn arb_formatter() -> impl Strategy<Value = Formatter> {
    (arb_text(), "[a-z<>/]{0,6}").prop_map(|(system, suffix)| {
        Formatter::builder()
            .system(system)
            .suffix(suffix)
            .build()
            .unwrap()
    })
}

fn transcript(pairs: &[(String, String)]) -> Vec<Turn> {
    pairs
        .iter()
        .flat_map(|(q, a)| [Turn::user(q.clone()), Turn::bot(a.clone())])
        .collect()
}

proptest! {
    #[test]
    fn even_history_is_sum_of_turns(formatter in arb_formatter(), pairs in arb_pairs()) {
        let history = transcript(&pairs);
        let rendered = formatter.render_history(&history);

        let expected: String = pairs
            .iter()
            .map(|(q, a)| formatter.render_turn(q, a))
            .collect();
        prop_assert_eq!(rendered.len(), expected.len());
        prop_assert_eq!(rendered, expected);
    }

    #[test]
    fn odd_history_adds_one_marker(
        formatter in arb_formatter(),
        pairs in arb_pairs(),
        question in arb_text(),
    ) {
        let mut history = transcript(&pairs);
        let complete = formatter.render_history(&history);
        history.push(Turn::user(question.clone()));

        let rendered = formatter.render_history(&history);
        prop_assert_eq!(rendered, complete + &formatter.render_continuation(&question));
    }

    #[test]
    fn prompt_is_deterministic(
        formatter in arb_formatter(),
        pairs in arb_pairs(),
        stop in prop::option::of("[<>|/a-z#]{1,12}"),
    ) {
        let history = transcript(&pairs);
        let first = formatter.render_prompt(&history, stop.as_deref());
        let second = formatter.clone().render_prompt(&history, stop.as_deref());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prompt_never_loses_system(formatter in arb_formatter(), pairs in arb_pairs()) {
        let prompt = formatter.render_prompt(&transcript(&pairs), None);
        prop_assert!(prompt.starts_with(formatter.system()));
    }
}
