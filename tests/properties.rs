//! Property-based tests for field splitting and the record context
//!
//! Uses proptest to check the field-access and splitting rules over generated
//! records, separators and indices.

use std::io::Cursor;

use proptest::prelude::*;
use recawk::{Context, Engine, FieldSplitter, Hooks};

mod strategies {
    use proptest::prelude::*;

    /// Records mixing words, spaces, tabs and separator characters
    pub fn record() -> impl Strategy<Value = String> {
        prop::string::string_regex("[a-z ,:\t]{0,40}").unwrap()
    }

    /// Literal separators, single- and multi-character
    pub fn literal_separator() -> impl Strategy<Value = String> {
        prop_oneof![
            Just(",".to_string()),
            Just(":".to_string()),
            Just("\t".to_string()),
            Just("::".to_string()),
            Just(", ".to_string()),
        ]
    }

    /// Whitespace runs of at least one character, mixing ASCII and Unicode
    /// whitespace
    pub fn whitespace_run() -> impl Strategy<Value = String> {
        prop::collection::vec(
            prop::sample::select(vec![' ', '\t', '\r', '\x0b', '\x0c', '\u{a0}', '\u{2003}', '\u{3000}']),
            1..4,
        )
        .prop_map(|chars| chars.into_iter().collect())
    }

    /// Tokens with no whitespace in them
    pub fn tokens() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec(prop::string::string_regex("[a-z0-9,:é]{1,6}").unwrap(), 0..8)
    }

    /// Field arrays of at least one element (`$0` plus fields)
    pub fn fields() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec(prop::string::string_regex("[a-z]{0,5}").unwrap(), 1..8)
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Indices outside the field array read as empty
    #[test]
    fn out_of_range_field_is_empty(fields in strategies::fields(), offset in 0isize..20, neg in 1isize..20) {
        let ctx = Context::with_fields(fields.clone());
        prop_assert_eq!(ctx.field(fields.len() as isize + offset), "");
        prop_assert_eq!(ctx.field(-neg), "");
    }

    /// After a write, the field reads back and NF tracks the array length
    #[test]
    fn set_field_reads_back(fields in strategies::fields(), index in 0isize..16, value in "[a-z]{0,6}") {
        let mut ctx = Context::with_fields(fields);
        ctx.set_field(index, value.clone());
        prop_assert_eq!(ctx.field(index), value.as_str());
        prop_assert_eq!(ctx.nf(), ctx.fields().len() - 1);
    }

    /// Negative writes leave the field array untouched
    #[test]
    fn negative_set_field_is_ignored(fields in strategies::fields(), neg in 1isize..100) {
        let mut ctx = Context::with_fields(fields.clone());
        ctx.set_field(-neg, "ignored");
        prop_assert_eq!(ctx.fields(), fields.as_slice());
    }

    /// Tokens joined by arbitrary whitespace runs, with optional padding at
    /// either end, split back into exactly those tokens
    #[test]
    fn whitespace_mode_recovers_tokens(
        tokens in strategies::tokens(),
        gaps in prop::collection::vec(strategies::whitespace_run(), 8),
        lead in prop::option::of(strategies::whitespace_run()),
        trail in prop::option::of(strategies::whitespace_run()),
    ) {
        let mut record = lead.unwrap_or_default();
        for (i, token) in tokens.iter().enumerate() {
            if i > 0 {
                record.push_str(&gaps[i - 1]);
            }
            record.push_str(token);
        }
        record.push_str(&trail.unwrap_or_default());

        let got = FieldSplitter::new(" ").split(&record);
        prop_assert_eq!(got, tokens);
    }

    /// Literal mode yields one more field than separator occurrences
    #[test]
    fn literal_mode_counts_separators(record in strategies::record(), sep in strategies::literal_separator()) {
        let got = FieldSplitter::new(&sep).split(&record);
        if record.is_empty() {
            prop_assert!(got.is_empty());
        } else {
            prop_assert_eq!(got.len(), record.matches(sep.as_str()).count() + 1);
            prop_assert_eq!(got.join(sep.as_str()), record);
        }
    }

    /// NR counts records one by one from 1
    #[test]
    fn record_numbers_are_sequential(lines in prop::collection::vec("[a-z ]{0,10}", 0..30)) {
        let program = Hooks::new().on_action(|ctx| Some(ctx.nr().to_string()));
        let mut engine = Engine::new(program);
        let mut input = String::new();
        for line in &lines {
            input.push_str(line);
            input.push('\n');
        }
        let mut output = Vec::new();
        let summary = engine.run(Cursor::new(input), &mut output).unwrap();

        let expected: String = (1..=lines.len()).map(|n| format!("{}\n", n)).collect();
        prop_assert_eq!(String::from_utf8(output).unwrap(), expected);
        prop_assert_eq!(summary.records, lines.len() as u64);
    }
}

#[test]
fn empty_record_has_no_fields_for_any_literal() {
    for sep in [",", ":", "\t", "::", "abc", "|"] {
        assert!(FieldSplitter::new(sep).split("").is_empty(), "separator {:?}", sep);
    }
}
