//! Property-based tests for argument assembly.
//!
//! These cover the ordering and exclusion guarantees across generated
//! records rather than hand-picked ones.

use proptest::prelude::*;
use serde::Serialize;
use serde_args::{
    as_arg, encode, impl_record, marshal, to_args, ArgValue, ArgsBuilder, Field, FieldValue,
    MarshalArg, Record, Tag, ToFieldValue,
};

struct Pair {
    first: String,
    second: String,
    first_tag: &'static str,
    second_tag: &'static str,
}

impl Record for Pair {
    fn describe_fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::new("first", self.first_tag, &self.first),
            Field::new("second", self.second_tag, &self.second),
        ]
    }
}

struct YesNo(bool);

impl MarshalArg for YesNo {
    fn marshal_arg(&self) -> String {
        let text = if self.0 { "y" } else { "n" };
        text.to_string()
    }

    fn is_zero(&self) -> bool {
        !self.0
    }
}

impl ToFieldValue for YesNo {
    fn to_field_value(&self) -> FieldValue<'_> {
        FieldValue::custom(self)
    }
}

#[derive(Serialize)]
struct Mixed {
    flag: bool,
    count: i64,
    name: String,
    list: Vec<String>,
    maybe: Option<String>,
    #[serde(serialize_with = "as_arg")]
    choice: YesNo,
    #[serde(rename = "0")]
    position: String,
}

impl_record!(Mixed {
    flag => "flag",
    count => "count",
    name => "name",
    list => "list",
    maybe => "maybe",
    choice => "choice",
    position => "0",
});

/// Builds a record where `set[i]` decides whether field `i` holds a value or
/// its zero, along with the arguments it should produce.
fn mixed(set: [bool; 7], count: i64, text: &str) -> (Mixed, Vec<String>) {
    let pick = |on: bool| if on { text.to_string() } else { String::new() };
    let mixed = Mixed {
        flag: set[0],
        count: if set[1] { count } else { 0 },
        name: pick(set[2]),
        list: if set[3] { vec![text.to_string()] } else { Vec::new() },
        maybe: set[4].then(|| text.to_string()),
        choice: YesNo(set[5]),
        position: pick(set[6]),
    };

    let mut expected = Vec::new();
    if set[0] {
        expected.push("--flag".to_string());
    }
    if set[1] {
        expected.push(format!("--count={count}"));
    }
    for (on, name) in [(set[2], "name"), (set[3], "list"), (set[4], "maybe")] {
        if on {
            expected.push(format!("--{name}={text}"));
        }
    }
    if set[5] {
        expected.push("--choice=y".to_string());
    }
    if set[6] {
        expected.push(text.to_string());
    }
    (mixed, expected)
}

fn word() -> impl Strategy<Value = String> {
    "[a-z/._-]{1,12}"
}

proptest! {
    #[test]
    fn prop_positional_order_ignores_declaration_order(a in word(), b in word(), swap in any::<bool>()) {
        let pair = if swap {
            Pair { first: b.clone(), second: a.clone(), first_tag: "1", second_tag: "0" }
        } else {
            Pair { first: a.clone(), second: b.clone(), first_tag: "0", second_tag: "1" }
        };
        prop_assert_eq!(marshal(&pair), vec![a, b]);
    }

    #[test]
    fn prop_only_non_zero_fields_emit(
        set in prop::array::uniform7(any::<bool>()),
        count in any::<i64>().prop_filter("non-zero", |n| *n != 0),
        text in word(),
    ) {
        let (mixed, expected) = mixed(set, count, &text);
        prop_assert_eq!(&to_args(&mixed).unwrap(), &expected);
        prop_assert_eq!(&marshal(&mixed), &expected);
    }

    #[test]
    fn prop_named_list_repeats_flag(items in prop::collection::vec(word(), 0..8)) {
        let tokens = encode(&Tag::Flag("include".to_string()), &ArgValue::from(items.clone()));
        prop_assert_eq!(tokens.len(), items.len());
        for (token, item) in tokens.iter().zip(&items) {
            prop_assert_eq!(token, &format!("--include={item}"));
        }
    }

    #[test]
    fn prop_short_flag_pairs(value in any::<i64>()) {
        let tokens = encode(&Tag::Flag("n".to_string()), &ArgValue::from(value));
        prop_assert_eq!(tokens, vec!["-n".to_string(), value.to_string()]);
    }

    #[test]
    fn prop_named_tokens_precede_positional(indices in prop::collection::vec(0usize..16, 1..8)) {
        let mut builder = ArgsBuilder::new();
        for index in &indices {
            builder.push(&Tag::Positional(*index), &ArgValue::from(format!("p{index}")));
            builder.push(&Tag::Flag("x".to_string()), &ArgValue::Bool(true));
        }
        let args = builder.finish();
        let max = indices.iter().copied().max().unwrap_or(0);

        prop_assert_eq!(args.len(), indices.len() + max + 1);
        prop_assert!(args[..indices.len()].iter().all(|a| a == "-x"));
        for index in &indices {
            prop_assert_eq!(&args[indices.len() + index], &format!("p{index}"));
        }
    }
}

#[test]
fn test_all_zero_fields_emit_nothing() {
    let (mixed, expected) = mixed([false; 7], 1, "unused");
    assert!(expected.is_empty());
    assert!(to_args(&mixed).unwrap().is_empty());
    assert!(marshal(&mixed).is_empty());
}
