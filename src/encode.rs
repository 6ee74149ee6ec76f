//! Token encoding and argument assembly.
//!
//! [`encode`] turns one `(tag, value)` pair into command-line tokens, and
//! [`ArgsBuilder`] collects those tokens into the final argument vector:
//! named flags first, in the order they were pushed, then positional
//! arguments ordered by index.
//!
//! ## Encoding Rules
//!
//! | Value   | Positional      | Short tag (`x`)   | Long tag (`name`)  |
//! |---------|-----------------|-------------------|--------------------|
//! | bool    | `true`/`false`  | `-x` if true      | `--name` if true   |
//! | integer | `5`             | `-x`, `5`         | `--name=5`         |
//! | string  | `v`             | `-x`, `v`         | `--name=v`         |
//! | list    | one slot each   | one pair each     | one token each     |
//! | custom  | rendered text   | `-x`, text        | `--name=text`      |
//!
//! ## Examples
//!
//! ```rust
//! use serde_args::{encode, ArgValue, ArgsBuilder, Tag};
//!
//! let count = Tag::Flag("count".into());
//! assert_eq!(encode(&count, &ArgValue::from(5)), ["--count=5"]);
//!
//! let mut builder = ArgsBuilder::new();
//! builder.push(&Tag::Positional(1), &ArgValue::from("/tmp/foo"));
//! builder.push(&Tag::Positional(0), &ArgValue::from("/tmp/bar"));
//! builder.push(&Tag::Flag("v".into()), &ArgValue::from(true));
//! assert_eq!(builder.finish(), ["-v", "/tmp/bar", "/tmp/foo"]);
//! ```

use crate::{ArgValue, FlagStyle, Tag};
use tracing::{debug, warn};

/// Encodes a single value under a tag. May return no tokens.
#[must_use]
pub fn encode(tag: &Tag, value: &ArgValue<'_>) -> Vec<String> {
    match value {
        ArgValue::Bool(b) => encode_bool(tag, *b),
        ArgValue::StrList(list) => list.iter().flat_map(|s| encode_text(tag, s)).collect(),
        scalar => match scalar.render() {
            Some(text) => encode_text(tag, &text),
            None => Vec::new(),
        },
    }
}

fn encode_bool(tag: &Tag, value: bool) -> Vec<String> {
    match tag {
        Tag::Positional(_) => vec![value.to_string()],
        Tag::Flag(name) if value => vec![format!("{}{}", FlagStyle::for_name(name).prefix(), name)],
        // Booleans are presence flags.
        Tag::Flag(_) => Vec::new(),
    }
}

fn encode_text(tag: &Tag, text: &str) -> Vec<String> {
    match tag {
        Tag::Positional(_) => vec![text.to_string()],
        Tag::Flag(name) => match FlagStyle::for_name(name) {
            FlagStyle::Short => vec![format!("-{name}"), text.to_string()],
            FlagStyle::Long => vec![format!("--{name}={text}")],
        },
    }
}

/// Accumulates encoded tokens and assembles the final argument vector.
///
/// Positional tokens are kept as `(index, token)` pairs and only ordered in
/// [`finish`](ArgsBuilder::finish). A list under a positional tag occupies
/// consecutive indices starting at the tag's index.
#[derive(Debug, Default, Clone)]
pub struct ArgsBuilder {
    named: Vec<String>,
    positional: Vec<(usize, String)>,
}

impl ArgsBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Encodes `value` under `tag` and records the resulting tokens.
    ///
    /// Positional tokens whose index would reach `usize::MAX` are dropped.
    pub fn push(&mut self, tag: &Tag, value: &ArgValue<'_>) {
        let tokens = encode(tag, value);
        match tag {
            Tag::Positional(start) => {
                for (offset, token) in tokens.into_iter().enumerate() {
                    match start.checked_add(offset).filter(|index| *index < usize::MAX) {
                        Some(index) => self.positional.push((index, token)),
                        None => warn!(
                            start,
                            offset,
                            "positional index out of range, dropping argument"
                        ),
                    }
                }
            }
            Tag::Flag(_) => self.named.extend(tokens),
        }
    }

    /// Returns the named tokens followed by the positional tokens.
    ///
    /// The positional part is dense: it has one entry per index up to the
    /// highest index seen, and indices nobody filled become empty strings.
    /// When two tokens claim the same index the later one wins.
    #[must_use]
    pub fn finish(self) -> Vec<String> {
        let ArgsBuilder {
            mut named,
            mut positional,
        } = self;

        // Stable, so equal indices keep their push order.
        positional.sort_by_key(|(index, _)| *index);
        let len = positional
            .last()
            .and_then(|(index, _)| index.checked_add(1))
            .unwrap_or(0);

        let mut slots: Vec<Option<String>> = vec![None; len];
        for (index, token) in positional {
            if slots[index].replace(token).is_some() {
                warn!(index, "positional argument set more than once, keeping the last");
            }
        }

        let gaps = slots.iter().filter(|slot| slot.is_none()).count();
        if gaps > 0 {
            warn!(gaps, "filling unset positional slots with empty arguments");
        }

        debug!(
            named = named.len(),
            positional = slots.len(),
            "assembled argument vector"
        );
        named.extend(slots.into_iter().map(Option::unwrap_or_default));
        named
    }
}
