//! Field tags.
//!
//! Every marshaled field carries a single string tag that plays one of two
//! roles:
//!
//! - [`Tag::Positional`]: the tag parses as a non-negative integer and gives the
//!   slot the value occupies after all named flags (`-0` counts as `0`)
//! - [`Tag::Flag`]: any other non-empty string names the flag
//!
//! An empty tag excludes the field entirely.
//!
//! ## Examples
//!
//! ```rust
//! use serde_args::{FlagStyle, Tag};
//!
//! assert_eq!(Tag::parse("0"), Some(Tag::Positional(0)));
//! assert_eq!(Tag::parse("v").map(|t| t.style()), Some(Some(FlagStyle::Short)));
//! assert_eq!(Tag::parse("verbose").map(|t| t.style()), Some(Some(FlagStyle::Long)));
//! assert_eq!(Tag::parse(""), None);
//! ```

use std::fmt;

/// How a named flag is spelled on the command line.
///
/// The style is a hard switch on the length of the flag name:
///
/// - **Short**: one character, `-x value` as two tokens
/// - **Long**: two or more characters, `--name=value` as one token
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlagStyle {
    Short,
    Long,
}

impl FlagStyle {
    /// Picks the style for a flag name.
    #[must_use]
    pub fn for_name(name: &str) -> Self {
        if name.chars().count() == 1 {
            FlagStyle::Short
        } else {
            FlagStyle::Long
        }
    }

    /// Returns the dash prefix for this style.
    #[must_use]
    pub const fn prefix(&self) -> &'static str {
        match self {
            FlagStyle::Short => "-",
            FlagStyle::Long => "--",
        }
    }
}

/// A parsed field tag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Tag {
    /// Argument placed by index after every named flag.
    Positional(usize),
    /// Argument introduced by `-x` or `--name`.
    Flag(String),
}

impl Tag {
    /// Parses a tag annotation. Returns `None` for an empty tag.
    ///
    /// Anything that does not parse as a non-negative integer is a flag name;
    /// flag names are not validated. `usize::MAX` leaves no room for the slots
    /// before it and is a flag name too.
    #[must_use]
    pub fn parse(tag: &str) -> Option<Self> {
        if tag.is_empty() {
            return None;
        }
        Some(match parse_index(tag) {
            Some(index) if index < usize::MAX => Tag::Positional(index),
            _ => Tag::Flag(tag.to_string()),
        })
    }

    /// Returns the flag style, or `None` for positional tags.
    #[must_use]
    pub fn style(&self) -> Option<FlagStyle> {
        match self {
            Tag::Positional(_) => None,
            Tag::Flag(name) => Some(FlagStyle::for_name(name)),
        }
    }
}

fn parse_index(tag: &str) -> Option<usize> {
    match tag.strip_prefix('-') {
        // Negative zero
        Some(digits) if !digits.is_empty() && digits.bytes().all(|b| b == b'0') => Some(0),
        Some(_) => None,
        None => tag.parse().ok(),
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tag::Positional(index) => write!(f, "{index}"),
            Tag::Flag(name) => f.write_str(name),
        }
    }
}
