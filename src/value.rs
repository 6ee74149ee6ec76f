//! Values that can be turned into arguments.
//!
//! This module provides the closed set of value kinds the encoder understands:
//!
//! - [`ArgValue`]: boolean, integer, string, string list or custom-rendered value
//! - [`MarshalArg`]: the extension hook for rendering any type to a single string
//!
//! ## Custom Rendering
//!
//! ```rust
//! use serde_args::{ArgValue, MarshalArg};
//!
//! struct YesNo(bool);
//!
//! impl MarshalArg for YesNo {
//!     fn marshal_arg(&self) -> String {
//!         if self.0 { "y".into() } else { "n".into() }
//!     }
//!
//!     fn is_zero(&self) -> bool {
//!         !self.0
//!     }
//! }
//!
//! let yes = YesNo(true);
//! let value = ArgValue::Custom(&yes);
//! assert_eq!(value.render().as_deref(), Some("y"));
//! assert!(ArgValue::Custom(&YesNo(false)).is_zero());
//! ```

use std::borrow::Cow;
use std::fmt;

/// Renders a value as a single command-line string.
///
/// Implement this to pass a type the encoder does not know about. The rendered
/// text takes the place of the value; whether it lands as `-x <text>`,
/// `--name=<text>` or a positional argument is still decided by the tag.
pub trait MarshalArg {
    fn marshal_arg(&self) -> String;

    /// Returns true when `self` is its type's default value.
    ///
    /// Zero values are skipped like any other zero field. The default says no
    /// value is zero, so a type with a meaningful default should override it.
    fn is_zero(&self) -> bool {
        false
    }
}

impl<T: MarshalArg + ?Sized> MarshalArg for &T {
    fn marshal_arg(&self) -> String {
        (**self).marshal_arg()
    }

    fn is_zero(&self) -> bool {
        (**self).is_zero()
    }
}

impl<T: MarshalArg + ?Sized> MarshalArg for Box<T> {
    fn marshal_arg(&self) -> String {
        (**self).marshal_arg()
    }

    fn is_zero(&self) -> bool {
        (**self).is_zero()
    }
}

/// A field value ready for encoding.
///
/// # Examples
///
/// ```rust
/// use serde_args::ArgValue;
///
/// assert!(ArgValue::from(false).is_zero());
/// assert!(ArgValue::from(0u8).is_zero());
/// assert!(ArgValue::from("").is_zero());
/// assert!(!ArgValue::from("x").is_zero());
/// ```
#[derive(Clone)]
pub enum ArgValue<'a> {
    Bool(bool),
    Int(i128),
    Str(Cow<'a, str>),
    StrList(Vec<Cow<'a, str>>),
    Custom(&'a dyn MarshalArg),
}

impl<'a> ArgValue<'a> {
    /// Returns true when the value is its type's default.
    ///
    /// Custom values answer through [`MarshalArg::is_zero`].
    #[must_use]
    pub fn is_zero(&self) -> bool {
        match self {
            ArgValue::Bool(b) => !b,
            ArgValue::Int(n) => *n == 0,
            ArgValue::Str(s) => s.is_empty(),
            ArgValue::StrList(list) => list.is_empty(),
            ArgValue::Custom(m) => m.is_zero(),
        }
    }

    /// Renders a scalar value as the text that follows a flag.
    ///
    /// Returns `None` for booleans (which are presence flags) and lists
    /// (which expand element by element).
    #[must_use]
    pub fn render(&self) -> Option<Cow<'_, str>> {
        match self {
            ArgValue::Int(n) => Some(Cow::Owned(n.to_string())),
            ArgValue::Str(s) => Some(Cow::Borrowed(s.as_ref())),
            ArgValue::Custom(m) => Some(Cow::Owned(m.marshal_arg())),
            ArgValue::Bool(_) | ArgValue::StrList(_) => None,
        }
    }

    /// Short name of the value kind, used in diagnostics.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            ArgValue::Bool(_) => "bool",
            ArgValue::Int(_) => "integer",
            ArgValue::Str(_) => "string",
            ArgValue::StrList(_) => "string list",
            ArgValue::Custom(_) => "custom",
        }
    }

    /// Converts into a value that owns all of its text.
    ///
    /// Custom values are rendered eagerly, so the result is zero only when the
    /// rendering is empty.
    #[must_use]
    pub fn into_owned(self) -> ArgValue<'static> {
        match self {
            ArgValue::Bool(b) => ArgValue::Bool(b),
            ArgValue::Int(n) => ArgValue::Int(n),
            ArgValue::Str(s) => ArgValue::Str(Cow::Owned(s.into_owned())),
            ArgValue::StrList(list) => ArgValue::StrList(
                list.into_iter()
                    .map(|s| Cow::Owned(s.into_owned()))
                    .collect(),
            ),
            ArgValue::Custom(m) => ArgValue::Str(Cow::Owned(m.marshal_arg())),
        }
    }
}

impl fmt::Debug for ArgValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgValue::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            ArgValue::Int(n) => f.debug_tuple("Int").field(n).finish(),
            ArgValue::Str(s) => f.debug_tuple("Str").field(s).finish(),
            ArgValue::StrList(list) => f.debug_tuple("StrList").field(list).finish(),
            ArgValue::Custom(m) => f.debug_tuple("Custom").field(&m.marshal_arg()).finish(),
        }
    }
}

impl PartialEq for ArgValue<'_> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ArgValue::Bool(a), ArgValue::Bool(b)) => a == b,
            (ArgValue::Int(a), ArgValue::Int(b)) => a == b,
            (ArgValue::Str(a), ArgValue::Str(b)) => a == b,
            (ArgValue::StrList(a), ArgValue::StrList(b)) => a == b,
            (ArgValue::Custom(a), ArgValue::Custom(b)) => a.marshal_arg() == b.marshal_arg(),
            _ => false,
        }
    }
}

impl From<bool> for ArgValue<'_> {
    fn from(value: bool) -> Self {
        ArgValue::Bool(value)
    }
}

macro_rules! impl_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ArgValue<'_> {
                fn from(value: $ty) -> Self {
                    ArgValue::Int(value as i128)
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl<'a> From<&'a str> for ArgValue<'a> {
    fn from(value: &'a str) -> Self {
        ArgValue::Str(Cow::Borrowed(value))
    }
}

impl From<String> for ArgValue<'_> {
    fn from(value: String) -> Self {
        ArgValue::Str(Cow::Owned(value))
    }
}

impl<'a> From<&'a [String]> for ArgValue<'a> {
    fn from(value: &'a [String]) -> Self {
        ArgValue::StrList(value.iter().map(|s| Cow::Borrowed(s.as_str())).collect())
    }
}

impl From<Vec<String>> for ArgValue<'_> {
    fn from(value: Vec<String>) -> Self {
        ArgValue::StrList(value.into_iter().map(Cow::Owned).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Level(u8);

    impl MarshalArg for Level {
        fn marshal_arg(&self) -> String {
            format!("L{}", self.0)
        }

        fn is_zero(&self) -> bool {
            self.0 == 0
        }
    }

    struct Always;

    impl MarshalArg for Always {
        fn marshal_arg(&self) -> String {
            String::new()
        }
    }

    #[test]
    fn test_zero_values() {
        assert!(ArgValue::Bool(false).is_zero());
        assert!(ArgValue::Int(0).is_zero());
        assert!(ArgValue::from(String::new()).is_zero());
        assert!(ArgValue::from(Vec::<String>::new()).is_zero());

        assert!(!ArgValue::Bool(true).is_zero());
        assert!(!ArgValue::Int(-1).is_zero());
        assert!(ArgValue::Custom(&Level(0)).is_zero());
        assert!(!ArgValue::Custom(&Level(1)).is_zero());
    }

    #[test]
    fn test_custom_zero_defaults_to_false() {
        assert!(!ArgValue::Custom(&Always).is_zero());
        let boxed: Box<dyn MarshalArg> = Box::new(Level(0));
        assert!(ArgValue::Custom(&boxed).is_zero());
    }

    #[test]
    fn test_render() {
        assert_eq!(ArgValue::from(-42i32).render().as_deref(), Some("-42"));
        assert_eq!(ArgValue::from("a b").render().as_deref(), Some("a b"));
        assert_eq!(ArgValue::Custom(&Level(3)).render().as_deref(), Some("L3"));
        assert_eq!(ArgValue::Bool(true).render(), None);
    }

    #[test]
    fn test_large_unsigned() {
        assert_eq!(
            ArgValue::from(u64::MAX).render().as_deref(),
            Some("18446744073709551615")
        );
    }

    #[test]
    fn test_into_owned_renders_custom() {
        let level = Level(7);
        let owned = ArgValue::Custom(&level).into_owned();
        assert_eq!(owned, ArgValue::from("L7".to_string()));
    }

    #[test]
    fn test_boxed_marshal_arg() {
        let boxed: Box<dyn MarshalArg> = Box::new(Level(1));
        assert_eq!(boxed.marshal_arg(), "L1");
    }
}
