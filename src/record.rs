//! Statically described records.
//!
//! A [`Record`] lists its fields in declaration order. Each [`Field`] carries
//! a tag, an exported flag and a [`FieldValue`]; embedded records are listed
//! as fields too and get flattened into their parent when walked.
//!
//! ## Implementing Record
//!
//! ```rust
//! use serde_args::{marshal, Field, Record};
//!
//! struct Credentials {
//!     user: String,
//!     password: String,
//! }
//!
//! impl Record for Credentials {
//!     fn describe_fields(&self) -> Vec<Field<'_>> {
//!         vec![
//!             Field::new("user", "user", &self.user),
//!             Field::new("password", "password", &self.password),
//!         ]
//!     }
//! }
//!
//! struct Options {
//!     credentials: Credentials,
//!     dest: String,
//! }
//!
//! impl Record for Options {
//!     fn describe_fields(&self) -> Vec<Field<'_>> {
//!         vec![
//!             Field::embedded("credentials", &self.credentials),
//!             Field::new("dest", "0", &self.dest),
//!         ]
//!     }
//! }
//!
//! let opts = Options {
//!     credentials: Credentials { user: "root".into(), password: String::new() },
//!     dest: "/tmp".into(),
//! };
//! assert_eq!(marshal(&opts), ["--user=root", "/tmp"]);
//! ```
//!
//! The [`impl_record!`](crate::impl_record) macro writes the same impl.

use crate::{ArgValue, MarshalArg};
use std::borrow::Cow;

/// A configuration value that can describe its own fields.
pub trait Record {
    /// Returns the fields of `self` in declaration order.
    fn describe_fields(&self) -> Vec<Field<'_>>;
}

impl<T: Record + ?Sized> Record for &T {
    fn describe_fields(&self) -> Vec<Field<'_>> {
        (**self).describe_fields()
    }
}

impl<T: Record + ?Sized> Record for Box<T> {
    fn describe_fields(&self) -> Vec<Field<'_>> {
        (**self).describe_fields()
    }
}

/// The value held by a field.
pub enum FieldValue<'a> {
    /// A value with an argument encoding.
    Arg(ArgValue<'a>),
    /// A value inside a set `Option`. Never zero, even when the inner value is
    /// its type's default, so `Some(0)` is emitted as `0`.
    Set(ArgValue<'a>),
    /// An optional value that is not set. Always zero.
    Unset,
    /// A record whose fields are spliced into the parent.
    Embedded(&'a dyn Record),
}

impl<'a> FieldValue<'a> {
    /// Wraps a value rendered through [`MarshalArg`].
    pub fn custom(value: &'a dyn MarshalArg) -> Self {
        FieldValue::Arg(ArgValue::Custom(value))
    }

    /// Returns true when the value is unset or its type's default.
    ///
    /// Embedded records are never zero; their own fields are checked instead.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        match self {
            FieldValue::Arg(value) => value.is_zero(),
            FieldValue::Unset => true,
            FieldValue::Set(_) | FieldValue::Embedded(_) => false,
        }
    }
}

/// One member of a [`Record`].
pub struct Field<'a> {
    pub name: &'static str,
    /// Flag name, positional index, or empty to exclude the field.
    pub tag: &'static str,
    pub exported: bool,
    pub value: FieldValue<'a>,
}

impl<'a> Field<'a> {
    /// Describes an exported field.
    pub fn new<V>(name: &'static str, tag: &'static str, value: &'a V) -> Self
    where
        V: ToFieldValue + ?Sized,
    {
        Field {
            name,
            tag,
            exported: true,
            value: value.to_field_value(),
        }
    }

    /// Describes an embedded record. Embedded fields need no tag.
    pub fn embedded(name: &'static str, record: &'a dyn Record) -> Self {
        Field {
            name,
            tag: "",
            exported: true,
            value: FieldValue::Embedded(record),
        }
    }

    /// Marks the field as internal. Internal fields are never marshaled.
    #[must_use]
    pub fn private(mut self) -> Self {
        self.exported = false;
        self
    }
}

/// Conversion from a field's Rust type into a [`FieldValue`].
///
/// Implemented for `bool`, the integer types, `String`/`str`, string lists and
/// `Option`s of those. An `Option` is zero only when it is `None`. Types
/// rendered through [`MarshalArg`] opt in with [`FieldValue::custom`]:
///
/// ```rust
/// use serde_args::{FieldValue, MarshalArg, ToFieldValue};
///
/// struct YesNo(bool);
///
/// impl MarshalArg for YesNo {
///     fn marshal_arg(&self) -> String {
///         if self.0 { "y".into() } else { "n".into() }
///     }
///
///     fn is_zero(&self) -> bool {
///         !self.0
///     }
/// }
///
/// impl ToFieldValue for YesNo {
///     fn to_field_value(&self) -> FieldValue<'_> {
///         FieldValue::custom(self)
///     }
/// }
/// ```
pub trait ToFieldValue {
    fn to_field_value(&self) -> FieldValue<'_>;
}

impl ToFieldValue for bool {
    fn to_field_value(&self) -> FieldValue<'_> {
        FieldValue::Arg(ArgValue::Bool(*self))
    }
}

macro_rules! impl_to_field_value_int {
    ($($ty:ty),*) => {
        $(
            impl ToFieldValue for $ty {
                fn to_field_value(&self) -> FieldValue<'_> {
                    FieldValue::Arg(ArgValue::from(*self))
                }
            }
        )*
    };
}

impl_to_field_value_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl ToFieldValue for str {
    fn to_field_value(&self) -> FieldValue<'_> {
        FieldValue::Arg(ArgValue::Str(Cow::Borrowed(self)))
    }
}

impl ToFieldValue for String {
    fn to_field_value(&self) -> FieldValue<'_> {
        self.as_str().to_field_value()
    }
}

impl ToFieldValue for [String] {
    fn to_field_value(&self) -> FieldValue<'_> {
        FieldValue::Arg(ArgValue::from(self))
    }
}

impl ToFieldValue for Vec<String> {
    fn to_field_value(&self) -> FieldValue<'_> {
        self.as_slice().to_field_value()
    }
}

impl<T: ToFieldValue> ToFieldValue for Option<T> {
    fn to_field_value(&self) -> FieldValue<'_> {
        match self {
            Some(value) => match value.to_field_value() {
                FieldValue::Arg(value) => FieldValue::Set(value),
                other => other,
            },
            None => FieldValue::Unset,
        }
    }
}

impl<T: ToFieldValue + ?Sized> ToFieldValue for &T {
    fn to_field_value(&self) -> FieldValue<'_> {
        (**self).to_field_value()
    }
}

impl<T: ToFieldValue + ?Sized> ToFieldValue for Box<T> {
    fn to_field_value(&self) -> FieldValue<'_> {
        (**self).to_field_value()
    }
}
