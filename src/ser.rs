//! Argument serialization through serde.
//!
//! This module provides the [`Serializer`] that turns any `Serialize` struct
//! into an argument vector, using serde's view of the struct as the field
//! walk:
//!
//! - **Tags**: the serialized field name is the tag, so
//!   `#[serde(rename = "0")]` makes a positional argument and
//!   `#[serde(rename = "v")]` a short flag
//! - **Untagged fields**: `#[serde(skip)]`, or `#[serde(rename = "")]`
//! - **Embedding**: `#[serde(flatten)]` splices a nested struct's fields in place
//! - **Zero values**: `false`, `0`, `""`, empty lists, `None` and `()` are skipped;
//!   a value inside `Some` is always emitted, so `Some(0)` becomes `0`
//! - **Custom rendering**: [`as_arg`] and [`as_optional_arg`] route a field
//!   through [`MarshalArg`]
//!
//! Anything else (floats, maps, nested structs that are not flattened, lists of
//! non-strings, byte strings, enum variants with data) fails with
//! [`Error::UnsupportedType`] and no arguments are produced.
//!
//! ## Usage
//!
//! ```rust
//! use serde::Serialize;
//! use serde_args::to_args;
//!
//! #[derive(Serialize)]
//! struct Credentials {
//!     user: String,
//!     password: String,
//! }
//!
//! #[derive(Serialize)]
//! struct Options {
//!     #[serde(flatten)]
//!     credentials: Credentials,
//!     #[serde(rename = "1")]
//!     file: String,
//!     #[serde(rename = "0")]
//!     destination: String,
//!     repeated: Vec<String>,
//! }
//!
//! let opts = Options {
//!     credentials: Credentials { user: "root".into(), password: String::new() },
//!     file: "/tmp/foo".into(),
//!     destination: "/tmp/bar".into(),
//!     repeated: vec!["foo".into(), "bar".into()],
//! };
//!
//! assert_eq!(
//!     to_args(&opts).unwrap(),
//!     ["--user=root", "--repeated=foo", "--repeated=bar", "/tmp/bar", "/tmp/foo"]
//! );
//! ```
//!
//! ## Direct Serializer Usage
//!
//! ```rust
//! use serde::Serialize;
//! use serde_args::Serializer;
//!
//! #[derive(Serialize)]
//! struct Opts { v: bool }
//!
//! let mut serializer = Serializer::new();
//! Opts { v: true }.serialize(&mut serializer).unwrap();
//! assert_eq!(serializer.into_inner(), ["-v"]);
//! ```

use crate::{ArgValue, ArgsBuilder, Error, MarshalArg, Result, Tag};
use serde::ser::Serializer as _;
use serde::{ser, Serialize};
use std::borrow::Cow;
use tracing::trace;

/// Serializes a field through its [`MarshalArg`] rendering.
///
/// A value whose [`MarshalArg::is_zero`] holds is serialized as none and
/// skipped. Use with `#[serde(serialize_with = "serde_args::as_arg")]`.
pub fn as_arg<T, S>(value: &T, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    T: MarshalArg + ?Sized,
    S: ser::Serializer,
{
    if value.is_zero() {
        return serializer.serialize_none();
    }
    serializer.serialize_str(&value.marshal_arg())
}

/// Like [`as_arg`] for optional fields; `None` is skipped and `Some` is
/// always emitted.
///
/// Use with `#[serde(serialize_with = "serde_args::as_optional_arg")]`.
pub fn as_optional_arg<T, S>(
    value: &Option<T>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error>
where
    T: MarshalArg,
    S: ser::Serializer,
{
    match value {
        Some(v) => serializer.serialize_some(&v.marshal_arg()),
        None => serializer.serialize_none(),
    }
}

/// The argument serializer.
///
/// Accepts a struct or string-keyed map at the top level and collects every
/// field into an [`ArgsBuilder`].
#[derive(Debug, Default)]
pub struct Serializer {
    builder: ArgsBuilder,
}

impl Serializer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assembles the collected arguments.
    pub fn into_inner(self) -> Vec<String> {
        self.builder.finish()
    }

    fn push_field<T>(&mut self, key: &str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let Some(tag) = Tag::parse(key) else {
            trace!("skipping untagged field");
            return Ok(());
        };

        match value.serialize(ValueSerializer).map_err(|e| e.at_tag(key))? {
            Slot::Set(value) => self.builder.push(&tag, &value),
            Slot::Value(value) if !value.is_zero() => self.builder.push(&tag, &value),
            _ => trace!(%tag, "skipping zero value"),
        }
        Ok(())
    }
}

fn top_level(kind: &str) -> Error {
    Error::unsupported_type(&format!("{kind} at top level; expected a struct or map"))
}

impl<'a> ser::Serializer for &'a mut Serializer {
    type Ok = ();
    type Error = Error;

    type SerializeSeq = ser::Impossible<(), Error>;
    type SerializeTuple = ser::Impossible<(), Error>;
    type SerializeTupleStruct = ser::Impossible<(), Error>;
    type SerializeTupleVariant = ser::Impossible<(), Error>;
    type SerializeMap = MapSerializer<'a>;
    type SerializeStruct = StructSerializer<'a>;
    type SerializeStructVariant = ser::Impossible<(), Error>;

    fn serialize_bool(self, _v: bool) -> Result<Self::Ok> {
        Err(top_level("bool"))
    }

    fn serialize_i8(self, v: i8) -> Result<Self::Ok> {
        self.serialize_i64(v as i64)
    }

    fn serialize_i16(self, v: i16) -> Result<Self::Ok> {
        self.serialize_i64(v as i64)
    }

    fn serialize_i32(self, v: i32) -> Result<Self::Ok> {
        self.serialize_i64(v as i64)
    }

    fn serialize_i64(self, _v: i64) -> Result<Self::Ok> {
        Err(top_level("integer"))
    }

    fn serialize_u8(self, v: u8) -> Result<Self::Ok> {
        self.serialize_u64(v as u64)
    }

    fn serialize_u16(self, v: u16) -> Result<Self::Ok> {
        self.serialize_u64(v as u64)
    }

    fn serialize_u32(self, v: u32) -> Result<Self::Ok> {
        self.serialize_u64(v as u64)
    }

    fn serialize_u64(self, _v: u64) -> Result<Self::Ok> {
        Err(top_level("integer"))
    }

    fn serialize_f32(self, v: f32) -> Result<Self::Ok> {
        self.serialize_f64(v as f64)
    }

    fn serialize_f64(self, _v: f64) -> Result<Self::Ok> {
        Err(top_level("float"))
    }

    fn serialize_char(self, _v: char) -> Result<Self::Ok> {
        Err(top_level("char"))
    }

    fn serialize_str(self, _v: &str) -> Result<Self::Ok> {
        Err(top_level("string"))
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<Self::Ok> {
        Err(top_level("bytes"))
    }

    fn serialize_none(self) -> Result<Self::Ok> {
        Ok(())
    }

    fn serialize_some<T>(self, value: &T) -> Result<Self::Ok>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Self::Ok> {
        Ok(())
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Self::Ok> {
        Ok(())
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
    ) -> Result<Self::Ok> {
        Err(top_level("enum"))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Self::Ok>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<Self::Ok>
    where
        T: ?Sized + Serialize,
    {
        Err(top_level("enum"))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq> {
        Err(top_level("sequence"))
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple> {
        Err(top_level("tuple"))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        Err(top_level("tuple struct"))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(top_level("enum"))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        Ok(MapSerializer {
            ser: self,
            current_key: None,
        })
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<Self::SerializeStruct> {
        Ok(StructSerializer { ser: self })
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(top_level("enum"))
    }
}

pub struct StructSerializer<'a> {
    ser: &'a mut Serializer,
}

impl<'a> ser::SerializeStruct for StructSerializer<'a> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.ser.push_field(key, value)
    }

    fn end(self) -> Result<Self::Ok> {
        Ok(())
    }
}

/// Receives struct fields as map entries; this is how serde delivers
/// `#[serde(flatten)]` fields.
pub struct MapSerializer<'a> {
    ser: &'a mut Serializer,
    current_key: Option<String>,
}

impl<'a> ser::SerializeMap for MapSerializer<'a> {
    type Ok = ();
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        match key.serialize(ValueSerializer)? {
            Slot::Value(ArgValue::Str(s)) | Slot::Set(ArgValue::Str(s)) => {
                self.current_key = Some(s.into_owned());
                Ok(())
            }
            _ => Err(Error::custom("Map keys must be strings")),
        }
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .current_key
            .take()
            .ok_or_else(|| Error::custom("serialize_value called without serialize_key"))?;
        self.ser.push_field(&key, value)
    }

    fn end(self) -> Result<Self::Ok> {
        Ok(())
    }
}

/// Converts a single field value.
struct ValueSerializer;

/// A serialized field value.
enum Slot {
    /// Nothing to emit.
    Empty,
    /// Skipped when zero.
    Value(ArgValue<'static>),
    /// Came through `Some`; emitted even when zero.
    Set(ArgValue<'static>),
}

fn owned_str(s: impl Into<String>) -> Result<Slot> {
    Ok(Slot::Value(ArgValue::Str(Cow::Owned(s.into()))))
}

impl ser::Serializer for ValueSerializer {
    type Ok = Slot;
    type Error = Error;

    type SerializeSeq = ListSerializer;
    type SerializeTuple = ser::Impossible<Slot, Error>;
    type SerializeTupleStruct = ser::Impossible<Slot, Error>;
    type SerializeTupleVariant = ser::Impossible<Slot, Error>;
    type SerializeMap = ser::Impossible<Slot, Error>;
    type SerializeStruct = ser::Impossible<Slot, Error>;
    type SerializeStructVariant = ser::Impossible<Slot, Error>;

    fn serialize_bool(self, v: bool) -> Result<Slot> {
        Ok(Slot::Value(ArgValue::Bool(v)))
    }

    fn serialize_i8(self, v: i8) -> Result<Slot> {
        self.serialize_i128(v as i128)
    }

    fn serialize_i16(self, v: i16) -> Result<Slot> {
        self.serialize_i128(v as i128)
    }

    fn serialize_i32(self, v: i32) -> Result<Slot> {
        self.serialize_i128(v as i128)
    }

    fn serialize_i64(self, v: i64) -> Result<Slot> {
        self.serialize_i128(v as i128)
    }

    fn serialize_i128(self, v: i128) -> Result<Slot> {
        Ok(Slot::Value(ArgValue::Int(v)))
    }

    fn serialize_u8(self, v: u8) -> Result<Slot> {
        self.serialize_i128(v as i128)
    }

    fn serialize_u16(self, v: u16) -> Result<Slot> {
        self.serialize_i128(v as i128)
    }

    fn serialize_u32(self, v: u32) -> Result<Slot> {
        self.serialize_i128(v as i128)
    }

    fn serialize_u64(self, v: u64) -> Result<Slot> {
        self.serialize_i128(v as i128)
    }

    fn serialize_u128(self, v: u128) -> Result<Slot> {
        match i128::try_from(v) {
            Ok(v) => self.serialize_i128(v),
            Err(_) => owned_str(v.to_string()),
        }
    }

    fn serialize_f32(self, _v: f32) -> Result<Slot> {
        Err(Error::unsupported_type("f32"))
    }

    fn serialize_f64(self, _v: f64) -> Result<Slot> {
        Err(Error::unsupported_type("f64"))
    }

    fn serialize_char(self, v: char) -> Result<Slot> {
        owned_str(v)
    }

    fn serialize_str(self, v: &str) -> Result<Slot> {
        owned_str(v)
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<Slot> {
        Err(Error::unsupported_type("bytes"))
    }

    fn serialize_none(self) -> Result<Slot> {
        Ok(Slot::Empty)
    }

    fn serialize_some<T>(self, value: &T) -> Result<Slot>
    where
        T: ?Sized + Serialize,
    {
        Ok(match value.serialize(self)? {
            Slot::Value(value) => Slot::Set(value),
            other => other,
        })
    }

    fn serialize_unit(self) -> Result<Slot> {
        Ok(Slot::Empty)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Slot> {
        Ok(Slot::Empty)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Slot> {
        owned_str(variant)
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Slot>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _value: &T,
    ) -> Result<Slot>
    where
        T: ?Sized + Serialize,
    {
        Err(Error::unsupported_type(&format!("enum variant `{name}::{variant}`")))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<ListSerializer> {
        Ok(ListSerializer {
            items: Vec::with_capacity(len.unwrap_or(0)),
        })
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple> {
        Err(Error::unsupported_type("tuple"))
    }

    fn serialize_tuple_struct(
        self,
        name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        Err(Error::unsupported_type(&format!("tuple struct `{name}`")))
    }

    fn serialize_tuple_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(Error::unsupported_type(&format!("enum variant `{name}::{variant}`")))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        Err(Error::unsupported_type("map"))
    }

    fn serialize_struct(self, name: &'static str, _len: usize) -> Result<Self::SerializeStruct> {
        Err(Error::unsupported_type(&format!(
            "nested struct `{name}`; embed it with #[serde(flatten)]"
        )))
    }

    fn serialize_struct_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(Error::unsupported_type(&format!("enum variant `{name}::{variant}`")))
    }
}

/// Collects a list of strings.
struct ListSerializer {
    items: Vec<Cow<'static, str>>,
}

impl ser::SerializeSeq for ListSerializer {
    type Ok = Slot;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        match value.serialize(ValueSerializer)? {
            Slot::Value(ArgValue::Str(s)) | Slot::Set(ArgValue::Str(s)) => {
                self.items.push(s);
                Ok(())
            }
            Slot::Value(other) | Slot::Set(other) => Err(Error::unsupported_type(&format!(
                "list of {}; only string lists are supported",
                other.kind()
            ))),
            Slot::Empty => Err(Error::unsupported_type("list element without a value")),
        }
    }

    fn end(self) -> Result<Slot> {
        Ok(Slot::Value(ArgValue::StrList(self.items)))
    }
}
