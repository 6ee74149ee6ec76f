//! # serde_args
//!
//! Turn a configuration struct into the argument vector of an external
//! program.
//!
//! ## How Fields Become Arguments
//!
//! Every field carries a tag. A tag that parses as a non-negative integer makes
//! the field positional; any other tag is a flag name:
//!
//! - **One-character flags** are spelled `-x value` (two tokens)
//! - **Longer flags** are spelled `--name=value` (one token)
//! - **Booleans** are presence flags: `-x` / `--name` when true, nothing when false
//! - **String lists** repeat the flag once per element, or take consecutive
//!   positional slots
//! - **Zero values** (`false`, `0`, `""`, empty lists, unset options) are
//!   skipped; a set option is emitted even when it holds a zero value
//!
//! Named flags come first, in field order. Positional arguments follow, ordered
//! by index regardless of where their fields were declared.
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! serde_args = "0.1"
//! serde = { version = "1.0", features = ["derive"] }
//! ```
//!
//! ### With serde
//!
//! The serialized field name is the tag, so `#[serde(rename = "...")]` picks
//! the flag name or position and `#[serde(flatten)]` embeds another struct.
//!
//! ```rust
//! use serde::Serialize;
//! use serde_args::to_args;
//!
//! #[derive(Serialize)]
//! struct CopyFiles {
//!     #[serde(rename = "r")]
//!     recursive: bool,
//!     #[serde(rename = "1")]
//!     dest: String,
//!     #[serde(rename = "0")]
//!     source: String,
//! }
//!
//! let args = to_args(&CopyFiles {
//!     recursive: true,
//!     dest: "/backup".into(),
//!     source: "/data".into(),
//! })
//! .unwrap();
//! assert_eq!(args, ["-r", "/data", "/backup"]);
//! ```
//!
//! ### With explicit field descriptors
//!
//! Types that cannot or should not derive `Serialize` implement [`Record`],
//! by hand or with [`impl_record!`]. This path cannot fail.
//!
//! ```rust
//! use serde_args::{impl_record, marshal};
//!
//! struct Ping {
//!     count: u32,
//!     host: String,
//! }
//!
//! impl_record!(Ping { count => "c", host => "0" });
//!
//! let args = marshal(&Ping { count: 3, host: "example.com".into() });
//! assert_eq!(args, ["-c", "3", "example.com"]);
//! ```
//!
//! ## Custom Values
//!
//! Types outside the built-in set implement [`MarshalArg`] to render
//! themselves as a single string. The tag still decides the token shape, and
//! [`MarshalArg::is_zero`] decides whether the value is skipped.
//!
//! ## Logging
//!
//! Skipped fields are reported at `trace` level and the assembled vector at
//! `debug` level through [`tracing`]. Positional gaps and overwritten
//! positions are reported at `warn` level. No subscriber is installed by this
//! crate.

pub mod encode;
pub mod error;
pub mod macros;
pub mod record;
pub mod ser;
pub mod tag;
pub mod value;
pub mod walk;

pub use encode::{encode, ArgsBuilder};
pub use error::{Error, Result};
pub use record::{Field, FieldValue, Record, ToFieldValue};
pub use ser::{as_arg, as_optional_arg, Serializer};
pub use tag::{FlagStyle, Tag};
pub use value::{ArgValue, MarshalArg};
pub use walk::walk;

use serde::Serialize;
use std::ffi::OsStr;
use std::process::Command;

/// Marshal a [`Record`] into an argument vector.
///
/// # Examples
///
/// ```rust
/// use serde_args::{marshal, Field, Record};
///
/// struct Opts {
///     verbose: bool,
/// }
///
/// impl Record for Opts {
///     fn describe_fields(&self) -> Vec<Field<'_>> {
///         vec![Field::new("verbose", "verbose", &self.verbose)]
///     }
/// }
///
/// assert_eq!(marshal(&Opts { verbose: true }), ["--verbose"]);
/// assert!(marshal(&Opts { verbose: false }).is_empty());
/// ```
#[must_use]
pub fn marshal<R>(record: &R) -> Vec<String>
where
    R: Record + ?Sized,
{
    let mut builder = ArgsBuilder::new();
    for (tag, value) in walk(record) {
        builder.push(&tag, &value);
    }
    builder.finish()
}

/// Serialize any `T: Serialize` struct into an argument vector.
///
/// # Errors
///
/// Returns [`Error::UnsupportedType`] if a field holds a value with no
/// argument encoding, or if `T` is not a struct or string-keyed map. No
/// arguments are returned in that case.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_args<T>(value: &T) -> Result<Vec<String>>
where
    T: ?Sized + Serialize,
{
    let mut serializer = Serializer::new();
    value.serialize(&mut serializer)?;
    Ok(serializer.into_inner())
}

/// Build a [`Command`] for `program` with the arguments of a [`Record`].
///
/// The arguments are passed to the process as-is; no shell is involved.
///
/// # Examples
///
/// ```rust
/// use serde_args::{command, impl_record};
///
/// struct Echo {
///     text: String,
/// }
///
/// impl_record!(Echo { text => "0" });
///
/// let cmd = command("echo", &Echo { text: "hello".into() });
/// assert_eq!(cmd.get_args().collect::<Vec<_>>(), ["hello"]);
/// ```
#[must_use]
pub fn command<P, R>(program: P, record: &R) -> Command
where
    P: AsRef<OsStr>,
    R: Record + ?Sized,
{
    let mut cmd = Command::new(program);
    cmd.args(marshal(record));
    cmd
}

/// Build a [`Command`] for `program` with the serialized arguments of `value`.
///
/// # Errors
///
/// Fails like [`to_args`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_command<P, T>(program: P, value: &T) -> Result<Command>
where
    P: AsRef<OsStr>,
    T: ?Sized + Serialize,
{
    let mut cmd = Command::new(program);
    cmd.args(to_args(value)?);
    Ok(cmd)
}
