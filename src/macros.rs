/// Implements [`Record`](crate::Record) for a struct from a field list.
///
/// Each entry is either `field => "tag"` or `..field` for an embedded record.
/// Entries are walked in the order they are listed.
///
/// ```rust
/// use serde_args::{impl_record, marshal};
///
/// struct Credentials {
///     user: String,
/// }
///
/// impl_record!(Credentials { user => "user" });
///
/// struct Rsync {
///     credentials: Credentials,
///     archive: bool,
///     source: String,
///     dest: String,
/// }
///
/// impl_record!(Rsync {
///     ..credentials,
///     archive => "a",
///     dest => "1",
///     source => "0",
/// });
///
/// let sync = Rsync {
///     credentials: Credentials { user: "root".into() },
///     archive: true,
///     source: "src/".into(),
///     dest: "host:dst/".into(),
/// };
/// assert_eq!(marshal(&sync), ["--user=root", "-a", "src/", "host:dst/"]);
/// ```
#[macro_export]
macro_rules! impl_record {
    (@fields $this:ident, $fields:ident, ) => {};

    // Embedded record
    (@fields $this:ident, $fields:ident, .. $field:ident $(, $($rest:tt)*)?) => {
        $fields.push($crate::Field::embedded(stringify!($field), &$this.$field));
        $crate::impl_record!(@fields $this, $fields, $($($rest)*)?);
    };

    // Tagged field
    (@fields $this:ident, $fields:ident, $field:ident => $tag:literal $(, $($rest:tt)*)?) => {
        $fields.push($crate::Field::new(stringify!($field), $tag, &$this.$field));
        $crate::impl_record!(@fields $this, $fields, $($($rest)*)?);
    };

    ($ty:ty { $($body:tt)* }) => {
        impl $crate::Record for $ty {
            fn describe_fields(&self) -> ::std::vec::Vec<$crate::Field<'_>> {
                #[allow(unused_mut)]
                let mut fields = ::std::vec::Vec::new();
                $crate::impl_record!(@fields self, fields, $($body)*);
                fields
            }
        }
    };
}
