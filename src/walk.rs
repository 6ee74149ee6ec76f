//! Field traversal.
//!
//! [`walk`] flattens a [`Record`] into the `(tag, value)` pairs that will be
//! encoded. Embedded records are expanded in place, depth first. A field is
//! dropped when it has no tag, is not exported, or holds a zero value. A value
//! inside a set `Option` is kept even when the inner value is zero.

use crate::{ArgValue, Field, FieldValue, Record, Tag};
use tracing::trace;

/// Returns the encodable fields of `record` in walk order.
#[must_use]
pub fn walk<'a, R>(record: &'a R) -> Vec<(Tag, ArgValue<'a>)>
where
    R: Record + ?Sized,
{
    let mut out = Vec::new();
    walk_fields(record.describe_fields(), &mut out);
    out
}

fn walk_fields<'a>(fields: Vec<Field<'a>>, out: &mut Vec<(Tag, ArgValue<'a>)>) {
    for field in fields {
        if let FieldValue::Embedded(inner) = field.value {
            trace!(field = field.name, "expanding embedded record");
            walk_fields(inner.describe_fields(), out);
            continue;
        }

        let Some(tag) = Tag::parse(field.tag) else {
            trace!(field = field.name, "skipping untagged field");
            continue;
        };

        if !field.exported {
            trace!(field = field.name, "skipping private field");
            continue;
        }

        match field.value {
            FieldValue::Set(value) => out.push((tag, value)),
            FieldValue::Arg(value) if !value.is_zero() => out.push((tag, value)),
            _ => trace!(field = field.name, %tag, "skipping zero value"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Inner {
        user: String,
        password: String,
    }

    impl Record for Inner {
        fn describe_fields(&self) -> Vec<Field<'_>> {
            vec![
                Field::new("user", "user", &self.user),
                Field::new("password", "password", &self.password),
            ]
        }
    }

    struct Outer {
        first: bool,
        inner: Inner,
        note: String,
        secret: String,
        last: i32,
    }

    impl Record for Outer {
        fn describe_fields(&self) -> Vec<Field<'_>> {
            vec![
                Field::new("first", "first", &self.first),
                Field::embedded("inner", &self.inner),
                Field::new("note", "", &self.note),
                Field::new("secret", "secret", &self.secret).private(),
                Field::new("last", "0", &self.last),
            ]
        }
    }

    fn outer() -> Outer {
        Outer {
            first: true,
            inner: Inner {
                user: "root".into(),
                password: String::new(),
            },
            note: "ignored".into(),
            secret: "hidden".into(),
            last: 7,
        }
    }

    #[test]
    fn test_walk_order_and_skips() {
        let opts = outer();
        let walked = walk(&opts);

        assert_eq!(
            walked,
            vec![
                (Tag::Flag("first".into()), ArgValue::Bool(true)),
                (Tag::Flag("user".into()), ArgValue::from("root")),
                (Tag::Positional(0), ArgValue::Int(7)),
            ]
        );
    }

    #[test]
    fn test_walk_all_zero() {
        let opts = Outer {
            first: false,
            inner: Inner {
                user: String::new(),
                password: String::new(),
            },
            note: String::new(),
            secret: String::new(),
            last: 0,
        };
        assert!(walk(&opts).is_empty());
    }

    struct Limits {
        limit: Option<u32>,
        dry_run: Option<bool>,
        label: Option<String>,
    }

    impl Record for Limits {
        fn describe_fields(&self) -> Vec<Field<'_>> {
            vec![
                Field::new("limit", "limit", &self.limit),
                Field::new("dry_run", "0", &self.dry_run),
                Field::new("label", "label", &self.label),
            ]
        }
    }

    #[test]
    fn test_walk_keeps_set_zero_options() {
        let limits = Limits {
            limit: Some(0),
            dry_run: Some(false),
            label: None,
        };
        assert_eq!(
            walk(&limits),
            vec![
                (Tag::Flag("limit".into()), ArgValue::Int(0)),
                (Tag::Positional(0), ArgValue::Bool(false)),
            ]
        );
        assert_eq!(crate::marshal(&limits), ["--limit=0", "false"]);
    }

    #[test]
    fn test_walk_through_trait_object() {
        let opts = outer();
        let record: &dyn Record = &opts;
        assert_eq!(walk(record).len(), 3);
    }
}
