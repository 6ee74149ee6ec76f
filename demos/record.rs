//! Building an rsync invocation from a hand-described record.
//!
//! Run with: cargo run --example record

use serde_args::{command, impl_record, FieldValue, MarshalArg, ToFieldValue};

/// Rendered as `y`/`n` instead of a presence flag.
struct YesNo(bool);

impl MarshalArg for YesNo {
    fn marshal_arg(&self) -> String {
        if self.0 {
            "y".to_string()
        } else {
            "n".to_string()
        }
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

struct Remote {
    rsh: String,
    port: u16,
}

impl_record!(Remote { rsh => "rsh", port => "port" });

struct Rsync {
    remote: Remote,
    archive: bool,
    compress: bool,
    partial: Option<YesNo>,
    exclude: Vec<String>,
    dest: String,
    source: String,
}

impl_record!(Rsync {
    ..remote,
    archive => "a",
    compress => "z",
    partial => "partial",
    exclude => "exclude",
    dest => "1",
    source => "0",
});

fn main() {
    let sync = Rsync {
        remote: Remote {
            rsh: "ssh -i ~/.ssh/backup".to_string(),
            port: 0,
        },
        archive: true,
        compress: false,
        partial: Some(YesNo(true)),
        exclude: vec!["*.tmp".to_string(), ".cache/".to_string()],
        dest: "backup@host:/data/".to_string(),
        source: "/srv/data/".to_string(),
    };

    let cmd = command("rsync", &sync);
    println!("{:?}", cmd);
    for arg in cmd.get_args() {
        println!("  {}", arg.to_string_lossy());
    }
}
